//! The `peek` image viewer: decodes one image, uploads it, and lets the user
//! pan and zoom it with the mouse.

pub mod app;
pub mod cli;
pub mod decode;
pub mod error;
