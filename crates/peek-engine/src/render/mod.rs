//! GPU rendering.
//!
//! The viewer draws a single textured quad. [`ImageRenderer`] owns every GPU
//! resource involved (pipeline, texture, sampler, quad buffers, transform
//! uniform); callers only hand it texels once and a transform per frame.

mod ctx;
mod image;
mod quad;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use image::ImageRenderer;
pub use texture::TextureImage;
