//! Windowing and GPU runtime for the peek image viewer.
//!
//! Layers, bottom up:
//! - [`coords`]: surface sizes and colors
//! - [`device`]: wgpu device, surface and frame acquisition
//! - [`input`]: platform-agnostic input events and state
//! - [`render`]: the textured-quad image renderer
//! - [`core`] + [`window`]: the app contract and the winit event loop driving it
//! - [`logging`]: `env_logger` setup

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod window;
