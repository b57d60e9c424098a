//! Plain value types shared between the runtime and renderers.
//!
//! Surface-facing sizes are physical pixels (top-left origin, +Y down).

mod color;
mod viewport;

pub use color::ColorRgba;
pub use viewport::Viewport;
