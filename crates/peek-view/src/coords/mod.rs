//! Math types for the view model.
//!
//! View space:
//! - Normalized device units, `[-1, 1]` on both axes
//! - Origin at the viewport center
//! - +X right, +Y up
//!
//! The image quad spans `[-1, 1]²` in image space before the view transform.

mod mat3;
mod vec2;

pub use mat3::Mat3;
pub use vec2::Vec2;
