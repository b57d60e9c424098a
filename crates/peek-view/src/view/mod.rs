//! View state and the transform derived from it.

mod geometry;
mod state;

pub use geometry::ViewGeometry;
pub use state::{ViewState, ZOOM_BASE};
