//! Per-frame hand-off from the view model to a renderer.

use crate::coords::Mat3;
use crate::view::{ViewGeometry, ViewState};

/// Something that can draw the image quad under a transform.
///
/// GPU resources stay behind this trait; the view model only sets the
/// transform and asks for a draw.
pub trait QuadTarget {
    fn set_transform(&mut self, transform: Mat3);
    fn draw(&mut self);
}

/// Draws one frame: uploads the current view transform, then issues the draw.
pub fn present<T: QuadTarget + ?Sized>(view: &ViewState, geometry: &ViewGeometry, target: &mut T) {
    target.set_transform(view.transformation(geometry));
    target.draw();
}
