use crate::coords::{Mat3, Vec2};

use super::geometry::ViewGeometry;

/// Magnification applied per zoom step.
pub const ZOOM_BASE: f32 = 1.25;

/// Current pan and zoom.
///
/// `center` is the image-space point shown at the viewport center.
/// `zoom_level` is an unbounded exponent; magnification is `ZOOM_BASE^zoom_level`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ViewState {
    pub center: Vec2,
    pub zoom_level: i32,
}

impl ViewState {
    pub const fn new() -> Self {
        Self { center: Vec2::zero(), zoom_level: 0 }
    }

    #[inline]
    pub fn zoom_factor(&self) -> f32 {
        ZOOM_BASE.powi(self.zoom_level)
    }

    /// Per-axis scale: aspect fit multiplied by the zoom factor.
    pub fn compute_scale(&self, geometry: &ViewGeometry) -> Vec2 {
        geometry.fit_scale() * self.zoom_factor()
    }

    /// `Scale(compute_scale) * Translate(-center)`.
    ///
    /// Translation happens in image space, so a given `center` offset moves the
    /// image by an amount proportional to the current scale.
    pub fn transformation(&self, geometry: &ViewGeometry) -> Mat3 {
        Mat3::scale(self.compute_scale(geometry)) * Mat3::translate(-self.center)
    }

    /// Image-space point under a view-space position.
    #[inline]
    pub fn world_at(&self, pointer: Vec2, geometry: &ViewGeometry) -> Vec2 {
        self.center + pointer / self.compute_scale(geometry)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn starts_centered_at_unit_zoom() {
        let v = ViewState::new();
        assert_eq!(v.center, Vec2::zero());
        assert_eq!(v.zoom_level, 0);
        assert_eq!(v.zoom_factor(), 1.0);
    }

    #[test]
    fn negative_zoom_shrinks() {
        let v = ViewState { zoom_level: -2, ..ViewState::new() };
        assert_relative_eq!(v.zoom_factor(), 0.64, epsilon = 1e-6);
    }

    #[test]
    fn transformation_maps_center_to_origin() {
        let g = ViewGeometry::new(640, 480, 1.5);
        let v = ViewState { center: Vec2::new(0.3, -0.2), zoom_level: 3 };
        let p = v.transformation(&g).transform_point(v.center);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn world_at_inverts_transformation() {
        let g = ViewGeometry::new(1024, 768, 0.8);
        let v = ViewState { center: Vec2::new(-0.4, 0.1), zoom_level: -1 };
        let pointer = Vec2::new(0.5, -0.25);
        let screen = v.transformation(&g).transform_point(v.world_at(pointer, &g));
        assert_relative_eq!(screen.x, pointer.x, epsilon = 1e-5);
        assert_relative_eq!(screen.y, pointer.y, epsilon = 1e-5);
    }
}
