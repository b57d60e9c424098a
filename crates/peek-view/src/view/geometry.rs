use crate::coords::Vec2;

/// Viewport and image dimensions the view transform is evaluated against.
///
/// Viewport sizes are physical pixels. Zero sizes (minimized windows) are
/// treated as 1 so aspect ratios stay finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewGeometry {
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Image width divided by image height.
    pub image_aspect: f32,
}

impl ViewGeometry {
    #[inline]
    pub const fn new(viewport_width: u32, viewport_height: u32, image_aspect: f32) -> Self {
        Self { viewport_width, viewport_height, image_aspect }
    }

    /// Geometry for an image of `width × height` pixels.
    pub fn for_image(viewport_width: u32, viewport_height: u32, width: u32, height: u32) -> Self {
        let aspect = f64::from(width) / f64::from(height.max(1));
        Self::new(viewport_width, viewport_height, aspect as f32)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.viewport_width.max(1)
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.viewport_height.max(1)
    }

    pub fn viewport_aspect(&self) -> f64 {
        f64::from(self.width()) / f64::from(self.height())
    }

    /// Scale that fits the image inside the viewport, preserving aspect ratio.
    ///
    /// The constraining axis is 1.0; the other axis is
    /// `min(viewport_aspect, image_aspect) / max(viewport_aspect, image_aspect)`.
    pub fn fit_scale(&self) -> Vec2 {
        let image = f64::from(self.image_aspect);
        let window = self.viewport_aspect();
        if image > window {
            Vec2::new(1.0, (window / image) as f32)
        } else {
            Vec2::new((image / window) as f32, 1.0)
        }
    }

    /// Converts a raw pixel position (top-left origin, +Y down) to view space.
    pub fn normalize_pointer(&self, px: f32, py: f32) -> Vec2 {
        let w = self.width() as f32;
        let h = self.height() as f32;
        Vec2::new(2.0 * px / w - 1.0, 2.0 * (h - py) / h - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn square_image_in_landscape_window_shrinks_x() {
        let g = ViewGeometry::new(800, 600, 1.0);
        let s = g.fit_scale();
        assert_relative_eq!(s.x, 0.75, epsilon = 1e-6);
        assert_eq!(s.y, 1.0);
    }

    #[test]
    fn wide_image_in_square_window_shrinks_y() {
        let g = ViewGeometry::new(500, 500, 2.0);
        let s = g.fit_scale();
        assert_eq!(s.x, 1.0);
        assert_relative_eq!(s.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn matching_aspects_fill_viewport() {
        let g = ViewGeometry::for_image(1920, 1080, 3840, 2160);
        let s = g.fit_scale();
        assert_relative_eq!(s.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(s.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_viewport_is_clamped() {
        let g = ViewGeometry::new(0, 0, 1.0);
        assert!(g.fit_scale().is_finite());
        assert_eq!(g.viewport_aspect(), 1.0);
    }

    #[test]
    fn pointer_corners_map_to_unit_square() {
        let g = ViewGeometry::new(800, 600, 1.0);
        assert_eq!(g.normalize_pointer(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(g.normalize_pointer(800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(g.normalize_pointer(400.0, 300.0), Vec2::new(0.0, 0.0));
    }
}
