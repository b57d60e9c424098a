/// Drawable size in physical pixels.
///
/// Both dimensions are at least 1; a minimized window reports 1×1 rather than
/// a zero size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for Viewport {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_clamp_to_one() {
        assert_eq!(Viewport::new(0, 480), Viewport { width: 1, height: 480 });
        assert_eq!(Viewport::new(640, 0), Viewport { width: 640, height: 1 });
    }

    #[test]
    fn from_physical_size() {
        let v = Viewport::from(winit::dpi::PhysicalSize::new(1920u32, 1080u32));
        assert_eq!(v, Viewport::new(1920, 1080));
    }
}
