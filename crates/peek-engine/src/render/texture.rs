use anyhow::{ensure, Result};

/// Tightly packed RGBA8 texels ready for upload, rows top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct TextureImage<'a> {
    pub width: u32,
    pub height: u32,
    pub rgba: &'a [u8],
}

impl<'a> TextureImage<'a> {
    pub fn new(width: u32, height: u32, rgba: &'a [u8]) -> Self {
        Self { width, height, rgba }
    }

    /// Bytes per row of the packed buffer.
    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width.saturating_mul(4)
    }

    /// Checks the buffer shape and that both sides fit `max_dimension`.
    pub fn validate(&self, max_dimension: u32) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "texture has zero size ({}x{})",
            self.width,
            self.height
        );
        ensure!(
            self.width <= max_dimension && self.height <= max_dimension,
            "image {}x{} exceeds the GPU texture limit of {max_dimension}",
            self.width,
            self.height
        );

        let expected = u64::from(self.width) * u64::from(self.height) * 4;
        ensure!(
            self.rgba.len() as u64 == expected,
            "texel buffer holds {} bytes, expected {expected} for {}x{} RGBA8",
            self.rgba.len(),
            self.width,
            self.height
        );
        Ok(())
    }

    pub(super) fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        }
    }
}
