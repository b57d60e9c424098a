//! Image file decoding into 8-bit pixel buffers.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::{Result, ViewerError};

/// Channel layout of a decoded image, one byte per channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelLayout {
    Mono8,
    MonoAlpha8,
    Rgb8,
    Rgba8,
}

impl fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelLayout::Mono8 => "mono8",
            PixelLayout::MonoAlpha8 => "mono-alpha8",
            PixelLayout::Rgb8 => "rgb8",
            PixelLayout::Rgba8 => "rgba8",
        };
        f.write_str(name)
    }
}

/// Tightly packed pixels, rows top to bottom.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Converts a decoded `image` buffer, rejecting empty images and layouts
    /// wider than 8 bits per channel.
    pub fn from_dynamic(path: &Path, image: DynamicImage) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(ViewerError::EmptyImage { path: path.to_path_buf() });
        }

        let (layout, pixels) = match image {
            DynamicImage::ImageLuma8(buf) => (PixelLayout::Mono8, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (PixelLayout::MonoAlpha8, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (PixelLayout::Rgb8, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (PixelLayout::Rgba8, buf.into_raw()),
            other => {
                return Err(ViewerError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    layout: format!("{:?}", other.color()),
                });
            }
        };

        Ok(Self { width, height, layout, pixels })
    }

    /// RGBA8 view of the pixels. Gray is replicated into RGB and missing
    /// alpha becomes 255.
    pub fn to_rgba8(&self) -> Cow<'_, [u8]> {
        let px = &self.pixels;
        match self.layout {
            PixelLayout::Rgba8 => Cow::Borrowed(px),
            PixelLayout::Rgb8 => Cow::Owned(
                px.chunks_exact(3)
                    .flat_map(|c| [c[0], c[1], c[2], u8::MAX])
                    .collect(),
            ),
            PixelLayout::MonoAlpha8 => Cow::Owned(
                px.chunks_exact(2)
                    .flat_map(|c| [c[0], c[0], c[0], c[1]])
                    .collect(),
            ),
            PixelLayout::Mono8 => Cow::Owned(px.iter().flat_map(|&g| [g, g, g, u8::MAX]).collect()),
        }
    }
}

/// Reads and decodes the image at `path`. The format is sniffed from the
/// file contents, falling back to the extension.
pub fn load_image(path: &Path) -> Result<DecodedImage> {
    let io_err = |source| ViewerError::Io { path: path.to_path_buf(), source };

    let reader = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?;

    let image = reader.decode().map_err(|source| ViewerError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    DecodedImage::from_dynamic(path, image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, RgbImage};

    #[test]
    fn gray_png_expands_to_opaque_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_raw(2, 1, vec![10, 200]).unwrap().save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width, img.height, img.layout), (2, 1, PixelLayout::Mono8));
        assert_eq!(img.to_rgba8().as_ref(), &[10, 10, 10, 255, 200, 200, 200, 255]);
    }

    #[test]
    fn rgb_png_gains_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        RgbImage::from_raw(1, 2, vec![1, 2, 3, 4, 5, 6]).unwrap().save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!(img.layout, PixelLayout::Rgb8);
        assert_eq!(img.to_rgba8().as_ref(), &[1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn gray_alpha_keeps_alpha() {
        let img = DecodedImage {
            width: 1,
            height: 1,
            layout: PixelLayout::MonoAlpha8,
            pixels: vec![7, 128],
        };
        assert_eq!(img.to_rgba8().as_ref(), &[7, 7, 7, 128]);
    }

    #[test]
    fn rgba_is_borrowed_unchanged() {
        let img = DecodedImage {
            width: 1,
            height: 1,
            layout: PixelLayout::Rgba8,
            pixels: vec![9, 8, 7, 6],
        };
        assert!(matches!(img.to_rgba8(), Cow::Borrowed(&[9, 8, 7, 6])));
    }

    #[test]
    fn sixteen_bit_png_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.png");
        ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(1, 1, vec![40_000])
            .unwrap()
            .save(&path)
            .unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ViewerError::UnsupportedFormat { .. }), "{err:?}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, ViewerError::Io { .. }), "{err:?}");
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ViewerError::Decode { .. }), "{err:?}");
        assert!(err.to_string().contains("broken.png"));
    }

    #[test]
    fn zero_sized_image_is_empty() {
        let err = DecodedImage::from_dynamic(Path::new("e.png"), DynamicImage::new_luma8(0, 0))
            .unwrap_err();
        assert!(matches!(err, ViewerError::EmptyImage { .. }));
    }
}
