use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning an image file into uploadable pixels.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot decode {}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("{} contains no pixels", path.display())]
    EmptyImage { path: PathBuf },

    #[error("{} uses unsupported pixel layout {layout}", path.display())]
    UnsupportedFormat { path: PathBuf, layout: String },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
