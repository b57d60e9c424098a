use std::path::PathBuf;

use clap::Parser;
use peek_engine::logging::LoggingConfig;
use peek_engine::window::{RuntimeConfig, WindowMode};
use winit::dpi::LogicalSize;

/// Window size in logical pixels, parsed from `WIDTHxHEIGHT`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Parser, Debug)]
#[command(name = "peek", about = "Minimal GPU image viewer with mouse pan and zoom")]
#[command(version)]
pub struct Cli {
    /// Image file (PNG, JPEG, BMP, GIF, TIFF, WebP, ...)
    pub image: PathBuf,

    /// Initial window size in logical pixels
    #[arg(short, long, value_name = "WxH", default_value = "1280x720", value_parser = parse_size)]
    pub size: WindowSize,

    /// Start in borderless fullscreen
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Window title (default: file name)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// env_logger filter string, e.g. "peek_view=trace"
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Cli {
    pub fn window_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        self.image
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "peek".to_string())
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.window_title(),
            initial_size: LogicalSize::new(f64::from(self.size.width), f64::from(self.size.height)),
            mode: if self.fullscreen { WindowMode::Fullscreen } else { WindowMode::Windowed },
        }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        let mut config = LoggingConfig::default();
        if self.verbose {
            config.default_level = log::LevelFilter::Debug;
        }
        config.env_filter = self.log.clone();
        config
    }
}

/// Parses `WIDTHxHEIGHT` (either `x` or `X`), rejecting zero sides.
pub fn parse_size(s: &str) -> Result<WindowSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;

    let side = |v: &str, name: &str| -> Result<u32, String> {
        let n: u32 = v
            .trim()
            .parse()
            .map_err(|e| format!("invalid {name} `{v}`: {e}"))?;
        if n == 0 {
            return Err(format!("{name} must be greater than zero"));
        }
        Ok(n)
    };

    Ok(WindowSize { width: side(w, "width")?, height: side(h, "height")? })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sizes() {
        assert_eq!(parse_size("800x600"), Ok(WindowSize { width: 800, height: 600 }));
        assert_eq!(parse_size("64X48"), Ok(WindowSize { width: 64, height: 48 }));
    }

    #[test]
    fn rejects_bad_sizes() {
        for bad in ["", "800", "x600", "800x", "0x600", "800x0", "-1x5", "axb"] {
            assert!(parse_size(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["peek", "photos/cat.jpg"]).unwrap();
        assert_eq!(cli.size, WindowSize { width: 1280, height: 720 });
        assert!(!cli.fullscreen);

        let rc = cli.runtime_config();
        assert_eq!(rc.title, "cat.jpg");
        assert_eq!(rc.mode, WindowMode::Windowed);
        assert_eq!(rc.initial_size, LogicalSize::new(1280.0, 720.0));

        let lc = cli.logging_config();
        assert_eq!(lc.default_level, log::LevelFilter::Info);
        assert_eq!(lc.env_filter, None);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "peek", "-s", "640x480", "-f", "-t", "hello", "-v", "--log", "peek_view=trace", "a.png",
        ])
        .unwrap();

        let rc = cli.runtime_config();
        assert_eq!(rc.title, "hello");
        assert_eq!(rc.mode, WindowMode::Fullscreen);
        assert_eq!(rc.initial_size, LogicalSize::new(640.0, 480.0));

        let lc = cli.logging_config();
        assert_eq!(lc.default_level, log::LevelFilter::Debug);
        assert_eq!(lc.env_filter.as_deref(), Some("peek_view=trace"));
    }

    #[test]
    fn zero_size_is_a_usage_error() {
        let err = Cli::try_parse_from(["peek", "--size", "0x10", "a.png"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn image_is_required() {
        assert!(Cli::try_parse_from(["peek"]).is_err());
    }
}
