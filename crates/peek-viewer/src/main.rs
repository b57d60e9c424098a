use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use peek_engine::device::GpuInit;
use peek_engine::logging::init_logging;
use peek_engine::window::Runtime;
use peek_viewer::app::{ViewerApp, ViewerConfig};
use peek_viewer::cli::Cli;
use peek_viewer::decode::load_image;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.logging_config());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("startup failed: {e:?}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let image = load_image(&cli.image)?;
    log::info!(
        "loaded {} ({}x{}, {})",
        cli.image.display(),
        image.width,
        image.height,
        image.layout
    );

    let app = ViewerApp::new(ViewerConfig::default(), image);
    Runtime::run(cli.runtime_config(), GpuInit::default(), app)
}
