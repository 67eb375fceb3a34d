use std::path::PathBuf;
use std::process::ExitCode;

use screenhue::config::load_config;
use screenhue::{frame, report, LightSampler, ScreenHueError, ScreenHueResult};

const USAGE: &str = "screenhue <image> [config.toml]";

fn run() -> ScreenHueResult<()> {
    let mut args = std::env::args_os().skip(1);
    let image_path = args
        .next()
        .map(PathBuf::from)
        .ok_or(ScreenHueError::Usage(USAGE))?;
    let config_path = args.next().map(PathBuf::from);

    let config = load_config(config_path.as_deref())?;
    let sampler = LightSampler::from_config(&config)?;
    let frame = frame::open(&image_path)?;

    let lights = sampler.sample(&frame, config.sampling.mode())?;
    tracing::info!(lights = lights.len(), mode = ?config.sampling.mode(), "frame sampled");
    println!("{}", report::to_json(&lights)?);
    Ok(())
}

fn main() -> ExitCode {
    // Load .env file if present so RUST_LOG can live there.
    let _ = dotenvy::dotenv();
    screenhue::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "sampling failed");
            println!("{}", serde_json::json!({ "error": e }));
            ExitCode::FAILURE
        }
    }
}
