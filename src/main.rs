mod app;
mod camera;
mod capture;
mod ffmpeg;
mod frontend;
mod pattern;
mod surface;
mod ui;

use crate::app::App;
use crate::camera::FfmpegSource;
use crate::capture::{SourceFactory, VideoSource};
use crate::pattern::{Pattern, TestPatternSource};
use clap::{ArgAction, Parser};
use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

/// Live webcam to ASCII mosaic renderer
///
/// Runs a terminal control panel and writes the mosaic as a self-reloading
/// page; open the reported file in a browser. Without a camera:
///
/// ```bash
/// cargo run -- --pattern gradient
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Display width the mosaic is sized against
    #[arg(long, default_value_t = 1920)]
    screen_width: u32,

    /// Display height the mosaic is sized against
    #[arg(long, default_value_t = 1080)]
    screen_height: u32,

    /// Directory the page and preview image are written to
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Capture device passed to ffmpeg instead of the OS default
    #[arg(short, long)]
    device: Option<String>,

    /// Render a synthetic pattern instead of the webcam
    #[arg(long, value_enum)]
    pattern: Option<Pattern>,

    /// Log file path
    #[arg(short, long, default_value = "asciicam.log")]
    log_file: String,

    /// Enable verbose output
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args.log_file, args.verbose)?;

    let factory: SourceFactory = match args.pattern {
        Some(pattern) => {
            info!("using the {pattern:?} test pattern");
            Box::new(move |w, h| {
                let source = TestPatternSource::new(w, h, 30, pattern)?;
                Ok(Box::new(source) as Box<dyn VideoSource>)
            })
        }
        None => {
            let device = args.device.clone();
            Box::new(move |w, h| {
                let source = FfmpegSource::open(w, h, device.as_deref())?;
                Ok(Box::new(source) as Box<dyn VideoSource>)
            })
        }
    };

    let app = App::new(args.screen_width, args.screen_height, &args.out_dir, factory)?;
    app.run().await
}

/// The terminal belongs to the control panel, so logs go to a file
fn init_logging(path: &str, verbose: bool) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
