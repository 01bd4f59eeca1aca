use std::path::PathBuf;

use clap::Parser;

/// Plays an animated image headlessly and reports its frames.
#[derive(Debug, Parser)]
#[command(name = "reel-studio", version)]
pub struct Args {
    /// Image file to play (GIF, APNG, WebP or any still format).
    pub input: PathBuf,

    /// Target width each frame is scaled to (requires --height).
    #[arg(long, requires = "height")]
    pub width: Option<f32>,

    /// Target height each frame is scaled to (requires --width).
    #[arg(long, requires = "width")]
    pub height: Option<f32>,

    /// Simulated display refresh rate, in Hz.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// How long to play, in seconds.
    #[arg(long, default_value_t = 5.0)]
    pub seconds: f32,

    /// Largest elapsed time one refresh may consume, in seconds.
    #[arg(long, default_value_t = reel_engine::anim::DEFAULT_MAX_TIME_STEP)]
    pub max_step: f32,

    /// Write every frame as PNG into this directory.
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Print the frame table and exit without playing.
    #[arg(long)]
    pub info: bool,

    /// Log filter (env_logger syntax), overrides RUST_LOG.
    #[arg(long)]
    pub log: Option<String>,
}
