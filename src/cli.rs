// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "freelook")]
#[command(about = "First-person camera demo", long_about = None)]
pub struct Cli {
    /// Camera preset file (JSON) to load at startup
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Override movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Override mouse look sensitivity
    #[arg(long)]
    pub sensitivity: Option<f32>,
}
