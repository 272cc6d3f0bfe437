use std::path::PathBuf;

use clap::Parser;
use plotbench_core::PlotSession;
use plotbench_gui::{run_gui_with_session, GuiConfig};

#[derive(Parser)]
#[command(name = "plotbench", version, about = "Interactive charting workbench")]
struct Cli {
    /// CSV file to load on startup
    #[arg(long)]
    data: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Window height in pixels
    #[arg(long, default_value_t = 720.0)]
    height: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut session = PlotSession::new();
    if let Some(path) = &cli.data {
        let bytes = std::fs::read(path)?;
        if let Err(err) = session.upload_csv(&bytes) {
            eprintln!("Could not load {}: {}", path.display(), err);
        }
    }

    let config = GuiConfig {
        width: cli.width,
        height: cli.height,
        ..GuiConfig::default()
    };
    run_gui_with_session(config, session)?;
    Ok(())
}
