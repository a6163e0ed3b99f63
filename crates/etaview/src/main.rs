use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use etaview::{App, init_logging};
use etaview_core::regressor::{DEFAULT_MODEL_FILENAME, load_model};

#[derive(Parser, Debug)]
#[command(name = "etaview")]
#[command(about = "A terminal delivery time predictor with sensitivity charts")]
struct Args {
    /// Path to the serialized model artifact
    #[arg(short, long, default_value = DEFAULT_MODEL_FILENAME)]
    model: PathBuf,

    /// Path to the data directory for logs (default: ~/.etaview/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".etaview")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let _log_guard = init_logging(&data_dir, &args.log_level)?;

    // Missing or unreadable artifact is fatal; the interface never starts.
    let model = load_model(&args.model)
        .wrap_err_with(|| format!("cannot start without a model artifact at {}", args.model.display()))?;
    tracing::info!(path = %args.model.display(), "model loaded");

    let mut app = App::new(model);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
