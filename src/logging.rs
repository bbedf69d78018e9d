use std::fs::File;

use color_eyre::eyre::{eyre, Result};
use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Set up file logging. Stdout belongs to the terminal UI, so log lines
/// go to `vtplay.log` in the platform data directory; `RUST_LOG` filters
/// as usual.
pub fn init() -> Result<()> {
    let dirs = ProjectDirs::from("", "", "vtplay")
        .ok_or_else(|| eyre!("could not resolve a data directory"))?;
    let log_dir = dirs.data_local_dir();
    std::fs::create_dir_all(log_dir)?;
    let log_file = File::create(log_dir.join("vtplay.log"))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
