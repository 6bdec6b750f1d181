use clap::Parser;
use fusecraft::core::config::{self, CliOverrides, FusecraftConfig};
use fusecraft::core::source::{load_catalog, source_for};
use fusecraft::core::state::Session;
use fusecraft::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "fusecraft", about = "Combine cards to discover new elements")]
struct Args {
    /// Catalog file path or http(s) URL
    #[arg(short, long)]
    catalog: Option<String>,

    /// Log level: error, warn, info, debug, trace or off
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger isn't up yet, so config problems go to stderr as well
    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {}, using defaults", e);
        FusecraftConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            catalog: args.catalog.as_deref(),
            log_level: args.log_level.as_deref(),
        },
    );

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Fusecraft starting up with catalog: {}", resolved.catalog);

    let source = source_for(&resolved.catalog);
    let catalog = match load_catalog(source.as_ref(), resolved.load_options()).await {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load catalog: {}", e);
            eprintln!("Error loading game data: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Catalog '{}' ready with {} elements",
        catalog.topic(),
        catalog.len()
    );

    let session = Session::new(Arc::new(catalog), resolved.session_options());
    match tui::run(session, &resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("Terminal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
