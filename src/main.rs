use clap::Parser;
use std::path::Path;
use tracing::info;

use matchsnap::cli::{Args, is_config_mode};
use matchsnap::config::Config;
use matchsnap::error::AppError;
use matchsnap::logging::setup_logging;
use matchsnap::pipeline::{resolve_anchor, run_pipeline, write_export};
use matchsnap::progress::ConsoleProgress;
use matchsnap::provider::create_http_client;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle configuration operations before touching logging or the network
    if is_config_mode(&args) {
        if args.list_config {
            Config::display().await?;
            return Ok(());
        }

        if let Some(new_domain) = args.new_api_domain {
            let mut config = Config::load().await.unwrap_or_default();
            config.api_domain = new_domain;
            config.save().await?;
            println!("Config updated successfully!");
            return Ok(());
        }
    }

    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logs are being written to: {log_file_path}");

    let config = Config::load().await?;
    let client = create_http_client(&config)?;
    let anchor = resolve_anchor(args.date.as_deref())?;

    let mut progress = ConsoleProgress::new();
    let document = run_pipeline(&client, &config, anchor, &mut progress).await?;
    progress.finish();

    let output = args.output.unwrap_or_else(|| config.output_file.clone());
    write_export(&document, Path::new(&output)).await?;

    println!("Export written to {output}");
    Ok(())
}
