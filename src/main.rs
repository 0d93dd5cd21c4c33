use std::io;

use anyhow::Result;
use clap::Parser;
use plaud_bulk_export::cli::Args;
use plaud_bulk_export::{Config, Exporter, PlaudClient, SessionProvider};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("Plaud bulk export v{}", env!("CARGO_PKG_VERSION"));
    info!("API: {}", cfg.api.base_url);

    let input = {
        let stdin = io::stdin();
        let mut stdin = stdin.lock();
        let mut stdout = io::stdout();
        args.resolve(&cfg.export, &mut stdin, &mut stdout)?
    };

    info!("Username: {}", input.username);
    info!("Directory: {}", input.run.root.display());
    if let Some(date) = &input.run.start_date {
        info!("Start date: {}", date);
    }
    info!("Skip existing: {}", input.run.skip_existing);

    let mut client = PlaudClient::new(cfg.api.clone())?;
    client.authenticate(&input.username, &input.password).await?;

    let exporter = Exporter::new(&client, &client);
    let report = exporter.run(input.run).await?;

    if report.has_failures() {
        warn!(
            "{} artifacts could not be downloaded and {} recordings had no usable folder; re-run to retry",
            report.failures.len(),
            report.recordings_failed
        );
        for failure in &report.failures {
            warn!(
                "  {} ({}): {} {} - {}",
                failure.recording_name,
                failure.recording_id,
                failure.kind,
                failure.format,
                failure.reason
            );
        }
    }

    Ok(())
}
