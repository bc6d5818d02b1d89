//! Demo entry point.

use std::io::Write;
use std::sync::Arc;

use common::UuidIdGenerator;
use demo::{Config, DemoError, OutputFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    let config = Config::from_env();

    // 1. Initialize tracing on stderr so stdout carries only the report
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        OutputFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        OutputFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    // 2. Install Prometheus metrics recorder
    let metrics_handle = if config.show_metrics {
        Some(metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?)
    } else {
        None
    };

    // 3. Run the sections
    tracing::info!(sections = ?config.sections, "starting demo");
    let report = demo::run(&config, Arc::new(UuidIdGenerator::new())).await?;

    // 4. Render
    let mut stdout = std::io::stdout().lock();
    report.write_to(&mut stdout, config.format)?;
    if let Some(handle) = metrics_handle {
        writeln!(stdout)?;
        write!(stdout, "{}", handle.render())?;
    }
    stdout.flush()?;

    Ok(())
}
