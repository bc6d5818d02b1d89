//! Demonstration runner for the order-processing workflow.
//!
//! Runs the configured sections as independent blocking tasks, joins them and
//! hands back a report the binary renders as text or JSON.

pub mod config;
pub mod diagram;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;

use std::sync::Arc;

use chrono::Utc;
use common::IdGenerator;

pub use config::{Config, OutputFormat, Section};
pub use error::DemoError;
pub use report::{DemoReport, SectionReport};
pub use runner::RunSummary;

/// Runs every configured section and collects their output.
///
/// Sections run concurrently; the report keeps them in configuration order.
pub async fn run(config: &Config, ids: Arc<dyn IdGenerator>) -> Result<DemoReport, DemoError> {
    let handles: Vec<_> = config
        .sections
        .iter()
        .map(|&section| {
            let ids = ids.clone();
            tokio::task::spawn_blocking(move || report::run_section(section, ids))
        })
        .collect();

    let mut sections = Vec::with_capacity(handles.len());
    for handle in handles {
        sections.push(handle.await?);
    }

    Ok(DemoReport {
        generated_at: Utc::now(),
        sections,
    })
}
