//! Collected output of a demo run and its renderings.

use std::io::Write;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::{CapturedOutput, IdGenerator, OutputLine};
use serde::{Deserialize, Serialize};

use crate::config::{OutputFormat, Section};
use crate::diagram;
use crate::error::DemoError;
use crate::runner::{self, RunSummary};

/// Output of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReport {
    pub section: Section,
    pub lines: Vec<OutputLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RunSummary>,
}

/// Output of a whole run, sections in the order they were requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoReport {
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<SectionReport>,
}

impl DemoReport {
    /// Returns the report of a section, if it ran.
    pub fn section(&self, section: Section) -> Option<&SectionReport> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// Writes the report to `out` in the requested format.
    pub fn write_to(&self, out: &mut impl Write, format: OutputFormat) -> Result<(), DemoError> {
        match format {
            OutputFormat::Text => {
                for (i, section) in self.sections.iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    for line in &section.lines {
                        writeln!(out, "{line}")?;
                    }
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Runs one section to completion, capturing its output.
pub fn run_section(section: Section, ids: Arc<dyn IdGenerator>) -> SectionReport {
    metrics::counter!("demo_sections_run_total", "section" => section.as_str()).increment(1);
    tracing::debug!(%section, "running section");

    let mut out = CapturedOutput::new();
    let summary = match section {
        Section::With => Some(runner::run_with_pattern(&mut out, ids)),
        Section::Diagram => {
            diagram::render_workflow(&mut out);
            None
        }
    };

    SectionReport {
        section,
        lines: out.into_lines(),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{LineKind, SequentialIdGenerator};

    fn sample() -> DemoReport {
        DemoReport {
            generated_at: Utc::now(),
            sections: vec![
                SectionReport {
                    section: Section::Diagram,
                    lines: vec![OutputLine::info("skeleton")],
                    summary: None,
                },
                SectionReport {
                    section: Section::With,
                    lines: vec![OutputLine::info("ok"), OutputLine::error("boom")],
                    summary: Some(RunSummary::default()),
                },
            ],
        }
    }

    #[test]
    fn test_text_rendering_marks_errors() {
        let mut buf = Vec::new();
        sample().write_to(&mut buf, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "skeleton\n\nok\n❌ boom\n");
    }

    #[test]
    fn test_json_rendering() {
        let mut buf = Vec::new();
        sample().write_to(&mut buf, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["sections"][0]["section"], "diagram");
        assert!(value["sections"][0].get("summary").is_none());
        assert_eq!(value["sections"][1]["lines"][1]["kind"], "error");
        assert_eq!(value["sections"][1]["summary"]["processed"], 0);
    }

    #[test]
    fn test_run_section() {
        let report = run_section(Section::With, Arc::new(SequentialIdGenerator::new()));
        assert_eq!(report.summary.map(|s| s.completed), Some(3));
        assert!(report.lines.iter().all(|l| l.kind == LineKind::Info));

        let report = run_section(Section::Diagram, Arc::new(SequentialIdGenerator::new()));
        assert!(report.summary.is_none());
        assert!(!report.lines.is_empty());
    }
}
