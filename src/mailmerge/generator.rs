//! Directory-level merge: every report in, one email per client out.

use super::convictions::{format_convictions, load_convictions, top_convictions};
use super::metrics::extract_metrics;
use super::template::{client_name_from_stem, render, Recipient};
use anyhow::{bail, Context, Result};
use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the run summary written next to the emails.
pub const SUMMARY_FILE: &str = "generation_summary.txt";

/// Report file extensions picked up from the reports directory.
const REPORT_EXTENSIONS: [&str; 2] = ["pdf", "txt"];

/// Inputs and outputs of one merge run.
#[derive(Debug, Clone)]
pub struct MailmergeConfig {
    pub reports_dir: PathBuf,
    pub convictions_path: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    pub top_n: usize,
}

/// What happened to a single report.
#[derive(Debug)]
enum ReportOutcome {
    Written(PathBuf),
    NoMetrics,
    /// Another report in this run already produced an email for this client
    DuplicateClient(String),
}

/// Outcome of a merge run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Emails written, in report order
    pub written: Vec<PathBuf>,
    /// Reports that produced no email, with the reason
    pub skipped: Vec<(PathBuf, String)>,
    pub conviction_count: usize,
}

impl RunSummary {
    pub fn processed(&self) -> usize {
        self.written.len()
    }
}

/// Runs the merge. Source problems (template, convictions, directories) abort
/// the run; a problem with a single report skips that report.
pub fn run(config: &MailmergeConfig) -> Result<RunSummary> {
    let template = fs::read_to_string(&config.template_path)
        .with_context(|| format!("Failed to read template {}", config.template_path.display()))?;
    let convictions = load_convictions(&config.convictions_path)?;
    let convictions_text = format_convictions(&top_convictions(&convictions, config.top_n));

    let reports = list_reports(&config.reports_dir)?;
    if reports.is_empty() {
        tracing::warn!(dir = %config.reports_dir.display(), "no reports found");
    } else {
        tracing::info!(count = reports.len(), "processing reports");
    }

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;

    let mut summary = RunSummary {
        conviction_count: convictions.len(),
        ..RunSummary::default()
    };

    let mut clients = HashSet::new();
    for report in reports {
        match merge_report(&report, &template, &convictions_text, &config.output_dir, &mut clients) {
            Ok(ReportOutcome::Written(path)) => {
                tracing::info!(email = %path.display(), "generated email");
                summary.written.push(path);
            }
            Ok(ReportOutcome::NoMetrics) => {
                tracing::warn!(report = %report.display(), "no metrics extracted");
                summary.skipped.push((report, "no metrics extracted".to_string()));
            }
            Ok(ReportOutcome::DuplicateClient(name)) => {
                tracing::warn!(report = %report.display(), client = %name, "duplicate client name");
                summary.skipped.push((report, format!("duplicate client name '{}'", name)));
            }
            Err(e) => {
                tracing::error!(report = %report.display(), error = %format!("{:#}", e), "failed to process report");
                summary.skipped.push((report, format!("{:#}", e)));
            }
        }
    }

    write_summary(config, &summary)?;
    tracing::info!(processed = summary.processed(), skipped = summary.skipped.len(), "merge complete");
    Ok(summary)
}

/// Report files in `dir`, sorted by path.
fn list_reports(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Reports directory not found: {}", dir.display());
    }

    let mut reports = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        let is_report = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| REPORT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
        if path.is_file() && is_report {
            reports.push(path);
        }
    }
    reports.sort();
    Ok(reports)
}

/// Writes one email. The first report with metrics for a client claims its
/// output file; later reports for the same client are not written.
fn merge_report(
    report: &Path,
    template: &str,
    convictions: &str,
    output_dir: &Path,
    clients: &mut HashSet<String>,
) -> Result<ReportOutcome> {
    let stem = report
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Report name is not valid UTF-8: {}", report.display()))?;
    let name = client_name_from_stem(stem);

    let text = fs::read_to_string(report)
        .with_context(|| format!("Report is not a text export: {}", report.display()))?;
    let metrics = extract_metrics(&text);
    if metrics.is_empty() {
        return Ok(ReportOutcome::NoMetrics);
    }
    if !clients.insert(name.clone()) {
        return Ok(ReportOutcome::DuplicateClient(name));
    }

    let email = render(template, &Recipient { name: name.clone(), metrics }, convictions);
    let path = output_dir.join(format!("{}.txt", name));
    fs::write(&path, email).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(ReportOutcome::Written(path))
}

fn write_summary(config: &MailmergeConfig, summary: &RunSummary) -> Result<()> {
    let mut text = format!(
        "Email Generation Summary\nGenerated on: {}\n\nEmails generated: {}\nReports skipped: {}\nConviction models: {}\nOutput directory: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        summary.processed(),
        summary.skipped.len(),
        summary.conviction_count,
        config.output_dir.display(),
    );

    if !summary.skipped.is_empty() {
        text.push_str("\nSkipped reports:\n");
        for (path, reason) in &summary.skipped {
            text.push_str(&format!("- {}: {}\n", path.display(), reason));
        }
    }

    let path = config.output_dir.join(SUMMARY_FILE);
    fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailmerge::demo::write_demo;
    use std::env;

    #[test]
    fn test_same_client_in_two_reports_writes_one_email() -> Result<()> {
        let base = env::temp_dir().join(format!("worldclock_duplicate_client_{}", std::process::id()));
        let _ = fs::remove_dir_all(&base);

        let config = write_demo(&base)?;
        let duplicate = config.reports_dir.join("John_Smith.txt");
        fs::write(&duplicate, "YTD Return: 99.9%\n")?;

        let summary = run(&config)?;
        assert_eq!(summary.processed(), 10);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].0, duplicate);
        assert!(summary.skipped[0].1.contains("duplicate client name"));

        // The report sorted first keeps its email
        let email = fs::read_to_string(config.output_dir.join("John Smith.txt"))?;
        assert!(email.contains("- YTD return: 5.5%"));
        assert!(!email.contains("99.9%"));

        let emails = fs::read_dir(&config.output_dir)?
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != SUMMARY_FILE)
            .count();
        assert_eq!(emails, summary.processed());

        let text = fs::read_to_string(config.output_dir.join(SUMMARY_FILE))?;
        assert!(text.contains("Emails generated: 10"));

        fs::remove_dir_all(&base)?;
        Ok(())
    }
}
