//! Model conviction list.

use super::MailmergeError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One model portfolio and its year-to-date performance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conviction {
    #[serde(alias = "Model")]
    pub model_name: String,
    #[serde(alias = "YTD%")]
    pub ytd_return: f64,
    #[serde(alias = "Commentary")]
    pub commentary: String,
}

/// Parses `Model,YTD%,Commentary` rows. The first non-empty line is the header.
///
/// Only the first two commas separate fields, so commentary may contain commas;
/// surrounding double quotes on the commentary are stripped.
pub fn parse_csv(text: &str) -> Result<Vec<Conviction>, MailmergeError> {
    let mut convictions = Vec::new();
    let mut rows = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    // Header
    rows.next();

    for (index, line) in rows {
        let line_no = index + 1;
        let mut fields = line.trim().splitn(3, ',');
        let (Some(model), Some(ytd), Some(commentary)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(MailmergeError::MalformedConviction { line: line_no });
        };

        let ytd_return = ytd.trim().trim_end_matches('%').parse::<f64>().map_err(|_| {
            MailmergeError::InvalidReturn {
                line: line_no,
                value: ytd.trim().to_string(),
            }
        })?;

        convictions.push(Conviction {
            model_name: model.trim().to_string(),
            ytd_return,
            commentary: commentary.trim().trim_matches('"').to_string(),
        });
    }

    Ok(convictions)
}

/// Parses a JSON array of convictions.
pub fn parse_json(text: &str) -> Result<Vec<Conviction>, MailmergeError> {
    Ok(serde_json::from_str(text)?)
}

/// Loads convictions from a `.csv` or `.json` file.
pub fn load_convictions(path: &Path) -> Result<Vec<Conviction>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read convictions from {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let convictions = match extension.as_deref() {
        Some("csv") => parse_csv(&text),
        Some("json") => parse_json(&text),
        _ => Err(MailmergeError::UnsupportedFormat(path.display().to_string())),
    }
    .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!(count = convictions.len(), path = %path.display(), "loaded convictions");
    Ok(convictions)
}

/// Returns up to `n` convictions with the highest YTD return, best first.
/// Ties keep their input order.
pub fn top_convictions(convictions: &[Conviction], n: usize) -> Vec<&Conviction> {
    let mut ranked: Vec<&Conviction> = convictions.iter().collect();
    ranked.sort_by(|a, b| b.ytd_return.total_cmp(&a.ytd_return));
    ranked.truncate(n);
    ranked
}

/// Renders one line per conviction for the `{Convictions}` placeholder.
pub fn format_convictions(convictions: &[&Conviction]) -> String {
    convictions
        .iter()
        .map(|c| format!("✅ {}: {}% — {}", c.model_name, format_return(c.ytd_return), c.commentary))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whole numbers keep one decimal place (`4.0`), others print as-is (`-2.1`).
fn format_return(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
