//! Placeholder substitution.
//!
//! Templates use `{Name}`, `{YTD}`, `{SinceInception}`, `{Sharpe}` and
//! `{Convictions}`. Substitution is literal; any other braces are left alone.

use super::metrics::ReportMetrics;

/// Text used for a metric the report did not contain.
pub const MISSING_METRIC: &str = "N/A";

/// Everything personal that goes into one email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub metrics: ReportMetrics,
}

/// Fills `template` for one recipient.
pub fn render(template: &str, recipient: &Recipient, convictions: &str) -> String {
    let metric = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING_METRIC.to_string());

    let replacements = [
        ("{Name}", recipient.name.clone()),
        ("{YTD}", metric(&recipient.metrics.ytd_return)),
        ("{SinceInception}", metric(&recipient.metrics.since_inception)),
        ("{Sharpe}", metric(&recipient.metrics.sharpe_ratio)),
        ("{Convictions}", convictions.to_string()),
    ];

    let mut output = String::with_capacity(template.len() + convictions.len());
    let mut rest = template;
    // Single left-to-right pass so substituted text is never re-scanned
    'scan: while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let candidate = &rest[open..];
        for (token, value) in &replacements {
            if candidate.starts_with(token) {
                output.push_str(value);
                rest = &candidate[token.len()..];
                continue 'scan;
            }
        }
        output.push('{');
        rest = &candidate[1..];
    }
    output.push_str(rest);
    output
}

/// Derives a client's name from a report file stem: `john_smith` becomes `John Smith`.
pub fn client_name_from_stem(stem: &str) -> String {
    stem.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
