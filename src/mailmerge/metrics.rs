//! Headline metrics from a report's text.

const YTD_LABEL: &str = "YTD Return:";
const SINCE_INCEPTION_LABEL: &str = "Since Inception Return:";
const SHARPE_LABEL: &str = "Sharpe Ratio:";

/// Metrics quoted in the email, kept as the report prints them (e.g. `8.5%`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMetrics {
    pub ytd_return: Option<String>,
    pub since_inception: Option<String>,
    pub sharpe_ratio: Option<String>,
}

impl ReportMetrics {
    pub fn is_empty(&self) -> bool {
        self.ytd_return.is_none() && self.since_inception.is_none() && self.sharpe_ratio.is_none()
    }
}

/// Scans report text line by line for the labelled metrics.
/// The first occurrence of each label wins.
pub fn extract_metrics(text: &str) -> ReportMetrics {
    let mut metrics = ReportMetrics::default();

    for line in text.lines() {
        if let Some(value) = value_after(line, SINCE_INCEPTION_LABEL) {
            metrics.since_inception.get_or_insert(value);
        } else if let Some(value) = value_after(line, YTD_LABEL) {
            metrics.ytd_return.get_or_insert(value);
        } else if let Some(value) = value_after(line, SHARPE_LABEL) {
            metrics.sharpe_ratio.get_or_insert(value);
        }
    }

    metrics
}

fn value_after(line: &str, label: &str) -> Option<String> {
    let (_, rest) = line.split_once(label)?;
    let value = rest.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_metrics() {
        let report = "
        PERFORMANCE REPORT
        Client: John Smith

        YTD Return: 8.5%
        Rolling 12-Month: 10.6%
        Since Inception Return: 12.3%

        RISK METRICS
        Sharpe Ratio: 1.42
        ";
        let metrics = extract_metrics(report);
        assert_eq!(metrics.ytd_return.as_deref(), Some("8.5%"));
        assert_eq!(metrics.since_inception.as_deref(), Some("12.3%"));
        assert_eq!(metrics.sharpe_ratio.as_deref(), Some("1.42"));
    }

    #[test]
    fn test_missing_and_empty_values() {
        let metrics = extract_metrics("Sharpe Ratio:\nBeta: 0.9\n");
        assert!(metrics.is_empty());

        let partial = extract_metrics("YTD Return: -1.0%");
        assert_eq!(partial.ytd_return.as_deref(), Some("-1.0%"));
        assert!(partial.sharpe_ratio.is_none());
    }
}
