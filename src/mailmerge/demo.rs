//! Sample inputs for a first run.
//!
//! Reports are plain-text stand-ins for the PDF exports, with metrics that
//! step deterministically from client to client.

use super::generator::MailmergeConfig;
use super::DEFAULT_TOP_CONVICTIONS;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const SAMPLE_CLIENTS: [&str; 10] = [
    "John_Smith",
    "Sarah_Johnson",
    "Michael_Brown",
    "Emily_Davis",
    "Robert_Wilson",
    "Jennifer_Taylor",
    "David_Anderson",
    "Lisa_Martinez",
    "James_Wilson",
    "Maria_Garcia",
];

const SAMPLE_CONVICTIONS: &str = "Model,YTD%,Commentary
US Large Cap Growth,15.2,\"Innovation leaders with robust earnings growth and strong balance sheets\"
Technology Sector Focus,12.5,\"AI and cloud infrastructure spending driving results this quarter\"
International Developed Markets,8.3,\"Currency stabilization and a European recovery are helping\"
Real Estate Investment Trusts,9.7,\"Dividend yields plus appreciation as commercial property recovers\"
Small Cap Value,6.8,\"Quality small-cap names trading at attractive valuations\"
Commodities & Energy,11.3,\"Energy transition themes creating long-term value\"
Fixed Income Core,4.1,\"Portfolio ballast in a volatile market\"
Emerging Markets,-2.1,\"Geopolitical headwinds, positioned for recovery\"
";

const SAMPLE_TEMPLATE: &str = "Hi {Name},

Here is your portfolio performance update.

Portfolio summary:
- YTD return: {YTD}
- Cumulative since inception: {SinceInception}
- Sharpe ratio: {Sharpe}

Our highest conviction views:
{Convictions}

Your full report is attached. Let me know if you would like to schedule a call.

Best regards,
[Your Name]
";

/// Writes sample convictions, reports and a template under `base_dir` and
/// returns a config that merges them into `base_dir/output/emails`.
pub fn write_demo(base_dir: &Path) -> Result<MailmergeConfig> {
    let config = MailmergeConfig {
        reports_dir: base_dir.join("reports"),
        convictions_path: base_dir.join("convictions").join("model_convictions.csv"),
        template_path: base_dir.join("templates").join("email_template.txt"),
        output_dir: base_dir.join("output").join("emails"),
        top_n: DEFAULT_TOP_CONVICTIONS,
    };

    for dir in [
        Some(config.reports_dir.as_path()),
        config.convictions_path.parent(),
        config.template_path.parent(),
    ]
    .into_iter()
    .flatten()
    {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    fs::write(&config.convictions_path, SAMPLE_CONVICTIONS)
        .with_context(|| format!("Failed to write {}", config.convictions_path.display()))?;
    fs::write(&config.template_path, SAMPLE_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config.template_path.display()))?;

    for (i, client) in SAMPLE_CLIENTS.iter().enumerate() {
        let path = config.reports_dir.join(format!("{}.pdf", client));
        fs::write(&path, sample_report(i, client))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    tracing::info!(
        clients = SAMPLE_CLIENTS.len(),
        dir = %base_dir.display(),
        "wrote demo inputs"
    );
    Ok(config)
}

fn sample_report(index: usize, client: &str) -> String {
    let i = index as f64;
    let ytd = 5.5 + i * 1.2;
    let inception = 8.2 + i * 0.8;
    let sharpe = 1.1 + i * 0.05;

    format!(
        "PERFORMANCE REPORT
Client: {client}

PERFORMANCE SUMMARY
YTD Return: {ytd:.1}%
Rolling 12-Month: {rolling:.1}%
Since Inception Return: {inception:.1}%

RISK METRICS
Sharpe Ratio: {sharpe:.2}
Beta: 0.{beta}
Max Drawdown: -{drawdown:.1}%
",
        client = client.replace('_', " "),
        rolling = ytd + 2.1,
        beta = 85 + index,
        drawdown = 3.2 + i * 0.3,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailmerge::extract_metrics;

    #[test]
    fn test_sample_report_metrics() {
        let metrics = extract_metrics(&sample_report(2, "Michael_Brown"));
        assert_eq!(metrics.ytd_return.as_deref(), Some("7.9%"));
        assert_eq!(metrics.since_inception.as_deref(), Some("9.8%"));
        assert_eq!(metrics.sharpe_ratio.as_deref(), Some("1.20"));
    }
}
