//! Generates one personalized email per client performance report.
//!
//! ```text
//! worldclock-mailmerge --reports reports --convictions convictions/model_convictions.csv \
//!     --template templates/email_template.txt --output output/emails
//! worldclock-mailmerge demo /tmp/mailmerge-demo
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use worldclock::mailmerge::demo::write_demo;
use worldclock::mailmerge::{run, MailmergeConfig, RunSummary, DEFAULT_TOP_CONVICTIONS};

#[derive(Parser, Debug)]
#[command(name = "worldclock-mailmerge", version, about = "Merge performance reports into client emails")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    merge: MergeArgs,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = worldclock::logging::DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write sample reports, convictions and a template under DIR, then merge them
    Demo {
        dir: PathBuf,
    },
}

#[derive(Args, Debug)]
struct MergeArgs {
    /// Directory of client reports (.pdf text exports or .txt)
    #[arg(long, default_value = "reports")]
    reports: PathBuf,

    /// Conviction list (.csv or .json)
    #[arg(long, default_value = "convictions/model_convictions.csv")]
    convictions: PathBuf,

    /// Email template with {Name}, {YTD}, {SinceInception}, {Sharpe} and {Convictions}
    #[arg(long, default_value = "templates/email_template.txt")]
    template: PathBuf,

    /// Output directory for the emails and the run summary
    #[arg(long, default_value = "output/emails")]
    output: PathBuf,

    /// Number of top convictions quoted in each email
    #[arg(long, default_value_t = DEFAULT_TOP_CONVICTIONS)]
    top: usize,
}

impl From<MergeArgs> for MailmergeConfig {
    fn from(args: MergeArgs) -> Self {
        MailmergeConfig {
            reports_dir: args.reports,
            convictions_path: args.convictions,
            template_path: args.template,
            output_dir: args.output,
            top_n: args.top,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    worldclock::logging::init(&cli.log_level);

    let config = match cli.command {
        Some(Command::Demo { dir }) => write_demo(&dir)
            .with_context(|| format!("Failed to prepare demo inputs in {}", dir.display()))?,
        None => cli.merge.into(),
    };

    let summary = run(&config)?;
    print_summary(&config, &summary);
    Ok(())
}

fn print_summary(config: &MailmergeConfig, summary: &RunSummary) {
    println!("Generated {} email(s) in {}", summary.processed(), config.output_dir.display());
    for (report, reason) in &summary.skipped {
        println!("  skipped {}: {}", report.display(), reason);
    }
}
