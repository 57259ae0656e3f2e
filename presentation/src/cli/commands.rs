//! CLI command definitions

use autoreply_domain::{InvalidPeriod, OutputFormat, ReportingPeriod};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for review-autoreply
#[derive(Parser, Debug)]
#[command(name = "review-autoreply")]
#[command(author, version, about = "Draft on-brand replies and insight digests for customer reviews")]
#[command(long_about = r#"
review-autoreply drafts replies to customer reviews in your brand voice and
summarizes a window of reviews into an insights digest.

Reviews are read from a JSON file holding either one review object or an
array of them:
  {"id": "r1", "rating": 5, "text": "Great food!", "customerName": "Amy"}

Configuration files are loaded from (in priority order):
1. AUTOREPLY_* environment variables (e.g. AUTOREPLY_PROVIDER__MODEL)
2. --config <path>     Explicit config file
3. ./autoreply.toml    Project-level config
4. ~/.config/review-autoreply/config.toml   Global config

Example:
  review-autoreply reply reviews.json
  review-autoreply reply reviews.json --chunk-size 3 -o json
  review-autoreply digest reviews.json --from 2026-10-01 --to 2026-10-07
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format: text or json
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Draft replies for one review or a batch of reviews
    Reply(ReplyArgs),
    /// Summarize themes, highlights and competitive signals for a period
    Digest(DigestArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ReplyArgs {
    /// JSON file with a review object or an array of reviews ("-" reads stdin)
    pub file: PathBuf,

    /// Reviews drafted concurrently per chunk
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<usize>,

    /// Business the reviews belong to (defaults to [business].id)
    #[arg(long, value_name = "ID")]
    pub business: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct DigestArgs {
    /// JSON file with an array of reviews ("-" reads stdin)
    pub file: PathBuf,

    /// First day of the period
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<NaiveDate>,

    /// Last day of the period (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<NaiveDate>,

    /// Length of the period in days when --from is not given
    #[arg(long, default_value_t = 7, conflicts_with = "from")]
    pub days: u32,

    /// Business the reviews belong to (defaults to [business].id)
    #[arg(long, value_name = "ID")]
    pub business: Option<String>,
}

impl DigestArgs {
    /// Resolve the reporting window; `today` closes it when --to is absent
    pub fn period(&self, today: NaiveDate) -> Result<ReportingPeriod, InvalidPeriod> {
        let end = self.to.unwrap_or(today);
        match self.from {
            Some(start) => ReportingPeriod::new(start, end),
            None => Ok(ReportingPeriod::trailing_days(end, self.days)),
        }
    }
}
