//! Command-line arguments for the rental quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
///
/// Every form field is optional here: values may come from `--request` instead,
/// and flags given on the command line override the file.
#[derive(Debug, Default, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Pick-up location.
    #[arg(long)]
    pub pick_up: Option<String>,

    /// Drop-off location.
    #[arg(long)]
    pub drop_off: Option<String>,

    /// Pick-up date, `YYYY-MM-DD` or RFC 3339.
    #[arg(long)]
    pub pick_up_date: Option<String>,

    /// Drop-off date, `YYYY-MM-DD` or RFC 3339.
    #[arg(long)]
    pub drop_off_date: Option<String>,

    /// Vehicle type: Compact, Electric, Cabrio or Racer.
    #[arg(long, alias = "type")]
    pub car_type: Option<String>,

    /// Driver age in whole years.
    #[arg(long)]
    pub age: Option<String>,

    /// Date the driving licence was issued.
    #[arg(long)]
    pub licence_issue_date: Option<String>,

    /// JSON file holding the booking form fields.
    #[arg(long)]
    pub request: Option<String>,

    /// JSON file overriding the pricing rule table.
    #[arg(long)]
    pub config: Option<String>,

    /// Quote as of this date instead of the current time.
    #[arg(long)]
    pub now: Option<String>,

    /// Log every price adjustment that was applied.
    #[arg(long)]
    pub explain: bool,
}
