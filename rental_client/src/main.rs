//! Rental Quote Client — prices a car rental from the command line.
//!
//! It collects the booking form fields (from flags and/or a JSON request file),
//! hands them to the pricing engine and prints the single result line: either
//! the price formatted as `$<amount>` or the reason the driver cannot be quoted.
//!
//! Usage example (CLI):
//! ```bash
//! rental_client --pick-up-date 2025-07-01 --drop-off-date 2025-07-06 \
//!     --car-type Compact --age 22 --licence-issue-date 2021-07-01
//! ```
//!
//! Logs go to stderr (`RUST_LOG=debug` shows every derived value); the quote
//! goes to stdout.
#![warn(missing_docs)]
mod args;
mod form;

use crate::args::Args;
use crate::form::{build_form, normalize_path};
use chrono::Utc;
use clap::Parser;
use log::{debug, info};
use rental_common::request::parse_date;
use rental_common::{PricingConfig, RentalError, Result};
use rental_engine::PricingEngine;

fn main() -> Result<(), RentalError> {
    init_logger();
    let args = Args::parse();

    let config = match &args.config {
        Some(raw) => PricingConfig::from_json_file(normalize_path(raw))?,
        None => PricingConfig::default(),
    };
    let engine = PricingEngine::new(config)?;
    debug!("Rule table: {:?}", engine.config());

    let now = match &args.now {
        Some(raw) => parse_date("now", raw)?,
        None => Utc::now(),
    };

    let form = build_form(&args)?;
    info!(
        "Quoting {} from {} to {} ({} -> {})",
        form.car_type, form.pick_up, form.drop_off, form.pick_up_date, form.drop_off_date
    );

    let (outcome, trace) = engine.price_form_with_trace(&form, now)?;
    if args.explain {
        for adjustment in &trace {
            info!(
                "{}: {:.2} -> {:.2}",
                adjustment.rule, adjustment.before, adjustment.after
            );
        }
        if let Some(amount) = outcome.amount() {
            info!("Unrounded total: {}", amount);
        }
    }

    println!("{}", outcome);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
