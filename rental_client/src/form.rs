//! Assembling a `RentalForm` from a request file and command-line flags.
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use log::debug;
use rental_common::{RentalForm, Result};

use crate::args::Args;

/// Build the booking form: the `--request` file first, then individual flags on top.
pub fn build_form(args: &Args) -> Result<RentalForm> {
    let mut form = match &args.request {
        Some(raw) => {
            let path = normalize_path(raw);
            debug!("Reading request from {}", path.display());
            let file = File::open(&path)?;
            serde_json::from_reader(BufReader::new(file))?
        }
        None => RentalForm::default(),
    };

    override_field(&mut form.pick_up, &args.pick_up);
    override_field(&mut form.drop_off, &args.drop_off);
    override_field(&mut form.pick_up_date, &args.pick_up_date);
    override_field(&mut form.drop_off_date, &args.drop_off_date);
    override_field(&mut form.car_type, &args.car_type);
    override_field(&mut form.age, &args.age);
    override_field(&mut form.licence_issue_date, &args.licence_issue_date);

    Ok(form)
}

fn override_field(field: &mut String, flag: &Option<String>) {
    if let Some(value) = flag {
        *field = value.clone();
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
