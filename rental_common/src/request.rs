//! Quote request fields as submitted by a caller, and their validated form.
//!
//! `RentalForm` mirrors the flat field set of the booking form: every value is
//! a raw string. `QuoteRequest::try_from(&form)` is the only way to build a
//! typed request; it parses dates and the driver age and reports the first
//! malformed field as a `RentalError`.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RentalError;
use crate::result::Result;

/// Raw, unvalidated booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RentalForm {
    /// Pick-up location.
    pub pick_up: String,
    /// Drop-off location.
    pub drop_off: String,
    /// Pick-up date, `YYYY-MM-DD` or RFC 3339.
    pub pick_up_date: String,
    /// Drop-off date, `YYYY-MM-DD` or RFC 3339.
    pub drop_off_date: String,
    /// Vehicle type as typed or selected by the driver.
    #[serde(alias = "type")]
    pub car_type: String,
    /// Driver age in whole years.
    pub age: String,
    /// Date the driving licence was issued.
    pub licence_issue_date: String,
}

/// Typed quote request produced by validating a [`RentalForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    /// Pick-up location, carried through unchanged.
    pub pick_up: String,
    /// Drop-off location, carried through unchanged.
    pub drop_off: String,
    /// Start of the rental.
    pub pick_up_date: DateTime<Utc>,
    /// End of the rental.
    pub drop_off_date: DateTime<Utc>,
    /// Raw vehicle type; class resolution happens in the engine.
    pub car_type: String,
    /// Driver age in whole years.
    pub age: u32,
    /// Licence issue instant.
    pub licence_issue_date: DateTime<Utc>,
}

impl TryFrom<&RentalForm> for QuoteRequest {
    type Error = RentalError;

    fn try_from(form: &RentalForm) -> Result<Self> {
        Ok(QuoteRequest {
            pick_up: form.pick_up.trim().to_string(),
            drop_off: form.drop_off.trim().to_string(),
            pick_up_date: parse_date("pickUpDate", &form.pick_up_date)?,
            drop_off_date: parse_date("dropOffDate", &form.drop_off_date)?,
            car_type: form.car_type.trim().to_string(),
            age: parse_age(&form.age)?,
            licence_issue_date: parse_date("licenceIssueDate", &form.licence_issue_date)?,
        })
    }
}

/// Parse a form date.
///
/// A bare calendar date is taken as midnight UTC, the same instant a browser
/// date input submits. Full timestamps must be RFC 3339.
pub fn parse_date(field: &'static str, raw: &str) -> Result<DateTime<Utc>> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(RentalError::MissingField(field));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| RentalError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

fn parse_age(raw: &str) -> Result<u32> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(RentalError::MissingField("age"));
    }
    value
        .parse::<u32>()
        .map_err(|_| RentalError::InvalidAge(raw.to_string()))
}
