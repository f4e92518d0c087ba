//! Quote orchestration.
//!
//! `price` wires the rule modules together: resolve the class, derive days,
//! season and licence tenure, run the eligibility gate, then push the base
//! price (`age × days`) through the modifier pipeline. A rejection short-cuts
//! the whole thing and no price is computed.
//!
//! `PricingEngine` bundles a validated `PricingConfig` with the same steps and
//! adds the raw-form entry points used by callers that only have strings.
use std::fmt;

use chrono::{DateTime, Utc};
use log::info;
use rental_common::{PricingConfig, QuoteRequest, RentalForm, Result};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::duration::get_days;
use crate::eligibility::{Eligibility, Rejection, check_eligibility};
use crate::licence::get_licence_years_held;
use crate::modifiers::{PriceAdjustment, PricingFactors, apply_price_modifiers_traced};
use crate::resolver::get_car_class;
use crate::season::get_season;

/// Result of quoting a single request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuoteOutcome {
    /// Final price in dollars, unrounded.
    Priced(f64),
    /// The driver failed the eligibility gate.
    Rejected(Rejection),
}

impl QuoteOutcome {
    /// The price, if one was computed.
    pub fn amount(&self) -> Option<f64> {
        match self {
            QuoteOutcome::Priced(amount) => Some(*amount),
            QuoteOutcome::Rejected(_) => None,
        }
    }
}

impl fmt::Display for QuoteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteOutcome::Priced(amount) => write!(f, "${}", format_price(*amount)),
            QuoteOutcome::Rejected(reason) => write!(f, "{}", reason),
        }
    }
}

/// Format an amount with two decimals, sending exact half cents away from zero.
///
/// Works on the exact binary value of `amount`: `43.125` is representable and
/// becomes `43.13`, while `1.005` is stored just below the midpoint and stays
/// `1.00`.
pub fn format_price(amount: f64) -> String {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => format!(
            "{:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        // Outside Decimal's range; plain float formatting is all that is left.
        None => format!("{:.2}", amount),
    }
}

/// Derive the values the eligibility gate and modifiers work on.
pub fn derive_factors(
    request: &QuoteRequest,
    config: &PricingConfig,
    now: DateTime<Utc>,
) -> PricingFactors {
    PricingFactors {
        car_class: get_car_class(&request.car_type, config),
        age: request.age,
        season: get_season(request.pick_up_date, request.drop_off_date, config),
        days: get_days(request.pick_up_date, request.drop_off_date),
        licence_years_held: get_licence_years_held(request.licence_issue_date, now, config),
    }
}

/// Quote a validated request at instant `now`.
pub fn price(request: &QuoteRequest, config: &PricingConfig, now: DateTime<Utc>) -> QuoteOutcome {
    price_with_trace(request, config, now).0
}

/// Quote a request and return the modifiers that fired along the way.
///
/// The trace is empty for rejected drivers.
pub fn price_with_trace(
    request: &QuoteRequest,
    config: &PricingConfig,
    now: DateTime<Utc>,
) -> (QuoteOutcome, Vec<PriceAdjustment>) {
    let factors = derive_factors(request, config, now);

    if let Eligibility::Rejected(reason) = check_eligibility(
        factors.age,
        factors.car_class,
        factors.licence_years_held,
        config,
    ) {
        info!("Quote rejected: {}", reason);
        return (QuoteOutcome::Rejected(reason), Vec::new());
    }

    let base_price = f64::from(factors.age) * factors.days as f64;
    let (total, trace) = apply_price_modifiers_traced(base_price, &factors, config);
    info!(
        "Quoted {} {} for {} days in {} season: base {:.2}, total {:.2}",
        factors.car_class, request.pick_up, factors.days, factors.season, base_price, total
    );
    (QuoteOutcome::Priced(total), trace)
}

/// Pricing engine bound to one rule table.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: PricingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The rule table in use.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Quote a validated request.
    pub fn price(&self, request: &QuoteRequest, now: DateTime<Utc>) -> QuoteOutcome {
        price(request, &self.config, now)
    }

    /// Validate a raw form and quote it.
    pub fn price_form(&self, form: &RentalForm, now: DateTime<Utc>) -> Result<QuoteOutcome> {
        let request = QuoteRequest::try_from(form)?;
        Ok(self.price(&request, now))
    }

    /// Validate, quote and explain a raw form.
    pub fn price_form_with_trace(
        &self,
        form: &RentalForm,
        now: DateTime<Utc>,
    ) -> Result<(QuoteOutcome, Vec<PriceAdjustment>)> {
        let request = QuoteRequest::try_from(form)?;
        Ok(price_with_trace(&request, &self.config, now))
    }

    /// Single-string contract for display layers: the price, the rejection
    /// message, or the validation error text.
    pub fn quote_text(&self, form: &RentalForm, now: DateTime<Utc>) -> String {
        match self.price_form(form, now) {
            Ok(outcome) => outcome.to_string(),
            Err(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_common::request::parse_date;

    fn at(raw: &str) -> DateTime<Utc> {
        parse_date("date", raw).unwrap()
    }

    fn request(car_type: &str, age: u32, licence: &str, from: &str, to: &str) -> QuoteRequest {
        QuoteRequest {
            pick_up: "Airport".to_string(),
            drop_off: "Harbour".to_string(),
            pick_up_date: at(from),
            drop_off_date: at(to),
            car_type: car_type.to_string(),
            age,
            licence_issue_date: at(licence),
        }
    }

    #[test]
    fn compact_summer_week() {
        let config = PricingConfig::default();
        let outcome = price(
            &request("Compact", 22, "2021-07-01", "2025-07-01", "2025-07-06"),
            &config,
            at("2025-06-01"),
        );
        assert_eq!(outcome.to_string(), "$126.50");
    }

    #[test]
    fn half_cent_amounts_round_up() {
        assert_eq!(QuoteOutcome::Priced(43.125).to_string(), "$43.13");
        assert_eq!(QuoteOutcome::Priced(52.375).to_string(), "$52.38");
        assert_eq!(QuoteOutcome::Priced(0.125).to_string(), "$0.13");
    }

    #[test]
    fn amounts_below_half_cent_round_down() {
        // 1.005 is stored as 1.00499999...
        assert_eq!(QuoteOutcome::Priced(1.005).to_string(), "$1.00");
        assert_eq!(QuoteOutcome::Priced(110.0 * 1.15).to_string(), "$126.50");
        assert_eq!(QuoteOutcome::Priced(15.0).to_string(), "$15.00");
    }

    #[test]
    fn racer_peak_day_is_an_exact_half_cent() {
        let config = PricingConfig::default();
        let outcome = price(
            &request("Racer", 25, "2015-01-01", "2025-07-01", "2025-07-02"),
            &config,
            at("2025-06-01"),
        );
        assert_eq!(outcome.amount(), Some(43.125));
        assert_eq!(outcome.to_string(), "$43.13");
    }

    #[test]
    fn rejection_skips_pricing() {
        let config = PricingConfig::default();
        let (outcome, trace) = price_with_trace(
            &request("Racer", 17, "2024-01-01", "2025-07-01", "2025-07-06"),
            &config,
            at("2025-06-01"),
        );
        assert_eq!(outcome, QuoteOutcome::Rejected(Rejection::TooYoung));
        assert_eq!(outcome.amount(), None);
        assert!(trace.is_empty());
    }

    #[test]
    fn unknown_class_is_priced_for_older_drivers() {
        let config = PricingConfig::default();
        let outcome = price(
            &request("Limousine", 40, "2000-01-01", "2025-01-10", "2025-01-13"),
            &config,
            at("2025-01-01"),
        );
        assert_eq!(outcome.to_string(), "$120.00");
    }

    #[test]
    fn same_day_rental_costs_only_flat_surcharges() {
        let config = PricingConfig::default();
        let outcome = price(
            &request("Compact", 30, "2023-01-01", "2025-06-01", "2025-06-01"),
            &config,
            at("2025-06-01"),
        );
        // tenure < 3 in high season adds 15 to a zero base
        assert_eq!(outcome.to_string(), "$15.00");
    }

    #[test]
    fn frozen_clock_is_idempotent() {
        let engine = PricingEngine::default();
        let req = request("Electric", 33, "2019-03-03", "2025-10-20", "2025-11-04");
        let now = at("2025-09-01");
        assert_eq!(engine.price(&req, now), engine.price(&req, now));
    }

    #[test]
    fn engine_rejects_invalid_config() {
        let config = PricingConfig {
            days_per_year: 0.0,
            ..PricingConfig::default()
        };
        assert!(PricingEngine::new(config).is_err());
    }
}
