//! Eligibility gate applied before any price is computed.
//!
//! Checks run in a fixed order and the first failing one wins, so a caller only
//! ever sees a single reason.
use log::debug;
use rental_common::{CarClass, PricingConfig};
use strum_macros::Display;

/// Why a driver cannot be quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Rejection {
    /// Below the minimum driver age.
    #[strum(to_string = "Driver too young - cannot quote the price")]
    TooYoung,
    /// Licence not held for longer than the minimum tenure.
    #[strum(to_string = "Driver has not held the licence long enough")]
    LicenceTooRecent,
    /// Young driver asking for a class other than Compact.
    #[strum(to_string = "Drivers 21 y/o or less can only rent Compact vehicles")]
    CompactOnly,
}

/// Outcome of the eligibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// All checks passed.
    Eligible,
    /// The first failing check.
    Rejected(Rejection),
}

/// Run the eligibility checks for a driver.
pub fn check_eligibility(
    age: u32,
    car_class: CarClass,
    licence_years_held: f64,
    config: &PricingConfig,
) -> Eligibility {
    let outcome = if age < config.min_driver_age {
        Eligibility::Rejected(Rejection::TooYoung)
    } else if !(licence_years_held > config.min_licence_years) {
        // NaN tenure lands here as well.
        Eligibility::Rejected(Rejection::LicenceTooRecent)
    } else if age <= config.young_driver_max_age && car_class != config.young_driver_car_class {
        Eligibility::Rejected(Rejection::CompactOnly)
    } else {
        Eligibility::Eligible
    };
    debug!(
        "Eligibility for age={} class={} tenure={:.3}: {:?}",
        age, car_class, licence_years_held, outcome
    );
    outcome
}
