//! Car-class resolution from the raw vehicle type string.
use log::warn;
use rental_common::{CarClass, PricingConfig};

/// Resolve `raw` to a known class, or [`CarClass::Unknown`].
///
/// The match is exact. A class that parses but is missing from
/// `config.known_car_classes` is treated as unknown too. Never fails: an
/// unknown class simply matches none of the later rules.
pub fn get_car_class(raw: &str, config: &PricingConfig) -> CarClass {
    match raw.parse::<CarClass>() {
        Ok(class) if class.is_known() && config.known_car_classes.contains(&class) => class,
        _ => {
            warn!("Unrecognised car type {:?}, pricing as {}", raw, CarClass::Unknown);
            CarClass::Unknown
        }
    }
}
