//! Price modifier pipeline.
//!
//! Five independent rules run in a fixed order on the running price. Order
//! matters: the flat high-season addend lands after the multipliers before it,
//! and the long-rental discount scales everything accumulated so far.
use log::debug;
use rental_common::{CarClass, PricingConfig, Season};
use strum_macros::Display;

/// Values derived from a request that the modifiers look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingFactors {
    /// Resolved vehicle class.
    pub car_class: CarClass,
    /// Driver age in whole years.
    pub age: u32,
    /// Trip season.
    pub season: Season,
    /// Rental length in whole days.
    pub days: i64,
    /// Licence tenure in average years.
    pub licence_years_held: f64,
}

/// Identifies a single pricing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ModifierRule {
    /// Young driver renting a Racer in high season.
    RacerSurcharge,
    /// Licence held for a short time.
    NewLicenceSurcharge,
    /// Any high-season trip.
    HighSeason,
    /// Recent licence in high season, flat amount.
    YoungLicenceSurcharge,
    /// Long low-season rental.
    LongRentalDiscount,
}

/// A rule that fired, with the price before and after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceAdjustment {
    /// Rule that fired.
    pub rule: ModifierRule,
    /// Running price before the rule.
    pub before: f64,
    /// Running price after the rule.
    pub after: f64,
}

/// Apply every modifier to `price` and return the final amount.
pub fn apply_price_modifiers(price: f64, factors: &PricingFactors, config: &PricingConfig) -> f64 {
    apply_price_modifiers_traced(price, factors, config).0
}

/// Same as [`apply_price_modifiers`], also returning the rules that fired in order.
pub fn apply_price_modifiers_traced(
    price: f64,
    factors: &PricingFactors,
    config: &PricingConfig,
) -> (f64, Vec<PriceAdjustment>) {
    let high = factors.season.is_high();
    let mut trace = Vec::new();
    let mut price = price;

    let mut record = |rule: ModifierRule, before: f64, after: f64| {
        debug!("{}: {:.4} -> {:.4}", rule, before, after);
        trace.push(PriceAdjustment { rule, before, after });
    };

    if factors.car_class == CarClass::Racer && factors.age <= config.racer_surcharge_max_age && high
    {
        let before = price;
        price *= config.racer_surcharge_factor;
        record(ModifierRule::RacerSurcharge, before, price);
    }

    if factors.licence_years_held < config.new_licence_years {
        let before = price;
        price *= config.new_licence_factor;
        record(ModifierRule::NewLicenceSurcharge, before, price);
    }

    if high {
        let before = price;
        price *= config.high_season_factor;
        record(ModifierRule::HighSeason, before, price);
    }

    if factors.licence_years_held < config.young_licence_years && high {
        let before = price;
        price += config.young_licence_surcharge;
        record(ModifierRule::YoungLicenceSurcharge, before, price);
    }

    if factors.days > config.long_rental_min_days && !high {
        let before = price;
        price *= config.long_rental_factor;
        record(ModifierRule::LongRentalDiscount, before, price);
    }

    (price, trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn factors(
        car_class: CarClass,
        age: u32,
        season: Season,
        days: i64,
        licence_years_held: f64,
    ) -> PricingFactors {
        PricingFactors {
            car_class,
            age,
            season,
            days,
            licence_years_held,
        }
    }

    #[test]
    fn young_racer_in_high_season() {
        let config = PricingConfig::default();
        let f = factors(CarClass::Racer, 20, Season::High, 5, 3.0);
        approx(apply_price_modifiers(100.0, &f, &config), 172.5);
    }

    #[test]
    fn new_licence_surcharge_alone() {
        let config = PricingConfig::default();
        let f = factors(CarClass::Cabrio, 30, Season::Low, 7, 1.0);
        approx(apply_price_modifiers(100.0, &f, &config), 130.0);
    }

    #[test]
    fn long_low_season_discount_alone() {
        let config = PricingConfig::default();
        let f = factors(CarClass::Cabrio, 45, Season::Low, 11, 10.0);
        approx(apply_price_modifiers(200.0, &f, &config), 180.0);
    }

    #[test]
    fn exactly_ten_days_gets_no_discount() {
        let config = PricingConfig::default();
        let f = factors(CarClass::Cabrio, 45, Season::Low, 10, 10.0);
        approx(apply_price_modifiers(200.0, &f, &config), 200.0);
    }

    #[test]
    fn long_rental_discount_skipped_in_high_season() {
        let config = PricingConfig::default();
        let f = factors(CarClass::Electric, 45, Season::High, 20, 10.0);
        approx(apply_price_modifiers(100.0, &f, &config), 115.0);
    }

    #[test]
    fn every_high_season_rule_stacks_in_order() {
        let config = PricingConfig::default();
        let f = factors(CarClass::Racer, 25, Season::High, 4, 1.5);
        // ((100 * 1.5) * 1.3) * 1.15 + 15
        approx(apply_price_modifiers(100.0, &f, &config), 239.25);
    }

    #[test]
    fn racer_over_25_pays_no_racer_surcharge() {
        let config = PricingConfig::default();
        let f = factors(CarClass::Racer, 26, Season::High, 4, 5.0);
        approx(apply_price_modifiers(100.0, &f, &config), 115.0);
    }

    #[test]
    fn low_season_new_licence_long_rental() {
        let config = PricingConfig::default();
        let f = factors(CarClass::Compact, 30, Season::Low, 12, 1.2);
        approx(apply_price_modifiers(100.0, &f, &config), 117.0);
    }

    #[test]
    fn trace_lists_fired_rules_in_order() {
        let config = PricingConfig::default();
        let f = factors(CarClass::Racer, 22, Season::High, 3, 2.5);
        let (total, trace) = apply_price_modifiers_traced(100.0, &f, &config);
        let rules: Vec<ModifierRule> = trace.iter().map(|a| a.rule).collect();
        assert_eq!(
            rules,
            vec![
                ModifierRule::RacerSurcharge,
                ModifierRule::HighSeason,
                ModifierRule::YoungLicenceSurcharge,
            ]
        );
        approx(trace[0].before, 100.0);
        approx(trace[2].after, total);
        approx(total, 187.5);
    }

    #[test]
    fn nothing_fires_for_plain_low_season_trip() {
        let config = PricingConfig::default();
        let f = factors(CarClass::Compact, 40, Season::Low, 3, 8.0);
        let (total, trace) = apply_price_modifiers_traced(90.0, &f, &config);
        assert!(trace.is_empty());
        approx(total, 90.0);
    }
}
