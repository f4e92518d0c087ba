//! Licence tenure.
use chrono::{DateTime, Utc};
use rental_common::PricingConfig;

use crate::duration::MS_PER_DAY;

/// Years the licence has been held at `now`.
///
/// Uses a fixed average year of `config.days_per_year` days rather than
/// calendar arithmetic. A licence issued in the future yields a negative value.
pub fn get_licence_years_held(
    issue_date: DateTime<Utc>,
    now: DateTime<Utc>,
    config: &PricingConfig,
) -> f64 {
    let ms_per_year = MS_PER_DAY as f64 * config.days_per_year;
    (now - issue_date).num_milliseconds() as f64 / ms_per_year
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn one_average_year_is_exactly_one() {
        let config = PricingConfig::default();
        let now = DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let issued = now - TimeDelta::milliseconds(365 * MS_PER_DAY + MS_PER_DAY / 2);
        assert_eq!(get_licence_years_held(issued, now, &config), 1.0);
    }

    #[test]
    fn calendar_year_is_slightly_less_than_one() {
        let config = PricingConfig::default();
        let issued = DateTime::parse_from_rfc3339("2023-03-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let now = DateTime::parse_from_rfc3339("2024-03-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let years = get_licence_years_held(issued, now, &config);
        assert!(years < 1.0 && years > 0.99);
    }

    #[test]
    fn future_issue_date_is_negative() {
        let config = PricingConfig::default();
        let now = Utc::now();
        let issued = now + TimeDelta::days(30);
        assert!(get_licence_years_held(issued, now, &config) < 0.0);
    }
}
