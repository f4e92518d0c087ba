//! High/low season classification.
use chrono::{DateTime, Datelike, Utc};
use rental_common::{PricingConfig, Season};

/// Classify a trip by the months of its pick-up and drop-off dates.
///
/// High when either end falls inside the window, or when the trip starts
/// before the window and ends after it. Only the month is compared, the year
/// is ignored: a trip from November to March of the year after next is Low
/// even though it covers a full high season.
pub fn get_season(
    pick_up: DateTime<Utc>,
    drop_off: DateTime<Utc>,
    config: &PricingConfig,
) -> Season {
    let pick_up_month = pick_up.month0();
    let drop_off_month = drop_off.month0();

    let spans_window = pick_up_month < config.high_season_start_month
        && drop_off_month > config.high_season_end_month;

    if config.in_high_season(pick_up_month) || config.in_high_season(drop_off_month) || spans_window
    {
        Season::High
    } else {
        Season::Low
    }
}
