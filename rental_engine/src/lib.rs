//! Car rental pricing engine.
//!
//! Quotes a rental from trip and driver details. Every function here is pure:
//! the current time and the rule table are passed in, nothing is cached, and
//! the same inputs always give the same quote.
//!
//! The pipeline, in order:
//!
//! - `resolver` — raw vehicle type to `CarClass`.
//! - `duration` — whole rental days, rounded up.
//! - `season` — high or low season from the trip months.
//! - `licence` — licence tenure in average 365.5-day years.
//! - `eligibility` — ordered gate; the first failing check is the answer.
//! - `modifiers` — ordered surcharges and discounts on `age × days`.
//! - `pricing` — the orchestrator and the `PricingEngine` entry point.
#![warn(missing_docs)]
pub mod duration;
pub mod eligibility;
pub mod licence;
pub mod modifiers;
pub mod pricing;
pub mod resolver;
pub mod season;

pub use eligibility::{Eligibility, Rejection, check_eligibility};
pub use modifiers::{PriceAdjustment, PricingFactors, apply_price_modifiers};
pub use pricing::{PricingEngine, QuoteOutcome, price};
