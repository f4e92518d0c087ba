//!
//! Common types and utilities shared by the pricing engine and its callers.
//!
//! This crate aggregates:
//! - `error` — unified error type `RentalError` used across the workspace.
//! - `result` — handy `Result<T, RentalError>` alias.
//! - `car_class` — vehicle classes and the raw-string resolver.
//! - `season` — high/low season labels.
//! - `request` — raw form fields and the validated `QuoteRequest`.
//! - `config` — the immutable rule table consumed by the engine.
#![warn(missing_docs)]
pub mod car_class;
pub mod config;
pub mod error;
pub mod request;
pub mod result;
pub mod season;

pub use car_class::CarClass;
pub use config::PricingConfig;
pub use error::RentalError;
pub use request::{QuoteRequest, RentalForm};
pub use result::Result;
pub use season::Season;
