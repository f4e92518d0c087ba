//! Pricing rule table.
//!
//! Every threshold and factor used by the engine lives here as a named field.
//! `PricingConfig::default()` reproduces the published tariff; a JSON file may
//! override any subset of fields, the rest keep their defaults.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::car_class::CarClass;
use crate::error::RentalError;
use crate::result::Result;

/// Immutable rule table consumed by the pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Classes the resolver accepts; anything else becomes `Unknown`.
    pub known_car_classes: Vec<CarClass>,
    /// Drivers younger than this are rejected.
    pub min_driver_age: u32,
    /// Licences held this many years or fewer are rejected.
    pub min_licence_years: f64,
    /// Drivers at or below this age may only rent `young_driver_car_class`.
    pub young_driver_max_age: u32,
    /// The single class open to young drivers.
    pub young_driver_car_class: CarClass,
    /// Racer drivers at or below this age pay the racer surcharge in high season.
    pub racer_surcharge_max_age: u32,
    /// Multiplier for the racer surcharge.
    pub racer_surcharge_factor: f64,
    /// Licences held less than this many years pay the new-licence surcharge.
    pub new_licence_years: f64,
    /// Multiplier for the new-licence surcharge.
    pub new_licence_factor: f64,
    /// First zero-based month (January = 0) of the high season.
    pub high_season_start_month: u32,
    /// Last zero-based month of the high season, inclusive.
    pub high_season_end_month: u32,
    /// Multiplier applied to every high-season trip.
    pub high_season_factor: f64,
    /// Licences held less than this many years pay the flat high-season addend.
    pub young_licence_years: f64,
    /// Flat amount added for recent licences in high season.
    pub young_licence_surcharge: f64,
    /// Low-season trips longer than this many days get the long-rental discount.
    pub long_rental_min_days: i64,
    /// Multiplier for the long-rental discount.
    pub long_rental_factor: f64,
    /// Average year length used for licence tenure.
    pub days_per_year: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            known_car_classes: CarClass::RENTABLE.to_vec(),
            min_driver_age: 18,
            min_licence_years: 1.0,
            young_driver_max_age: 21,
            young_driver_car_class: CarClass::Compact,
            racer_surcharge_max_age: 25,
            racer_surcharge_factor: 1.5,
            new_licence_years: 2.0,
            new_licence_factor: 1.3,
            high_season_start_month: 3,
            high_season_end_month: 9,
            high_season_factor: 1.15,
            young_licence_years: 3.0,
            young_licence_surcharge: 15.0,
            long_rental_min_days: 10,
            long_rental_factor: 0.9,
            days_per_year: 365.5,
        }
    }
}

impl PricingConfig {
    /// Load a rule table from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let config: PricingConfig = serde_json::from_reader(BufReader::new(file))?;
        debug!("Pricing config loaded from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Reject tables the engine cannot evaluate meaningfully.
    pub fn validate(&self) -> Result<()> {
        if self.high_season_start_month > 11 || self.high_season_end_month > 11 {
            return Err(RentalError::Config(format!(
                "season months must be within 0..=11, got {}..={}",
                self.high_season_start_month, self.high_season_end_month
            )));
        }
        if self.high_season_start_month > self.high_season_end_month {
            return Err(RentalError::Config(format!(
                "high season starts after it ends ({} > {})",
                self.high_season_start_month, self.high_season_end_month
            )));
        }
        if !(self.days_per_year > 0.0) {
            return Err(RentalError::Config(format!(
                "days_per_year must be positive, got {}",
                self.days_per_year
            )));
        }
        if self.known_car_classes.contains(&CarClass::Unknown) {
            return Err(RentalError::Config(
                "the Unknown sentinel cannot be a known car class".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns `true` if `month0` (January = 0) falls inside the high season.
    pub fn in_high_season(&self, month0: u32) -> bool {
        (self.high_season_start_month..=self.high_season_end_month).contains(&month0)
    }
}
