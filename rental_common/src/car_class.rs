//! Vehicle classes offered for rent.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Set of vehicle classes known to the pricing rules.
///
/// Parsing is exact and case-sensitive: `"Racer"` resolves, `"racer"` does not.
/// Anything that fails to resolve is priced as [`CarClass::Unknown`].
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
pub enum CarClass {
    /// Small city car, the only class open to young drivers.
    Compact,
    /// Battery electric vehicle.
    Electric,
    /// Convertible.
    Cabrio,
    /// Sports car, surcharged for young drivers in high season.
    Racer,
    /// Sentinel for an unrecognised vehicle type.
    #[strum(serialize = "Unknown Car Type")]
    Unknown,
}

impl CarClass {
    /// Every rentable class, in catalogue order.
    pub const RENTABLE: [CarClass; 4] = [
        CarClass::Compact,
        CarClass::Electric,
        CarClass::Cabrio,
        CarClass::Racer,
    ];

    /// Returns `true` unless this is the [`CarClass::Unknown`] sentinel.
    pub fn is_known(self) -> bool {
        self != CarClass::Unknown
    }
}
