//! Season labels used by the pricing rules.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Demand season of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Season {
    /// Peak demand window (April to October by default).
    High,
    /// Everything outside the high-season window.
    Low,
}

impl Season {
    /// Returns `true` for [`Season::High`].
    pub fn is_high(self) -> bool {
        self == Season::High
    }
}
