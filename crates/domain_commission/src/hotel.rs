//! Hotel partner entity

use chrono::{DateTime, Utc};
use core_kernel::HotelId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Partnership status of a hotel
///
/// Preferred hotels are eligible for the agreement's preferred bonus rate;
/// standard hotels never receive it even when the rate is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HotelStatus {
    Standard,
    Preferred,
}

impl fmt::Display for HotelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotelStatus::Standard => write!(f, "STANDARD"),
            HotelStatus::Preferred => write!(f, "PREFERRED"),
        }
    }
}

/// A hotel partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique identifier
    pub id: HotelId,
    /// Display name, also used in report rows
    pub name: String,
    /// Partnership status at the time of calculation
    pub status: HotelStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    /// Creates a new hotel partner
    pub fn new(name: impl Into<String>, status: HotelStatus) -> Self {
        Self {
            id: HotelId::new_v7(),
            name: name.into(),
            status,
            created_at: Utc::now(),
        }
    }

    /// Returns true if the hotel qualifies for preferred bonuses
    pub fn is_preferred(&self) -> bool {
        self.status == HotelStatus::Preferred
    }
}
