// Item model representing one entry on the shopping list

use crate::models::Minutes;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A purchasable item together with the store that sells it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Name of the item
    pub name: String,

    /// Store that sells the item
    pub store: String,

    /// Minutes spent shopping for this item once at the store
    #[serde(alias = "storeTime", deserialize_with = "non_negative_minutes")]
    pub store_time: Minutes,

    /// Minutes to drive to the item's store
    #[serde(alias = "driveTime", deserialize_with = "non_negative_minutes")]
    pub drive_time: Minutes,
}

impl Item {
    /// Creates a new item
    pub fn new<N: Into<String>, S: Into<String>>(
        name: N,
        store: S,
        store_time: Minutes,
        drive_time: Minutes,
    ) -> Self {
        Self {
            name: name.into(),
            store: store.into(),
            store_time,
            drive_time,
        }
    }
}

// Durations must be finite and not below zero
fn non_negative_minutes<'de, D>(deserializer: D) -> Result<Minutes, D::Error>
where
    D: Deserializer<'de>,
{
    let minutes = Minutes::deserialize(deserializer)?;
    if minutes.is_finite() && minutes >= 0.0 {
        Ok(minutes)
    } else {
        Err(D::Error::custom(format!(
            "expected a non-negative number of minutes, got {}",
            minutes
        )))
    }
}
