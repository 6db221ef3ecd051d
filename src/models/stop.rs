// Stop model representing a single store visit on the route

use crate::models::{Item, Minutes};
use serde::{Deserialize, Serialize};

/// One store visit aggregating every item bought there
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Store name, the grouping key
    pub store: String,

    /// Item names in the order they were first listed
    pub items: Vec<String>,

    /// Sum of the store time of every item bought here
    pub total_store_time: Minutes,

    /// Drive time recorded for this store
    pub drive_time: Minutes,
}

impl Stop {
    /// Opens a stop for the store of `item`, taking its drive time
    pub fn open(item: &Item) -> Self {
        Self {
            store: item.store.clone(),
            items: Vec::new(),
            total_store_time: 0.0,
            drive_time: item.drive_time,
        }
    }

    /// Adds an item to this stop. The item's drive time is not consulted.
    pub fn add_item(&mut self, item: &Item) {
        self.items.push(item.name.clone());
        self.total_store_time += item.store_time;
    }

    /// Drive time plus shopping time for this stop
    pub fn stop_total(&self) -> Minutes {
        self.drive_time + self.total_store_time
    }
}
