// Loading shopping lists from JSON files, plus the built-in sample list

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::TripError;
use crate::models::Item;

/// Reads a JSON array of items from `path`
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<Item>, TripError> {
    let path = path.as_ref();

    let json_str = fs::read_to_string(path).map_err(|source| TripError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_items(&json_str).map_err(|source| TripError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}

/// Parses a JSON array of items. Either `store_time`/`drive_time` or the camelCase keys are accepted.
pub fn parse_items(json_str: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(json_str)
}

/// The Thanksgiving shopping list used when no item file is given
pub fn thanksgiving_list() -> Vec<Item> {
    vec![
        Item::new("Turkey", "Grocery Store", 30.0, 15.0),
        Item::new("Pumpkin Pie", "Bakery", 10.0, 20.0),
        Item::new("Cranberry Sauce", "Grocery Store", 5.0, 15.0),
        Item::new("Fresh Rolls", "Bakery", 5.0, 20.0),
        Item::new("Green Beans", "Grocery Store", 10.0, 15.0),
        Item::new("Wine", "Liquor Store", 15.0, 10.0),
    ]
}
