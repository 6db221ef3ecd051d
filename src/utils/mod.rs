pub mod load_items;
pub mod report;
