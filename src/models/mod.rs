// Models module - exports all model types

mod item;
mod route;
mod stop;

// Re-export model types
pub use self::item::Item;
pub use self::route::{TripOutcome, TripPlan, TripSummary};
pub use self::stop::Stop;

// Durations in minutes; fractional values are allowed
pub type Minutes = f64;
