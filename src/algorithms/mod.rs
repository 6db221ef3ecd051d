pub mod trip_optimizer;

// Common algorithm traits
use crate::models::{Item, TripPlan};

/// Trait for trip planners turning a shopping list into an ordered route
pub trait TripSolver {
    /// Plan a route visiting every store that sells an item on the list
    fn plan(&self, items: &[Item]) -> TripPlan;
}
