// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::trip_optimizer::{optimize_trip, TripOptimizer};
pub use algorithms::TripSolver;
pub use error::TripError;
pub use models::{Item, Minutes, Stop, TripOutcome, TripPlan, TripSummary};
