// Route models for representing a planned trip and its time budget

use crate::models::{Minutes, Stop};
use serde::{Deserialize, Serialize};

/// Ordered route together with its total time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// Stops in visiting order
    pub route: Vec<Stop>,

    /// Sum of drive and shopping time over every stop
    pub total_time: Minutes,
}

impl TripPlan {
    /// Creates a plan from an ordered route, computing the total
    pub fn new(route: Vec<Stop>) -> Self {
        let total_time = route.iter().map(Stop::stop_total).sum();
        Self { route, total_time }
    }

    /// Compares this plan against a time budget
    pub fn summary(&self, available_time: Minutes) -> TripSummary {
        TripSummary::new(self.total_time, available_time)
    }

    /// Splits the plan into the route and total time
    pub fn into_parts(self) -> (Vec<Stop>, Minutes) {
        (self.route, self.total_time)
    }
}

/// Result of comparing the trip total against the budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "minutes")]
pub enum TripOutcome {
    /// The trip fits, with this many minutes left over
    Spare(Minutes),

    /// The trip overruns the budget by this many minutes
    Short(Minutes),
}

impl TripOutcome {
    /// True if the trip fits in the budget
    pub fn fits(&self) -> bool {
        matches!(self, TripOutcome::Spare(_))
    }
}

/// Trip total measured against the caller's available time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub total_time: Minutes,
    /// May be negative, which only widens the shortfall
    pub available_time: Minutes,
}

impl TripSummary {
    pub fn new(total_time: Minutes, available_time: Minutes) -> Self {
        Self {
            total_time,
            available_time,
        }
    }

    /// Spare minutes when the total is within budget (equality counts), shortfall otherwise
    pub fn outcome(&self) -> TripOutcome {
        if self.total_time <= self.available_time {
            TripOutcome::Spare(self.available_time - self.total_time)
        } else {
            TripOutcome::Short(self.total_time - self.available_time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(store: &str, total_store_time: Minutes, drive_time: Minutes) -> Stop {
        Stop {
            store: store.to_string(),
            items: vec![],
            total_store_time,
            drive_time,
        }
    }

    #[test]
    fn test_plan_total() {
        let plan = TripPlan::new(vec![stop("A", 15.0, 10.0), stop("B", 45.0, 15.0)]);
        assert_eq!(plan.total_time, 85.0);

        let (route, total) = plan.into_parts();
        assert_eq!(route.len(), 2);
        assert_eq!(total, 85.0);
    }

    #[test]
    fn test_fractional_plan_total() {
        let plan = TripPlan::new(vec![stop("A", 2.5, 10.0), stop("B", 0.25, 1.5)]);
        assert_eq!(plan.total_time, 14.25);
    }

    #[test]
    fn test_empty_plan() {
        let plan = TripPlan::new(vec![]);
        assert_eq!(plan, TripPlan::default());
        assert_eq!(plan.total_time, 0.0);
    }

    #[test]
    fn test_outcome_exact_fit_is_success() {
        let summary = TripSummary::new(120.0, 120.0);
        assert_eq!(summary.outcome(), TripOutcome::Spare(0.0));
        assert!(summary.outcome().fits());
    }

    #[test]
    fn test_outcome_spare_and_short() {
        assert_eq!(TripSummary::new(90.0, 120.0).outcome(), TripOutcome::Spare(30.0));
        assert_eq!(TripSummary::new(150.0, 120.0).outcome(), TripOutcome::Short(30.0));
        assert!(!TripSummary::new(150.0, 120.0).outcome().fits());
        assert_eq!(TripSummary::new(12.5, 10.0).outcome(), TripOutcome::Short(2.5));
    }

    #[test]
    fn test_negative_budget_widens_shortfall() {
        assert_eq!(TripSummary::new(0.0, -10.0).outcome(), TripOutcome::Short(10.0));
        assert_eq!(TripSummary::new(25.0, -10.0).outcome(), TripOutcome::Short(35.0));
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(TripSummary::new(90.0, 120.0).outcome()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "spare", "minutes": 30.0}));
    }
}
