// Fixed-width text rendering of a planned trip

use std::fmt;

use serde::Serialize;

use crate::error::TripError;
use crate::models::{Minutes, Stop, TripOutcome, TripPlan, TripSummary};

/// Width of the separator lines
pub const REPORT_WIDTH: usize = 60;

/// Title used when the caller does not supply one
pub const DEFAULT_TITLE: &str = "OPTIMIZED THANKSGIVING SHOPPING ROUTE";

/// Human-readable report over an already computed plan
#[derive(Debug, Clone, Copy)]
pub struct TripReport<'a> {
    plan: &'a TripPlan,
    available_time: Minutes,
    title: &'a str,
}

impl<'a> TripReport<'a> {
    pub fn new(plan: &'a TripPlan, available_time: Minutes, title: &'a str) -> Self {
        Self {
            plan,
            available_time,
            title,
        }
    }
}

impl fmt::Display for TripReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "=".repeat(REPORT_WIDTH);

        writeln!(f)?;
        writeln!(f, "{}", separator)?;
        writeln!(f, "{:^width$}", self.title, width = REPORT_WIDTH)?;
        writeln!(f, "{}", separator)?;

        for (i, stop) in self.plan.route.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "Stop {}: {}", i + 1, stop.store)?;
            writeln!(f, "  Items: {}", stop.items.join(", "))?;
            writeln!(f, "  Drive time: {} min", stop.drive_time)?;
            writeln!(f, "  Shopping time: {} min", stop.total_store_time)?;
            writeln!(f, "  Stop total: {} min", stop.stop_total())?;
        }

        let summary = self.plan.summary(self.available_time);

        writeln!(f)?;
        writeln!(f, "{}", separator)?;
        writeln!(f, "TOTAL TRIP TIME: {} minutes", summary.total_time)?;
        writeln!(f, "AVAILABLE TIME: {} minutes", summary.available_time)?;
        match summary.outcome() {
            TripOutcome::Spare(minutes) => {
                writeln!(f, "✓ SUCCESS! You have {} minutes to spare", minutes)?
            }
            TripOutcome::Short(minutes) => {
                writeln!(f, "✗ WARNING! You need {} more minutes", minutes)?
            }
        }
        writeln!(f, "{}", separator)?;
        writeln!(f)
    }
}

/// Machine-readable form of a plan: the route, the budget summary and the outcome
#[derive(Debug, Clone, Serialize)]
pub struct TripJson<'a> {
    pub route: &'a [Stop],
    pub summary: TripSummary,
    pub outcome: TripOutcome,
}

impl<'a> TripJson<'a> {
    pub fn new(plan: &'a TripPlan, available_time: Minutes) -> Self {
        let summary = plan.summary(available_time);
        Self {
            route: &plan.route,
            summary,
            outcome: summary.outcome(),
        }
    }
}

/// Renders a plan as pretty-printed JSON
pub fn render_json(plan: &TripPlan, available_time: Minutes) -> Result<String, TripError> {
    Ok(serde_json::to_string_pretty(&TripJson::new(plan, available_time))?)
}
