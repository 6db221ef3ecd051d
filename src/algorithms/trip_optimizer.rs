// Trip optimizer: groups items by store and visits the closest stores first

use std::collections::HashMap;
use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::algorithms::TripSolver;
use crate::models::{Item, Minutes, Stop, TripPlan};
use crate::utils::report::{TripReport, DEFAULT_TITLE};

/// Orders stops by ascending drive time
#[derive(Debug, Clone, Copy, Default)]
pub struct TripOptimizer;

impl TripOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Groups items into stops, keeping stores in first-appearance order
    pub fn group_by_store(&self, items: &[Item]) -> Vec<Stop> {
        let mut stops: Vec<Stop> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for item in items {
            let position = *index.entry(item.store.as_str()).or_insert_with(|| {
                debug!(store = %item.store, drive_time = item.drive_time, "opening stop");
                stops.push(Stop::open(item));
                stops.len() - 1
            });
            let stop = &mut stops[position];

            // First-seen drive time wins
            if stop.drive_time != item.drive_time {
                warn!(
                    store = %stop.store,
                    item = %item.name,
                    kept = stop.drive_time,
                    ignored = item.drive_time,
                    "conflicting drive time for store"
                );
            }

            debug!(store = %stop.store, item = %item.name, store_time = item.store_time, "adding item");
            stop.add_item(item);
        }

        stops
    }

    /// Sorts stops by drive time. The sort is stable so ties keep first-appearance order.
    pub fn order_route(&self, mut stops: Vec<Stop>) -> Vec<Stop> {
        stops.sort_by(|a, b| a.drive_time.total_cmp(&b.drive_time));
        stops
    }
}

impl TripSolver for TripOptimizer {
    fn plan(&self, items: &[Item]) -> TripPlan {
        let stops = self.group_by_store(items);
        let plan = TripPlan::new(self.order_route(stops));

        info!(
            items = items.len(),
            stops = plan.route.len(),
            total_time = plan.total_time,
            "planned trip"
        );

        plan
    }
}

/// Plans a trip, writes the report to stdout and returns the route with its total time
pub fn optimize_trip(items: &[Item], available_time: Minutes) -> (Vec<Stop>, Minutes) {
    let plan = TripOptimizer::new().plan(items);

    let report = TripReport::new(&plan, available_time, DEFAULT_TITLE);
    let mut stdout = io::stdout().lock();
    if let Err(e) = write!(stdout, "{}", report).and_then(|_| stdout.flush()) {
        warn!(error = %e, "failed to write trip report");
    }

    plan.into_parts()
}
