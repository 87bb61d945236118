use tracing::{debug, info, span, Level};

use crate::domain::{Problem, Ride, Solution};
use crate::evaluation::plan_leg;

/// Baseline: rides sorted by earliest start, one per vehicle in id order.
/// Rides no fresh vehicle can complete are skipped.
pub fn solve(problem: &Problem) -> Solution {
    let baseline_span = span!(Level::INFO, "earliest_start", vehicles = problem.fleet_size());
    let _guard = baseline_span.enter();

    let mut order: Vec<&Ride> = problem.rides().iter().collect();
    order.sort_by_key(|ride| (ride.earliest_start(), ride.id()));
    let mut candidates = order.into_iter();

    let mut fleet = problem.fleet();
    for vehicle in fleet.iter_mut() {
        let Some((ride, leg)) = candidates.by_ref().find_map(|ride| {
            let leg = plan_leg(vehicle, ride);
            leg.fits(ride).then_some((ride, leg))
        }) else {
            debug!("No rides left for vehicle {} onwards", vehicle.id());
            break;
        };
        vehicle.assign(ride, leg.arrival);
    }

    let solution = Solution::new(fleet);
    info!(
        "Earliest-start baseline assigned {} of {} rides",
        solution.assigned_count(),
        problem.rides().len()
    );
    solution
}
