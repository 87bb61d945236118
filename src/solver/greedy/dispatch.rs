//! Nearest space-time dispatch.
//!
//! The vehicle that frees up first takes the feasible unassigned ride closest
//! to it in space-time. One pass, no reassignment.

use std::collections::BTreeSet;

use tracing::{debug, info, span, trace, Level};

use crate::distance::space_time_distance;
use crate::domain::{Problem, RideId, Solution, Vehicle};
use crate::evaluation::{plan_leg, Leg};

use super::ready::ReadyQueue;

pub fn solve(problem: &Problem) -> Solution {
    let dispatch_span = span!(
        Level::INFO,
        "greedy_dispatch",
        vehicles = problem.fleet_size(),
        rides = problem.rides().len()
    );
    let _guard = dispatch_span.enter();

    let mut fleet = problem.fleet();
    let mut unassigned: BTreeSet<RideId> = (0..problem.rides().len()).collect();
    let mut ready = ReadyQueue::with_fleet(&fleet);
    let mut retired = 0;

    while !unassigned.is_empty() {
        let Some(vehicle_id) = ready.pop() else {
            break;
        };
        let vehicle = &mut fleet[vehicle_id];

        let Some((ride_id, leg)) = select_ride(problem, vehicle, &unassigned) else {
            debug!(
                "Vehicle {} retired at t={} with {} rides: nothing feasible",
                vehicle_id,
                vehicle.free_at(),
                vehicle.itinerary().len()
            );
            retired += 1;
            continue;
        };

        unassigned.remove(&ride_id);
        vehicle.assign(&problem.rides()[ride_id], leg.arrival);
        trace!(
            "Vehicle {} takes ride {} (start {}, finish {}, on time: {})",
            vehicle_id,
            ride_id,
            leg.arrival,
            leg.finish,
            leg.on_time
        );

        if vehicle.free_at() < problem.horizon() && !unassigned.is_empty() {
            ready.push(vehicle);
        } else {
            debug!(
                "Vehicle {} retired at t={} with {} rides",
                vehicle_id,
                vehicle.free_at(),
                vehicle.itinerary().len()
            );
            retired += 1;
        }
    }

    info!(
        "Dispatch complete: {} of {} rides assigned, {} vehicles retired, {} still idle",
        problem.rides().len() - unassigned.len(),
        problem.rides().len(),
        retired,
        ready.len()
    );

    Solution::new(fleet)
}

/// Feasible unassigned ride nearest to `vehicle` in space-time; ties go to
/// the lowest ride id.
pub fn select_ride(
    problem: &Problem,
    vehicle: &Vehicle,
    unassigned: &BTreeSet<RideId>,
) -> Option<(RideId, Leg)> {
    unassigned
        .iter()
        .filter_map(|&ride_id| {
            let ride = &problem.rides()[ride_id];
            let leg = plan_leg(vehicle, ride);
            if !leg.fits(ride) {
                return None;
            }
            let rank = space_time_distance(
                vehicle.location(),
                vehicle.free_at(),
                ride.start(),
                ride.earliest_start(),
            );
            Some((rank, ride_id, leg))
        })
        .min_by_key(|&(rank, ride_id, _)| (rank, ride_id))
        .map(|(_, ride_id, leg)| (ride_id, leg))
}
