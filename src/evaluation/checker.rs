use tracing::{debug, warn};

use crate::domain::{Problem, RideId, Solution, SolutionError};

use super::feasibility::plan_leg;
use super::score::{ScoreBreakdown, ScoreConfig};

/// Replay itineraries (vehicle-id order) against `problem`, rebuilding the
/// fleet and tallying the score.
///
/// Fewer itineraries than vehicles is accepted; the missing vehicles stay idle.
pub fn check<'a, I>(
    problem: &Problem,
    itineraries: I,
    config: &ScoreConfig,
) -> Result<(Solution, ScoreBreakdown), SolutionError>
where
    I: IntoIterator<Item = &'a [RideId]>,
{
    let mut fleet = problem.fleet();
    let mut seen = vec![false; problem.rides().len()];
    let mut breakdown = ScoreBreakdown::default();
    let mut listed = 0;

    for (vehicle_id, itinerary) in itineraries.into_iter().enumerate() {
        listed += 1;
        let Some(vehicle) = fleet.get_mut(vehicle_id) else {
            continue;
        };

        for &ride_id in itinerary {
            let ride = problem.ride(ride_id).ok_or(SolutionError::UnknownRide {
                vehicle: vehicle_id,
                ride: ride_id,
            })?;
            if std::mem::replace(&mut seen[ride_id], true) {
                return Err(SolutionError::DuplicateRide { ride: ride_id });
            }

            let leg = plan_leg(vehicle, ride);
            if !leg.fits(ride) {
                return Err(SolutionError::Infeasible {
                    vehicle: vehicle_id,
                    ride: ride_id,
                    finish: leg.finish,
                    latest_finish: ride.latest_finish(),
                });
            }

            breakdown.record(ride.length(), leg.on_time, problem.bonus(), config);
            vehicle.assign(ride, leg.arrival);
        }
    }

    if listed > problem.fleet_size() {
        return Err(SolutionError::VehicleCount {
            found: listed,
            fleet_size: problem.fleet_size(),
        });
    }
    if listed < problem.fleet_size() {
        warn!(
            "Solution lists {} of {} vehicles; the rest are treated as idle",
            listed,
            problem.fleet_size()
        );
    }

    let breakdown = breakdown.finish(problem.rides().len(), config);
    debug!(
        "Checked solution: {} rides assigned, score {}",
        breakdown.assigned, breakdown.total
    );
    Ok((Solution::new(fleet), breakdown))
}
