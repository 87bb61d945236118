use crate::distance::manhattan_distance;
use crate::domain::{Ride, Vehicle};

/// Timing of one ride if handed to a vehicle in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    /// When the ride actually starts: travel to pickup, then wait for the earliest start.
    pub arrival: u64,
    pub finish: u64,
    /// Started exactly at the ride's earliest start.
    pub on_time: bool,
}

impl Leg {
    pub fn fits(&self, ride: &Ride) -> bool {
        self.finish <= ride.latest_finish()
    }
}

pub fn plan_leg(vehicle: &Vehicle, ride: &Ride) -> Leg {
    let reach = vehicle.free_at() + manhattan_distance(vehicle.location(), ride.start());
    let arrival = reach.max(ride.earliest_start());
    Leg {
        arrival,
        finish: arrival + ride.length(),
        on_time: arrival == ride.earliest_start(),
    }
}

pub fn is_feasible(vehicle: &Vehicle, ride: &Ride) -> bool {
    plan_leg(vehicle, ride).fits(ride)
}
