use serde::Serialize;

pub use crate::distance::Coord;
use crate::distance::manhattan_distance;

use super::error::ProblemError;
use super::validate::validate_problem;

pub type RideId = usize;
pub type VehicleId = usize;

/// A transport request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ride {
    id: RideId,
    start: Coord,
    end: Coord,
    earliest_start: u64,
    latest_finish: u64,
}

impl Ride {
    pub fn new(id: RideId, start: Coord, end: Coord, earliest_start: u64, latest_finish: u64) -> Self {
        Self {
            id,
            start,
            end,
            earliest_start,
            latest_finish,
        }
    }

    pub fn id(&self) -> RideId {
        self.id
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn earliest_start(&self) -> u64 {
        self.earliest_start
    }

    pub fn latest_finish(&self) -> u64 {
        self.latest_finish
    }

    /// Distance served when the ride is completed.
    pub fn length(&self) -> u64 {
        manhattan_distance(self.start, self.end)
    }
}

/// Fleet member. Mutated only by a scheduler while it owns the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    id: VehicleId,
    location: Coord,
    free_at: u64,
    itinerary: Vec<RideId>,
}

impl Vehicle {
    /// Idle at the origin at time zero.
    pub fn new(id: VehicleId) -> Self {
        Self {
            id,
            location: Coord::ORIGIN,
            free_at: 0,
            itinerary: Vec::new(),
        }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn location(&self) -> Coord {
        self.location
    }

    pub fn free_at(&self) -> u64 {
        self.free_at
    }

    /// Assigned rides in chronological order.
    pub fn itinerary(&self) -> &[RideId] {
        &self.itinerary
    }

    /// Commit `ride`, started at `start_time`. The vehicle ends up at the
    /// drop-off and is free once the ride is driven.
    pub fn assign(&mut self, ride: &Ride, start_time: u64) {
        self.itinerary.push(ride.id);
        self.location = ride.end;
        self.free_at = start_time + ride.length();
    }
}

/// A parsed and validated problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    rows: u32,
    cols: u32,
    fleet_size: usize,
    bonus: u64,
    horizon: u64,
    rides: Vec<Ride>,
}

impl Problem {
    /// Build an instance, rejecting anything that breaks the input contract.
    /// Ride ids must equal their position in `rides`.
    pub fn new(
        rows: u32,
        cols: u32,
        fleet_size: usize,
        bonus: u64,
        horizon: u64,
        rides: Vec<Ride>,
    ) -> Result<Self, ProblemError> {
        let problem = Self {
            rows,
            cols,
            fleet_size,
            bonus,
            horizon,
            rides,
        };
        validate_problem(&problem)?;
        Ok(problem)
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    pub fn bonus(&self) -> u64 {
        self.bonus
    }

    pub fn horizon(&self) -> u64 {
        self.horizon
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    pub fn ride(&self, id: RideId) -> Option<&Ride> {
        self.rides.get(id)
    }

    /// A fresh, idle fleet for one scheduling run.
    pub fn fleet(&self) -> Vec<Vehicle> {
        (0..self.fleet_size).map(Vehicle::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_assign_moves_and_advances_clock() {
        let ride = Ride::new(3, Coord::new(1, 1), Coord::new(4, 5), 10, 30);
        let mut vehicle = Vehicle::new(0);
        vehicle.assign(&ride, 12);

        assert_eq!(vehicle.itinerary(), &[3]);
        assert_eq!(vehicle.location(), Coord::new(4, 5));
        assert_eq!(vehicle.free_at(), 12 + 7);
    }

    #[test]
    fn fleet_starts_idle_at_origin() {
        let problem = Problem::new(
            2,
            2,
            3,
            1,
            5,
            vec![Ride::new(0, Coord::new(0, 0), Coord::new(1, 1), 0, 5)],
        )
        .unwrap();

        let fleet = problem.fleet();
        assert_eq!(fleet.len(), 3);
        for (idx, vehicle) in fleet.iter().enumerate() {
            assert_eq!(vehicle.id(), idx);
            assert_eq!(vehicle.location(), Coord::ORIGIN);
            assert_eq!(vehicle.free_at(), 0);
            assert!(vehicle.itinerary().is_empty());
        }
    }
}
