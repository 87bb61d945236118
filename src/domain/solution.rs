use std::collections::HashSet;

use super::types::{RideId, Vehicle, VehicleId};

/// Finalized fleet, indexed by vehicle id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    vehicles: Vec<Vehicle>,
}

impl Solution {
    /// Vehicles are expected in id order, as handed out by `Problem::fleet`.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        debug_assert!(vehicles.iter().enumerate().all(|(idx, v)| v.id() == idx));
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn itinerary(&self, vehicle: VehicleId) -> Option<&[RideId]> {
        self.vehicles.get(vehicle).map(Vehicle::itinerary)
    }

    /// Itineraries in vehicle-id order.
    pub fn itineraries(&self) -> impl Iterator<Item = &[RideId]> + '_ {
        self.vehicles.iter().map(Vehicle::itinerary)
    }

    pub fn assigned_count(&self) -> usize {
        self.itineraries().map(<[RideId]>::len).sum()
    }

    pub fn assigned_rides(&self) -> HashSet<RideId> {
        self.itineraries().flatten().copied().collect()
    }
}
