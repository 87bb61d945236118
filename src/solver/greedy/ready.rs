use std::collections::BinaryHeap;

use crate::domain::{Vehicle, VehicleId};

/// Idle vehicle waiting for its next assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReadyVehicle {
    free_at: u64,
    id: VehicleId,
}

// Reverse of (free_at, id) so the max-heap yields the earliest-free, lowest-id vehicle.
impl Ord for ReadyVehicle {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .free_at
            .cmp(&self.free_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for ReadyVehicle {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(super) struct ReadyQueue {
    heap: BinaryHeap<ReadyVehicle>,
}

impl ReadyQueue {
    pub(super) fn with_fleet(fleet: &[Vehicle]) -> Self {
        let mut queue = Self {
            heap: BinaryHeap::with_capacity(fleet.len()),
        };
        for vehicle in fleet {
            queue.push(vehicle);
        }
        queue
    }

    pub(super) fn push(&mut self, vehicle: &Vehicle) {
        self.heap.push(ReadyVehicle {
            free_at: vehicle.free_at(),
            id: vehicle.id(),
        });
    }

    pub(super) fn pop(&mut self) -> Option<VehicleId> {
        self.heap.pop().map(|entry| entry.id)
    }

    pub(super) fn len(&self) -> usize {
        self.heap.len()
    }
}
