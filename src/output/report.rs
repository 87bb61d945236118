use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::Writer;
use itertools::Itertools;
use serde::Serialize;

use crate::domain::{Problem, Solution, Vehicle};
use crate::evaluation::{plan_leg, ScoreBreakdown};

/// Per-vehicle line of the CSV report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRow {
    pub vehicle: usize,
    pub rides: usize,
    pub distance_served: u64,
    pub on_time: usize,
    pub free_at: u64,
    pub itinerary: String,
}

/// JSON summary of one solved or checked instance.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub input: String,
    pub strategy: Option<String>,
    pub vehicles: usize,
    pub rides: usize,
    #[serde(flatten)]
    pub score: ScoreBreakdown,
}

pub fn vehicle_rows(problem: &Problem, solution: &Solution) -> Vec<VehicleRow> {
    solution
        .vehicles()
        .iter()
        .map(|finished| {
            let mut replay = Vehicle::new(finished.id());
            let mut row = VehicleRow {
                vehicle: finished.id(),
                rides: finished.itinerary().len(),
                distance_served: 0,
                on_time: 0,
                free_at: finished.free_at(),
                itinerary: finished.itinerary().iter().join(" "),
            };
            for ride in finished.itinerary().iter().filter_map(|&id| problem.ride(id)) {
                let leg = plan_leg(&replay, ride);
                row.distance_served += ride.length();
                row.on_time += usize::from(leg.on_time);
                replay.assign(ride, leg.arrival);
            }
            row
        })
        .collect()
}

pub fn write_vehicle_report<W: Write>(
    writer: W,
    problem: &Problem,
    solution: &Solution,
) -> csv::Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for row in vehicle_rows(problem, solution) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_vehicle_report(
    path: impl AsRef<Path>,
    problem: &Problem,
    solution: &Solution,
) -> csv::Result<()> {
    let file = BufWriter::new(File::create(path)?);
    write_vehicle_report(file, problem, solution)
}
