pub mod emitter;
pub mod report;

pub use emitter::{format_itinerary, parse_solution, read_solution, solution_to_string, write_solution};
pub use report::{save_vehicle_report, vehicle_rows, write_vehicle_report, ScoreSummary, VehicleRow};
