pub mod error;
pub mod solution;
pub mod types;
mod validate;

pub use error::{ProblemError, SolutionError};
pub use solution::Solution;
pub use types::{Problem, Ride, RideId, Vehicle, VehicleId};
pub(crate) use validate::ride_line;
