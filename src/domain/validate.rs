use tracing::warn;

use super::error::ProblemError;
use super::types::Problem;

const HEADER_LINE: usize = 1;

// Published bounds of the problem family; larger inputs are accepted with a warning.
const MAX_FLEET: usize = 1_000;
const MAX_RIDES: usize = 10_000;
const MAX_HORIZON: u64 = 1_000_000_000;
const MAX_BONUS: u64 = 10_000;

/// Input line of ride `id`: the header is line 1, rides follow in order.
pub(crate) fn ride_line(id: usize) -> usize {
    id + 2
}

pub(super) fn validate_problem(problem: &Problem) -> Result<(), ProblemError> {
    if problem.rows() == 0 || problem.cols() == 0 {
        return Err(ProblemError::invalid(
            HEADER_LINE,
            format!("grid must be non-empty, got {}x{}", problem.rows(), problem.cols()),
        ));
    }
    if problem.fleet_size() == 0 {
        return Err(ProblemError::invalid(HEADER_LINE, "fleet size must be at least 1"));
    }
    if problem.horizon() == 0 {
        return Err(ProblemError::invalid(HEADER_LINE, "horizon must be at least 1"));
    }

    if problem.fleet_size() > MAX_FLEET {
        warn!("Fleet size {} exceeds the usual bound {}", problem.fleet_size(), MAX_FLEET);
    }
    if problem.rides().len() > MAX_RIDES {
        warn!("Ride count {} exceeds the usual bound {}", problem.rides().len(), MAX_RIDES);
    }
    if problem.horizon() > MAX_HORIZON {
        warn!("Horizon {} exceeds the usual bound {}", problem.horizon(), MAX_HORIZON);
    }
    if problem.bonus() > MAX_BONUS {
        warn!("Bonus {} exceeds the usual bound {}", problem.bonus(), MAX_BONUS);
    }

    for (idx, ride) in problem.rides().iter().enumerate() {
        let line = ride_line(idx);

        if ride.id() != idx {
            return Err(ProblemError::invalid(
                line,
                format!("ride at position {} carries id {}", idx, ride.id()),
            ));
        }

        for (what, at) in [("start", ride.start()), ("end", ride.end())] {
            if at.row >= problem.rows() || at.col >= problem.cols() {
                return Err(ProblemError::invalid(
                    line,
                    format!(
                        "ride {} {} {} lies outside the {}x{} grid",
                        idx,
                        what,
                        at,
                        problem.rows(),
                        problem.cols()
                    ),
                ));
            }
        }

        let s = ride.earliest_start();
        let f = ride.latest_finish();
        if s >= problem.horizon() {
            return Err(ProblemError::invalid(
                line,
                format!("ride {} earliest start {} is not before horizon {}", idx, s, problem.horizon()),
            ));
        }
        if f < s {
            return Err(ProblemError::invalid(
                line,
                format!("ride {} latest finish {} precedes earliest start {}", idx, f, s),
            ));
        }
        if f > problem.horizon() {
            return Err(ProblemError::invalid(
                line,
                format!("ride {} latest finish {} exceeds horizon {}", idx, f, problem.horizon()),
            ));
        }
        if f < s + ride.length() {
            return Err(ProblemError::invalid(
                line,
                format!(
                    "ride {} cannot be completed: {} steps do not fit in window [{}, {}]",
                    idx,
                    ride.length(),
                    s,
                    f
                ),
            ));
        }
    }

    Ok(())
}
