use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::distance::Coord;
use crate::domain::{ride_line, Problem, ProblemError, Ride};

const FIELDS_PER_LINE: usize = 6;

/// Read and validate an instance file.
pub fn read_problem(path: impl AsRef<Path>) -> Result<Problem, ProblemError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let problem = parse_problem(&text)?;
    info!(
        "Loaded {}: {}x{} grid, {} vehicles, {} rides, bonus {}, horizon {}",
        path.display(),
        problem.rows(),
        problem.cols(),
        problem.fleet_size(),
        problem.rides().len(),
        problem.bonus(),
        problem.horizon()
    );
    Ok(problem)
}

/// Parse the text format: a `R C F N B T` header, then `N` lines of
/// `a b x y s f`. Trailing blank lines are allowed, nothing else is.
pub fn parse_problem(text: &str) -> Result<Problem, ProblemError> {
    let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line));

    let (line_no, header) = lines
        .next()
        .ok_or_else(|| ProblemError::parse(1, "missing header line"))?;
    let [rows, cols, fleet, count, bonus, horizon] = parse_fields(line_no, header)?;

    let rows = to_u32(line_no, "rows", rows)?;
    let cols = to_u32(line_no, "columns", cols)?;
    let fleet_size = to_usize(line_no, "fleet size", fleet)?;
    let ride_count = to_usize(line_no, "ride count", count)?;
    let bonus = to_u64(line_no, "bonus", bonus)?;
    let horizon = to_u64(line_no, "horizon", horizon)?;
    debug!(rows, cols, fleet_size, ride_count, bonus, horizon, "Parsed header");

    let mut rides = Vec::with_capacity(ride_count);
    for id in 0..ride_count {
        let expected = ride_line(id);
        let (line_no, line) = lines
            .next()
            .filter(|(_, line)| !line.trim().is_empty())
            .ok_or_else(|| {
                ProblemError::parse(
                    expected,
                    format!("expected ride {} of {}, input is truncated", id, ride_count),
                )
            })?;
        let [a, b, x, y, s, f] = parse_fields(line_no, line)?;
        rides.push(Ride::new(
            id,
            Coord::new(to_u32(line_no, "start row", a)?, to_u32(line_no, "start column", b)?),
            Coord::new(to_u32(line_no, "end row", x)?, to_u32(line_no, "end column", y)?),
            to_u64(line_no, "earliest start", s)?,
            to_u64(line_no, "latest finish", f)?,
        ));
    }

    if let Some((line_no, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
        return Err(ProblemError::parse(
            line_no,
            format!("unexpected content after {} rides", ride_count),
        ));
    }

    Problem::new(rows, cols, fleet_size, bonus, horizon, rides)
}

fn parse_fields(line_no: usize, line: &str) -> Result<[i64; FIELDS_PER_LINE], ProblemError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != FIELDS_PER_LINE {
        return Err(ProblemError::parse(
            line_no,
            format!("expected {} integers, found {} fields", FIELDS_PER_LINE, tokens.len()),
        ));
    }

    let mut fields = [0i64; FIELDS_PER_LINE];
    for (slot, token) in fields.iter_mut().zip(tokens) {
        *slot = token
            .parse()
            .map_err(|_| ProblemError::parse(line_no, format!("'{}' is not an integer", token)))?;
    }
    Ok(fields)
}

fn to_u32(line_no: usize, what: &str, value: i64) -> Result<u32, ProblemError> {
    u32::try_from(value).map_err(|_| out_of_range(line_no, what, value))
}

fn to_u64(line_no: usize, what: &str, value: i64) -> Result<u64, ProblemError> {
    u64::try_from(value).map_err(|_| out_of_range(line_no, what, value))
}

fn to_usize(line_no: usize, what: &str, value: i64) -> Result<usize, ProblemError> {
    usize::try_from(value).map_err(|_| out_of_range(line_no, what, value))
}

fn out_of_range(line_no: usize, what: &str, value: i64) -> ProblemError {
    if value < 0 {
        ProblemError::invalid(line_no, format!("{} must not be negative, got {}", what, value))
    } else {
        ProblemError::invalid(line_no, format!("{} {} is out of range", what, value))
    }
}
