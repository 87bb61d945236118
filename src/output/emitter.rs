use std::fs;
use std::io::{self, Write};
use std::iter;
use std::path::Path;

use itertools::Itertools;

use crate::domain::{RideId, Solution, SolutionError};

/// `<count> <id>...`, or just `0` for an idle vehicle.
pub fn format_itinerary(itinerary: &[RideId]) -> String {
    iter::once(itinerary.len())
        .chain(itinerary.iter().copied())
        .join(" ")
}

/// One line per vehicle, in vehicle-id order.
pub fn write_solution<W: Write>(mut writer: W, solution: &Solution) -> io::Result<()> {
    for itinerary in solution.itineraries() {
        writeln!(writer, "{}", format_itinerary(itinerary))?;
    }
    writer.flush()
}

pub fn solution_to_string(solution: &Solution) -> String {
    solution
        .itineraries()
        .map(|itinerary| format_itinerary(itinerary) + "\n")
        .collect()
}

/// Parse the per-vehicle line format back into itineraries. Trailing blank
/// lines are ignored.
pub fn parse_solution(text: &str) -> Result<Vec<Vec<RideId>>, SolutionError> {
    let lines: Vec<&str> = text.lines().collect();
    let used = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);

    lines[..used]
        .iter()
        .enumerate()
        .map(|(idx, line)| parse_itinerary(idx + 1, line))
        .collect()
}

fn parse_itinerary(line_no: usize, line: &str) -> Result<Vec<RideId>, SolutionError> {
    let mut numbers = line.split_whitespace().map(|token| {
        token
            .parse::<usize>()
            .map_err(|_| SolutionError::parse(line_no, format!("'{}' is not a ride count or id", token)))
    });

    let count = numbers
        .next()
        .ok_or_else(|| SolutionError::parse(line_no, "empty line"))??;
    let rides: Vec<RideId> = numbers.collect::<Result<_, _>>()?;
    if rides.len() != count {
        return Err(SolutionError::parse(
            line_no,
            format!("declares {} rides but lists {}", count, rides.len()),
        ));
    }
    Ok(rides)
}

pub fn read_solution(path: impl AsRef<Path>) -> Result<Vec<Vec<RideId>>, SolutionError> {
    let text = fs::read_to_string(path)?;
    parse_solution(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_idle_and_busy_vehicles() {
        assert_eq!(format_itinerary(&[]), "0");
        assert_eq!(format_itinerary(&[2, 1]), "2 2 1");
    }

    #[test]
    fn parses_lines_and_ignores_trailing_blanks() {
        let parsed = parse_solution("1 0\n2 2 1\n0\n\n").unwrap();
        assert_eq!(parsed, vec![vec![0], vec![2, 1], vec![]]);
    }

    #[test]
    fn rejects_count_mismatch_with_line_number() {
        match parse_solution("1 0\n3 2 1\n") {
            Err(SolutionError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_interior_blank_line_and_garbage() {
        assert!(matches!(
            parse_solution("1 0\n\n1 1\n"),
            Err(SolutionError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_solution("1 x\n"),
            Err(SolutionError::Parse { line: 1, .. })
        ));
    }
}
