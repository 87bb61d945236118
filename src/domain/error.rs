use std::fmt;
use std::io;

use super::types::{RideId, VehicleId};

/// Failure to read or accept a problem instance.
#[derive(Debug)]
pub enum ProblemError {
    Io(io::Error),
    /// Malformed text: wrong token count, non-integer field, missing line.
    Parse { line: usize, message: String },
    /// Well-formed but violates the instance contract.
    Invalid { line: usize, message: String },
}

impl ProblemError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        ProblemError::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn invalid(line: usize, message: impl Into<String>) -> Self {
        ProblemError::Invalid {
            line,
            message: message.into(),
        }
    }

    /// 1-based input line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ProblemError::Io(_) => None,
            ProblemError::Parse { line, .. } | ProblemError::Invalid { line, .. } => Some(*line),
        }
    }
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::Io(e) => write!(f, "failed to read problem: {}", e),
            ProblemError::Parse { line, message } => {
                write!(f, "parse error on line {}: {}", line, message)
            }
            ProblemError::Invalid { line, message } => {
                write!(f, "invalid problem on line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProblemError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProblemError {
    fn from(e: io::Error) -> Self {
        ProblemError::Io(e)
    }
}

/// Failure to read or accept a solution against a given problem.
#[derive(Debug)]
pub enum SolutionError {
    Io(io::Error),
    Parse {
        line: usize,
        message: String,
    },
    VehicleCount {
        found: usize,
        fleet_size: usize,
    },
    UnknownRide {
        vehicle: VehicleId,
        ride: RideId,
    },
    DuplicateRide {
        ride: RideId,
    },
    Infeasible {
        vehicle: VehicleId,
        ride: RideId,
        finish: u64,
        latest_finish: u64,
    },
}

impl SolutionError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        SolutionError::Parse {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for SolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionError::Io(e) => write!(f, "failed to read solution: {}", e),
            SolutionError::Parse { line, message } => {
                write!(f, "solution parse error on line {}: {}", line, message)
            }
            SolutionError::VehicleCount { found, fleet_size } => write!(
                f,
                "solution lists {} vehicles but the fleet has {}",
                found, fleet_size
            ),
            SolutionError::UnknownRide { vehicle, ride } => {
                write!(f, "vehicle {} references unknown ride {}", vehicle, ride)
            }
            SolutionError::DuplicateRide { ride } => {
                write!(f, "ride {} is assigned more than once", ride)
            }
            SolutionError::Infeasible {
                vehicle,
                ride,
                finish,
                latest_finish,
            } => write!(
                f,
                "vehicle {} finishes ride {} at {} after its latest finish {}",
                vehicle, ride, finish, latest_finish
            ),
        }
    }
}

impl std::error::Error for SolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolutionError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SolutionError {
    fn from(e: io::Error) -> Self {
        SolutionError::Io(e)
    }
}
