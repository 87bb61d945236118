use std::io::{self, Write};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::constant::{
    GENERATOR_BONUS, GENERATOR_COLS, GENERATOR_RIDES, GENERATOR_ROWS, GENERATOR_SEED,
    GENERATOR_STEPS, GENERATOR_VEHICLES,
};
use crate::distance::{manhattan_distance, Coord};
use crate::domain::{Problem, ProblemError, Ride};

/// Shape of a random instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub rows: u32,
    pub cols: u32,
    pub vehicles: usize,
    pub rides: usize,
    pub bonus: u64,
    pub steps: u64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: GENERATOR_ROWS,
            cols: GENERATOR_COLS,
            vehicles: GENERATOR_VEHICLES,
            rides: GENERATOR_RIDES,
            bonus: GENERATOR_BONUS,
            steps: GENERATOR_STEPS,
            seed: GENERATOR_SEED,
        }
    }
}

fn random_coord(rng: &mut ChaCha8Rng, rows: u32, cols: u32) -> Coord {
    Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols))
}

/// Draws a ride whose window fits inside the horizon and is long enough to drive.
fn random_ride(rng: &mut ChaCha8Rng, id: usize, config: &GeneratorConfig) -> Ride {
    let start = random_coord(rng, config.rows, config.cols);
    let mut end = random_coord(rng, config.rows, config.cols);
    for _ in 0..8 {
        if manhattan_distance(start, end) < config.steps {
            break;
        }
        end = random_coord(rng, config.rows, config.cols);
    }
    if manhattan_distance(start, end) >= config.steps {
        end = start;
    }

    let length = manhattan_distance(start, end);
    let latest_start = (config.steps - length).min(config.steps - 1);
    let earliest_start = rng.gen_range(0..=latest_start);
    let tightest = earliest_start + length;
    let slack = rng.gen_range(0..=config.steps / 4);
    let latest_finish = (tightest + slack).min(config.steps);

    Ride::new(id, start, end, earliest_start, latest_finish)
}

/// Seeded random instance; the same config always yields the same problem.
pub fn generate_problem(config: &GeneratorConfig) -> Result<Problem, ProblemError> {
    if config.rows == 0 || config.cols == 0 || config.steps == 0 {
        // Nothing to draw from; let validation name the problem.
        return Problem::new(
            config.rows,
            config.cols,
            config.vehicles,
            config.bonus,
            config.steps,
            Vec::new(),
        );
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let rides: Vec<Ride> = (0..config.rides)
        .map(|id| random_ride(&mut rng, id, config))
        .collect();

    info!(
        "Generated {} rides on a {}x{} grid for {} vehicles (seed {})",
        rides.len(),
        config.rows,
        config.cols,
        config.vehicles,
        config.seed
    );

    Problem::new(
        config.rows,
        config.cols,
        config.vehicles,
        config.bonus,
        config.steps,
        rides,
    )
}

/// Serialize an instance in the input text format.
pub fn write_problem<W: Write>(mut writer: W, problem: &Problem) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} {} {} {} {}",
        problem.rows(),
        problem.cols(),
        problem.fleet_size(),
        problem.rides().len(),
        problem.bonus(),
        problem.horizon()
    )?;
    for ride in problem.rides() {
        writeln!(
            writer,
            "{} {} {} {} {} {}",
            ride.start().row,
            ride.start().col,
            ride.end().row,
            ride.end().col,
            ride.earliest_start(),
            ride.latest_finish()
        )?;
    }
    writer.flush()
}

pub fn format_problem(problem: &Problem) -> io::Result<String> {
    let mut buf = Vec::new();
    write_problem(&mut buf, problem)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
