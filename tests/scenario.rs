use std::fs;
use std::path::Path;

use clap::Parser;
use ride_dispatch::cli::{execute, Cli};
use ride_dispatch::evaluation::{find_score, ScoreConfig};
use ride_dispatch::output::{parse_solution, solution_to_string};
use ride_dispatch::setup::{parse_problem, read_problem};
use ride_dispatch::solver::{greedy, strategy_fn, Strategy};

const EXAMPLE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/a_example.in");

#[test]
fn reference_example_full_output() {
    let problem = read_problem(EXAMPLE_PATH).unwrap();
    let solution = greedy::solve(&problem);

    assert_eq!(solution_to_string(&solution), "1 0\n2 2 1\n");
    assert_eq!(solution.assigned_count(), 3);

    let score = find_score(&problem, &solution, &ScoreConfig::default()).unwrap();
    assert_eq!(score.total, 10);
    assert_eq!(score.bonus, 2);
}

#[test]
fn more_vehicles_than_rides() {
    let problem = parse_problem("5 5 5 2 1 20\n0 0 1 1 0 20\n4 4 0 0 0 20\n").unwrap();
    let solution = greedy::solve(&problem);
    let text = solution_to_string(&solution);

    for line in text.lines() {
        let count: usize = line.split_whitespace().next().unwrap().parse().unwrap();
        assert!(count <= 1, "vehicle got {} rides: {}", count, line);
    }
    assert_eq!(text.lines().count(), 5);
    assert_eq!(text.lines().filter(|line| *line == "0").count(), 3);
}

#[test]
fn no_feasible_ride_leaves_everyone_idle() {
    // The only ride cannot be reached from the origin before it closes.
    let problem = parse_problem("10 10 3 1 5 20\n9 9 9 8 0 5\n").unwrap();
    let solution = greedy::solve(&problem);
    assert_eq!(solution_to_string(&solution), "0\n0\n0\n");
}

#[test]
fn repeated_runs_are_identical() {
    let problem = read_problem(EXAMPLE_PATH).unwrap();
    for strategy in Strategy::ALL {
        let first = solution_to_string(&strategy.solve(&problem));
        let second = solution_to_string(&strategy.solve(&problem));
        assert_eq!(first, second, "{} is not deterministic", strategy);
    }
}

#[test]
fn emission_is_idempotent_and_parses_back() {
    let problem = read_problem(EXAMPLE_PATH).unwrap();
    let solution = greedy::solve(&problem);

    let once = solution_to_string(&solution);
    assert_eq!(once, solution_to_string(&solution));

    let parsed = parse_solution(&once).unwrap();
    let expected: Vec<Vec<usize>> = solution.itineraries().map(<[usize]>::to_vec).collect();
    assert_eq!(parsed, expected);
}

#[test]
fn registry_resolves_by_name() {
    let problem = read_problem(EXAMPLE_PATH).unwrap();
    let solve = strategy_fn("greedy").unwrap();
    assert_eq!(solve(&problem), greedy::solve(&problem));
    assert!(strategy_fn("globals").is_err());
}

#[test]
fn malformed_input_names_the_line() {
    let err = parse_problem("3 4 2 3 2 10\n0 0 1 3 2 9\n1 2 1 0 0\n").unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn cli_solves_into_out_dir_and_checks() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    let report = dir.path().join("vehicles.csv");

    let cli = Cli::try_parse_from([
        "ride-dispatch",
        "solve",
        EXAMPLE_PATH,
        "--out-dir",
        out_dir.to_str().unwrap(),
        "--report",
        report.to_str().unwrap(),
    ])
    .unwrap();
    execute(cli).unwrap();

    let written = out_dir.join("a_example.out");
    assert_eq!(fs::read_to_string(&written).unwrap(), "1 0\n2 2 1\n");
    assert_eq!(fs::read_to_string(&report).unwrap().lines().count(), 3);

    let check = Cli::try_parse_from([
        "ride-dispatch",
        "check",
        EXAMPLE_PATH,
        written.to_str().unwrap(),
    ])
    .unwrap();
    execute(check).unwrap();
}

#[test]
fn cli_rejects_bad_instance() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.in");
    // latest finish before earliest start
    fs::write(&bad, "3 4 1 1 2 10\n0 0 1 3 6 5\n").unwrap();

    let cli = Cli::try_parse_from([
        "ride-dispatch",
        "solve",
        bad.to_str().unwrap(),
        "--out-dir",
        dir.path().to_str().unwrap(),
    ])
    .unwrap();
    assert!(execute(cli).is_err());
    assert!(!Path::new(&dir.path().join("bad.out")).exists());
}

#[test]
fn cli_rejects_inputs_sharing_an_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let example = fs::read_to_string(EXAMPLE_PATH).unwrap();
    let mut inputs = Vec::new();
    for sub in ["a", "b"] {
        let input = dir.path().join(sub).join("x.in");
        fs::create_dir_all(input.parent().unwrap()).unwrap();
        fs::write(&input, &example).unwrap();
        inputs.push(input);
    }
    let out_dir = dir.path().join("out");

    let cli = Cli::try_parse_from([
        "ride-dispatch",
        "solve",
        inputs[0].to_str().unwrap(),
        inputs[1].to_str().unwrap(),
        "--out-dir",
        out_dir.to_str().unwrap(),
    ])
    .unwrap();
    let err = execute(cli).unwrap_err();
    assert!(err.to_string().contains("x.out"), "{}", err);
    assert!(!out_dir.join("x.out").exists());
}
