use proptest::prelude::*;

use ride_dispatch::distance::{manhattan_distance, space_time_distance};
use ride_dispatch::domain::{Problem, RideId, Solution, Vehicle};
use ride_dispatch::evaluation::{check, plan_leg, ScoreConfig};
use ride_dispatch::fixtures::{generate_problem, GeneratorConfig};
use ride_dispatch::solver::Strategy;

fn instance(seed: u64, vehicles: usize, rides: usize, steps: u64) -> Problem {
    generate_problem(&GeneratorConfig {
        rows: 30,
        cols: 30,
        vehicles,
        rides,
        bonus: 5,
        steps,
        seed,
    })
    .unwrap()
}

fn assert_schedule_holds(problem: &Problem, solution: &Solution) -> Result<(), TestCaseError> {
    prop_assert_eq!(solution.vehicles().len(), problem.fleet_size());

    // Uniqueness and per-ride feasibility, replayed from scratch.
    let (_, score) = check(problem, solution.itineraries(), &ScoreConfig::default())
        .map_err(|e| TestCaseError::fail(format!("replay failed: {}", e)))?;
    prop_assert_eq!(score.assigned, solution.assigned_rides().len());

    for vehicle in solution.vehicles() {
        let mut replay = Vehicle::new(vehicle.id());
        let mut clock = 0;
        for &ride_id in vehicle.itinerary() {
            let ride = &problem.rides()[ride_id];
            let leg = plan_leg(&replay, ride);
            prop_assert!(leg.finish <= ride.latest_finish());
            prop_assert_eq!(
                leg.finish,
                leg.arrival + manhattan_distance(ride.start(), ride.end())
            );
            prop_assert!(leg.finish >= clock, "clock went backwards");
            clock = leg.finish;
            replay.assign(ride, leg.arrival);
        }
        prop_assert_eq!(replay.free_at(), vehicle.free_at());
        prop_assert_eq!(replay.location(), vehicle.location());
    }
    Ok(())
}

/// Dispatch by direct scan: no heap, no ordered set. Every round looks at all
/// active vehicles and every unassigned ride.
fn scan_dispatch(problem: &Problem) -> Vec<Vec<RideId>> {
    let mut fleet = problem.fleet();
    let mut active = vec![true; fleet.len()];
    let mut taken = vec![false; problem.rides().len()];

    loop {
        if taken.iter().all(|&t| t) {
            break;
        }
        let Some(idx) = (0..fleet.len())
            .filter(|&i| active[i])
            .min_by_key(|&i| (fleet[i].free_at(), i))
        else {
            break;
        };

        let mut best: Option<(u64, RideId)> = None;
        for ride in problem.rides() {
            if taken[ride.id()] {
                continue;
            }
            let leg = plan_leg(&fleet[idx], ride);
            if leg.finish > ride.latest_finish() {
                continue;
            }
            let rank = space_time_distance(
                fleet[idx].location(),
                fleet[idx].free_at(),
                ride.start(),
                ride.earliest_start(),
            );
            if best.map_or(true, |b| (rank, ride.id()) < b) {
                best = Some((rank, ride.id()));
            }
        }

        match best {
            None => active[idx] = false,
            Some((_, ride_id)) => {
                let ride = &problem.rides()[ride_id];
                let arrival = plan_leg(&fleet[idx], ride).arrival;
                fleet[idx].assign(ride, arrival);
                taken[ride_id] = true;
                if fleet[idx].free_at() >= problem.horizon() {
                    active[idx] = false;
                }
            }
        }
    }

    fleet.iter().map(|v| v.itinerary().to_vec()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn greedy_schedules_are_valid(
        seed in any::<u64>(),
        vehicles in 1..8usize,
        rides in 0..60usize,
        steps in 1..400u64,
    ) {
        let problem = instance(seed, vehicles, rides, steps);
        let solution = Strategy::Greedy.solve(&problem);
        assert_schedule_holds(&problem, &solution)?;
    }

    #[test]
    fn earliest_start_schedules_are_valid(
        seed in any::<u64>(),
        vehicles in 1..8usize,
        rides in 0..60usize,
    ) {
        let problem = instance(seed, vehicles, rides, 200);
        let solution = Strategy::EarliestStart.solve(&problem);
        assert_schedule_holds(&problem, &solution)?;
        prop_assert!(solution.vehicles().iter().all(|v| v.itinerary().len() <= 1));
    }

    #[test]
    fn greedy_matches_direct_scan(
        seed in any::<u64>(),
        vehicles in 1..6usize,
        rides in 0..40usize,
        steps in 1..300u64,
    ) {
        let problem = instance(seed, vehicles, rides, steps);
        let solution = Strategy::Greedy.solve(&problem);
        let itineraries: Vec<Vec<RideId>> =
            solution.itineraries().map(<[RideId]>::to_vec).collect();
        prop_assert_eq!(itineraries, scan_dispatch(&problem));
    }

    #[test]
    fn greedy_is_deterministic(seed in any::<u64>()) {
        let problem = instance(seed, 4, 40, 300);
        prop_assert_eq!(Strategy::Greedy.solve(&problem), Strategy::Greedy.solve(&problem));
    }
}
