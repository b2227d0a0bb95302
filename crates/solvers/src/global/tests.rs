use std::cell::RefCell;

use rand::{SeedableRng, rngs::StdRng};

use extremum_core::{
    Bounds,
    benchmarks::{quadratic, six_peaks, six_peaks_ceiling},
};

use super::{
    Action, Annealing, ConfigError, Event, Genetic, Method, RandomSearch, Status, Swarm, maximize,
    maximize_unobserved, minimize_unobserved,
};

fn lab_box() -> Bounds<2> {
    Bounds::uniform(-10.0, 10.0).unwrap()
}

#[test]
fn every_method_stays_in_the_box_and_the_codomain() {
    let bounds = lab_box();

    for (seed, method) in Method::defaults().into_iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let solution = maximize_unobserved(method, &six_peaks, &bounds, &mut rng);

        assert_eq!(solution.status, Status::Completed, "{}", method.name());
        assert!(bounds.contains(&solution.x), "{}: {:?}", method.name(), solution.x);
        assert!(solution.objective > 0.0);
        assert!(solution.objective <= six_peaks_ceiling());
        assert_eq!(solution.objective, six_peaks(&solution.x));
    }
}

#[test]
fn identical_seeds_give_identical_results() {
    let bounds = lab_box();

    for method in Method::defaults() {
        let first = maximize_unobserved(method, &six_peaks, &bounds, &mut StdRng::seed_from_u64(7));
        let second =
            maximize_unobserved(method, &six_peaks, &bounds, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second, "{}", method.name());
    }
}

#[test]
fn evaluation_budgets() {
    let bounds = lab_box();
    let mut rng = StdRng::seed_from_u64(1);

    let expected = [
        (1000, 1000), // one per sample
        (1001, 1000), // start plus one per iteration
        (550, 20),    // 50 initial plus 25 children per generation
        (1530, 50),   // 30 initial plus 30 moves per iteration
    ];
    for (method, (evaluations, iters)) in Method::defaults().into_iter().zip(expected) {
        let solution = maximize_unobserved(method, &six_peaks, &bounds, &mut rng);
        assert_eq!(solution.evaluations, evaluations, "{}", method.name());
        assert_eq!(solution.iters, iters, "{}", method.name());
    }
}

#[test]
fn random_search_finds_the_central_peak() {
    let mut rng = StdRng::seed_from_u64(42);
    let method = Method::RandomSearch(RandomSearch::default());

    let solution = maximize_unobserved(method, &six_peaks, &lab_box(), &mut rng);

    // Beats every outer peak, whose heights are at most 3.2 plus a small tail.
    assert!(solution.objective > 5.0, "{solution:?}");
}

#[test]
fn swarm_minimizes_a_bowl() {
    let mut rng = StdRng::seed_from_u64(3);
    let method = Method::Swarm(Swarm::default());

    let solution = minimize_unobserved(method, &quadratic::<2>, &lab_box(), &mut rng);

    assert!(solution.objective < 0.1, "{solution:?}");
}

#[test]
fn works_in_three_dimensions() {
    let bounds = Bounds::uniform(-5.0, 5.0).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    for method in Method::defaults() {
        let solution = minimize_unobserved(method, &quadratic::<3>, &bounds, &mut rng);
        assert!(bounds.contains(&solution.x), "{}", method.name());
        assert_eq!(solution.objective, quadratic(&solution.x));
    }
}

#[test]
fn best_so_far_never_gets_worse() {
    let bounds = lab_box();

    for method in Method::defaults() {
        let mut values = Vec::new();
        let observer = |event: &Event<2>| {
            values.push(event.best.value);
            None
        };
        let solution = maximize(
            method,
            &six_peaks,
            &bounds,
            &mut StdRng::seed_from_u64(5),
            observer,
        );

        assert_eq!(values.len(), solution.iters, "{}", method.name());
        assert!(values.windows(2).all(|w| w[1] >= w[0]), "{}", method.name());
        assert_eq!(values.last().copied(), Some(solution.objective));
    }
}

#[test]
fn observer_can_stop_early() {
    let bounds = lab_box();

    for method in Method::defaults() {
        let observer = |event: &Event<2>| (event.iter == 4).then_some(Action::StopEarly);
        let solution = maximize(
            method,
            &six_peaks,
            &bounds,
            &mut StdRng::seed_from_u64(9),
            observer,
        );

        assert_eq!(solution.status, Status::StoppedByObserver, "{}", method.name());
        assert_eq!(solution.iters, 4, "{}", method.name());
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    assert_eq!(RandomSearch::new(0), Err(ConfigError::Iterations));
    assert_eq!(
        Annealing::new(10, 0.0, 0.9, 1.0),
        Err(ConfigError::Temperature)
    );
    assert_eq!(
        Annealing::new(10, 1.0, 1.5, 1.0),
        Err(ConfigError::CoolingRate)
    );
    assert_eq!(Annealing::new(10, 1.0, 0.9, 0.0), Err(ConfigError::Step));
    assert_eq!(Genetic::new(1, 10, 0.1, 1.0), Err(ConfigError::PopulationSize));
    assert_eq!(Genetic::new(10, 10, 1.1, 1.0), Err(ConfigError::MutationRate));
    assert_eq!(Swarm::new(0, 10, 0.5, 1.5, 1.5), Err(ConfigError::SwarmSize));
    assert_eq!(
        Swarm::new(10, 10, f64::NAN, 1.5, 1.5),
        Err(ConfigError::Coefficient)
    );
}

#[test]
fn every_budget_must_be_at_least_one() {
    assert_eq!(RandomSearch::new(0), Err(ConfigError::Iterations));
    assert_eq!(Annealing::new(0, 10.0, 0.95, 1.0), Err(ConfigError::Iterations));
    assert_eq!(Genetic::new(50, 0, 0.1, 1.0), Err(ConfigError::Iterations));
    assert_eq!(Swarm::new(30, 0, 0.5, 1.5, 1.5), Err(ConfigError::Iterations));
}

#[test]
fn step_ranges_must_stay_finite() {
    assert_eq!(
        Annealing::new(10, 1.0, 0.9, f64::MAX),
        Err(ConfigError::Step)
    );
    assert_eq!(
        Annealing::new(10, 1.0, 0.9, f64::NAN),
        Err(ConfigError::Step)
    );
    assert_eq!(
        Genetic::new(10, 10, 0.1, f64::MAX),
        Err(ConfigError::MutationScale)
    );
    assert_eq!(
        Genetic::new(10, 10, 0.1, f64::INFINITY),
        Err(ConfigError::MutationScale)
    );
}

#[test]
fn huge_but_valid_ranges_run() {
    let bounds = Bounds::<2>::uniform(-1e307, 1e307).unwrap();
    let methods = [
        Method::RandomSearch(RandomSearch::new(10).unwrap()),
        Method::Annealing(Annealing::new(10, 10.0, 0.95, 1e307).unwrap()),
        Method::Genetic(Genetic::new(4, 3, 1.0, 1e307).unwrap()),
        Method::Swarm(Swarm::new(4, 3, 0.5, 1.5, 1.5).unwrap()),
    ];

    for method in methods {
        let mut rng = StdRng::seed_from_u64(0);
        let solution = minimize_unobserved(method, &quadratic::<2>, &bounds, &mut rng);
        assert_eq!(solution.status, Status::Completed, "{}", method.name());
        assert!(bounds.contains(&solution.x), "{}", method.name());
    }
}

#[test]
fn annealing_accepts_equal_moves_after_the_temperature_underflows() {
    // The temperature reaches zero after a few dozen iterations. On a flat
    // objective every proposal must still be accepted, so each evaluated
    // point is within one step of the previous one.
    let visited = RefCell::new(Vec::new());
    let flat = |x: &[f64; 1]| {
        visited.borrow_mut().push(x[0]);
        1.0
    };
    let method = Method::Annealing(Annealing::new(200, 10.0, 1e-10, 1.0).unwrap());
    let bounds = Bounds::<1>::uniform(-100.0, 100.0).unwrap();

    minimize_unobserved(method, &flat, &bounds, &mut StdRng::seed_from_u64(17));

    let visited = visited.into_inner();
    assert_eq!(visited.len(), 201);
    assert!(
        visited.windows(2).all(|w| (w[1] - w[0]).abs() <= 1.0 + 1e-9),
        "a proposal was rejected"
    );
}
