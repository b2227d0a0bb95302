use std::cell::Cell;

use approx::assert_relative_eq;

use extremum_core::benchmarks::{half_plane_constraint, line_constraint, valley};

use super::{
    Action, Config, Error, Event, Method, Status, maximize_unobserved, minimize,
    minimize_unobserved,
};

#[test]
fn penalty_drives_the_residual_down() {
    let mut residuals = Vec::new();
    let mut coefficients = Vec::new();
    let observer = |event: &Event| {
        residuals.push(event.residual.abs());
        coefficients.push(event.coefficient);
        None
    };

    let solution = minimize(
        Method::PENALTY,
        &valley,
        &line_constraint,
        [0.0, 0.0],
        &Config::default(),
        observer,
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.outer_iters, 4);
    assert!(residuals.windows(2).all(|w| w[1] < w[0]), "{residuals:?}");
    assert!(solution.residual.abs() < 1e-6);
    assert_eq!(coefficients, [1.0, 10.0, 100.0, 1000.0]);

    assert_relative_eq!(solution.x[0], 1.03, epsilon = 1e-9);
    assert_relative_eq!(solution.x[1], 0.97, epsilon = 1e-9);
    assert_relative_eq!(solution.objective, valley(&solution.x));
}

#[test]
fn barrier_never_evaluates_outside_the_feasible_region() {
    let infeasible_calls = Cell::new(0);
    let watched = |x: &[f64; 2]| {
        if half_plane_constraint(x) <= 0.0 {
            infeasible_calls.set(infeasible_calls.get() + 1);
        }
        valley(x)
    };

    let solution = minimize_unobserved(
        Method::BARRIER,
        &watched,
        &half_plane_constraint,
        [0.0, 0.0],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(infeasible_calls.get(), 0);
    assert_eq!(solution.status, Status::Converged);
    assert!(solution.coefficient < 1e-6);
    assert!(solution.history.iter().all(|s| half_plane_constraint(&s.x) > 0.0));
}

#[test]
fn barrier_approaches_an_active_constraint_from_inside() {
    // Unconstrained minimum at (3, 3); the constrained one is at (1, 1).
    let bowl = |x: &[f64; 2]| (x[0] - 3.0).powi(2) + (x[1] - 3.0).powi(2);
    let below_line = |x: &[f64; 2]| 2.0 - x[0] - x[1];

    let solution = minimize_unobserved(
        Method::BARRIER,
        &bowl,
        &below_line,
        [0.0, 0.0],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.residual > 0.0);
    assert!((solution.x[0] - 1.0).abs() < 0.05, "x = {:?}", solution.x);
    assert!((solution.x[1] - 1.0).abs() < 0.05, "x = {:?}", solution.x);
}

#[test]
fn barrier_rejects_an_infeasible_start() {
    let result = minimize_unobserved(
        Method::BARRIER,
        &valley,
        &half_plane_constraint,
        [2.0, 1.0],
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::InfeasibleStart { .. })));
}

#[test]
fn penalty_maximization_uses_the_negated_objective() {
    // Maximize -(x² + y²) on the line x + y = 2: optimum at (1, 1).
    let dome = |x: &[f64; 2]| -(x[0] * x[0] + x[1] * x[1]);

    let solution = maximize_unobserved(
        Method::PENALTY,
        &dome,
        &line_constraint,
        [0.0, 0.0],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!((solution.x[0] - 1.0).abs() < 0.05, "x = {:?}", solution.x);
    assert!((solution.x[1] - 1.0).abs() < 0.05, "x = {:?}", solution.x);
}

#[test]
fn history_records_start_and_inner_iterates() {
    let solution = minimize_unobserved(
        Method::PENALTY,
        &valley,
        &line_constraint,
        [0.0, 0.0],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(solution.history[0].x, [0.0, 0.0]);
    assert_eq!(solution.history.last().unwrap().x, solution.x);
    assert!(solution.history.len() > solution.outer_iters);
    for sample in &solution.history {
        assert_relative_eq!(sample.value, valley(&sample.x));
    }
}

#[test]
fn observer_can_stop_after_the_first_outer_iteration() {
    let observer = |_: &Event| Some(Action::StopEarly);

    let solution = minimize(
        Method::PENALTY,
        &valley,
        &line_constraint,
        [0.0, 0.0],
        &Config::default(),
        observer,
    )
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.outer_iters, 1);
    assert_relative_eq!(solution.coefficient, 1.0);
}

#[test]
fn outer_cap_reports_max_iters() {
    let config = Config::new(0.01, 1e-6, 1.0, 2, 100).unwrap();

    let solution =
        minimize_unobserved(Method::PENALTY, &valley, &line_constraint, [0.0, 0.0], &config)
            .unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.outer_iters, 2);
    assert_relative_eq!(solution.coefficient, 10.0);
}

#[test]
fn invalid_factors_are_rejected() {
    let config = Config::default();

    for method in [
        Method::Penalty { factor: 0.5 },
        Method::Barrier { factor: 1.5 },
        Method::Barrier { factor: 0.0 },
    ] {
        let result = minimize_unobserved(method, &valley, &line_constraint, [0.0, 0.0], &config);
        assert!(
            matches!(result, Err(Error::InvalidFactor { .. })),
            "{method:?}"
        );
    }

    assert!(Config::new(0.0, 1e-6, 1.0, 10, 10).is_err());
    assert!(Config::new(0.01, 1e-6, -1.0, 10, 10).is_err());
}
