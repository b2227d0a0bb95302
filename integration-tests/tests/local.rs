use approx::assert_relative_eq;

use extremum_core::{Bounds, Maximize, benchmarks::two_hills};
use extremum_observers::Stall;
use extremum_solvers::{
    constrained::feasible_start,
    local::{self, Config, Method, Status},
};

#[test]
fn coordinate_descent_and_newton_reach_the_tall_hill() {
    for method in [Method::COORDINATE_DESCENT, Method::NEWTON] {
        let solution =
            local::maximize_unobserved(method, &two_hills, [0.0, 0.0], &Config::default())
                .unwrap();

        assert_eq!(solution.status, Status::Converged, "{method:?}");
        assert_relative_eq!(solution.x[0], 1.0, epsilon = 0.15);
        assert_relative_eq!(solution.x[1], 1.0, epsilon = 0.15);
        assert_relative_eq!(solution.objective, two_hills(&solution.x));
    }
}

#[test]
fn stall_observer_ends_a_slow_gradient_climb() {
    let config = Config::new(1e-12, 100_000).unwrap();

    let solution = local::maximize(
        Method::GRADIENT_DESCENT,
        &two_hills,
        [0.0, 0.0],
        &config,
        Stall::<Maximize>::new(5, 1e-6),
    )
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert!(solution.iters < 100_000);
}

#[test]
fn feasible_start_feeds_a_local_search() {
    // Any point with x + y > 1 will do.
    let above = |x: &[f64; 2]| x[0] + x[1] - 1.0;
    let bounds = Bounds::uniform(-1.0, 2.0).unwrap();

    let start = feasible_start(&above, &bounds, 10).unwrap();
    assert!(above(&start) > 0.0);

    let solution =
        local::maximize_unobserved(Method::COORDINATE_DESCENT, &two_hills, start, &Config::default())
            .unwrap();
    assert!(solution.objective >= two_hills(&start));
}
