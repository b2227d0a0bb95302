use extremum_core::{
    Maximize,
    benchmarks::{six_peaks, six_peaks_ceiling},
};
use extremum_solvers::{
    global::{self, Method},
    local,
    runner::{Runner, Task},
};
use integration_tests::{seeded, square};

#[test]
fn six_peaks_results_are_in_range_and_in_the_box() {
    let bounds = square();

    for seed in 0..5 {
        for method in Method::defaults() {
            let solution = global::maximize_unobserved(method, &six_peaks, &bounds, &mut seeded(seed));

            assert!(bounds.contains(&solution.x), "{} seed {seed}", method.name());
            assert!(solution.objective > 0.0);
            assert!(solution.objective <= six_peaks_ceiling());
        }
    }
}

#[test]
fn identical_seeds_are_bit_identical() {
    let bounds = square();

    for method in Method::defaults() {
        let a = global::maximize_unobserved(method, &six_peaks, &bounds, &mut seeded(2024));
        let b = global::maximize_unobserved(method, &six_peaks, &bounds, &mut seeded(2024));

        assert_eq!(a.x[0].to_bits(), b.x[0].to_bits(), "{}", method.name());
        assert_eq!(a.x[1].to_bits(), b.x[1].to_bits(), "{}", method.name());
        assert_eq!(a.objective.to_bits(), b.objective.to_bits());
        assert_eq!(a.evaluations, b.evaluations);
    }
}

#[test]
fn runner_comparison_exports_as_json() {
    let comparison = Runner::with_global_defaults(square(), 42)
        .task(Task::Local {
            method: local::Method::COORDINATE_DESCENT,
            start: [0.5, 0.5],
        })
        .run::<Maximize, _>(&six_peaks)
        .unwrap();

    let json = serde_json::to_value(&comparison).unwrap();
    let entries = json["entries"].as_array().unwrap();

    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["name"], "random search");
    assert_eq!(entries[4]["name"], "coordinate descent");
    for (entry, original) in entries.iter().zip(&comparison.entries) {
        assert_eq!(entry["objective"].as_f64(), Some(original.objective));
        assert_eq!(entry["x"].as_array().map(Vec::len), Some(2));
    }
}

#[test]
fn local_solution_history_exports_as_json() {
    let solution = local::maximize_unobserved(
        local::Method::COORDINATE_DESCENT,
        &six_peaks,
        [0.5, 0.5],
        &local::Config::default(),
    )
    .unwrap();

    let json = serde_json::to_value(&solution).unwrap();

    assert_eq!(json["status"], "Converged");
    assert_eq!(
        json["history"].as_array().map(Vec::len),
        Some(solution.history.len())
    );
    assert_eq!(json["history"][0]["x"][0], 0.5);
}
