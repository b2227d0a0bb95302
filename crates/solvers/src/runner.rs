//! Runs several optimizers on one objective and compares the results.
//!
//! ```
//! use extremum_core::{Bounds, Maximize, benchmarks::six_peaks};
//! use extremum_solvers::{global, local, runner::{Runner, Task}};
//!
//! let bounds = Bounds::uniform(-10.0, 10.0).unwrap();
//! let comparison = Runner::new(bounds, 42)
//!     .task(Task::Global(global::Method::Swarm(global::Swarm::default())))
//!     .task(Task::Local { method: local::Method::NEWTON, start: [1.0, 1.0] })
//!     .run::<Maximize, _>(&six_peaks)
//!     .unwrap();
//!
//! assert_eq!(comparison.entries.len(), 2);
//! assert!(comparison.best().is_some());
//! ```

mod comparison;


pub use comparison::{Comparison, Entry};

use extremum_core::{Bounds, Goal, Objective};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{global, local};

/// A single optimizer run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Task {
    /// A global strategy searching the runner's bounds.
    Global(global::Method),

    /// A local method started from `start`.
    Local {
        method: local::Method,
        start: [f64; 2],
    },
}

impl Task {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Task::Global(method) => method.name(),
            Task::Local { method, .. } => method.name(),
        }
    }
}

/// Runs a list of tasks in order against one objective.
///
/// Every task draws its own generator seed from a master generator seeded
/// with the runner seed, so a task's result depends only on the seed and its
/// position in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    bounds: Bounds<2>,
    seed: u64,
    local_config: local::Config,
    tasks: Vec<Task>,
}

impl Runner {
    /// Creates an empty runner over `bounds`.
    #[must_use]
    pub fn new(bounds: Bounds<2>, seed: u64) -> Self {
        Self {
            bounds,
            seed,
            local_config: local::Config::default(),
            tasks: Vec::new(),
        }
    }

    /// Creates a runner with every global strategy at its defaults.
    #[must_use]
    pub fn with_global_defaults(bounds: Bounds<2>, seed: u64) -> Self {
        global::Method::defaults()
            .into_iter()
            .fold(Self::new(bounds, seed), |runner, method| {
                runner.task(Task::Global(method))
            })
    }

    /// Appends a task.
    #[must_use]
    pub fn task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Sets the configuration shared by all local tasks.
    #[must_use]
    pub fn with_local_config(mut self, config: local::Config) -> Self {
        self.local_config = config;
        self
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Runs every task in the direction of `G`.
    ///
    /// # Errors
    ///
    /// Returns the first [`local::Error`] raised by a local task. Global
    /// tasks cannot fail.
    pub fn run<G, O>(&self, objective: &O) -> Result<Comparison, local::Error>
    where
        G: Goal,
        O: Objective<2> + ?Sized,
    {
        let mut master = StdRng::seed_from_u64(self.seed);
        let mut entries = Vec::with_capacity(self.tasks.len());

        for task in &self.tasks {
            let task_seed: u64 = master.random();

            let entry = match *task {
                Task::Global(method) => {
                    let mut rng = StdRng::seed_from_u64(task_seed);
                    let solution =
                        global::search::<G, _, _, _, 2>(method, objective, &self.bounds, &mut rng, ());
                    Entry {
                        name: task.name(),
                        x: solution.x,
                        objective: solution.objective,
                        evaluations: solution.evaluations,
                        iters: solution.iters,
                    }
                }
                Task::Local { method, start } => {
                    let solution = local::search::<G, _, _>(
                        method,
                        objective,
                        start,
                        &self.local_config,
                        (),
                    )?;
                    Entry {
                        name: task.name(),
                        x: solution.x,
                        objective: solution.objective,
                        evaluations: solution.evaluations,
                        iters: solution.iters,
                    }
                }
            };

            tracing::info!(
                task = entry.name,
                x = ?entry.x,
                objective = entry.objective,
                evaluations = entry.evaluations,
                "task finished"
            );
            entries.push(entry);
        }

        Ok(Comparison::new::<G>(entries))
    }
}
