use thiserror::Error;

/// Errors that can occur when validating global search parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("iterations and generations must be at least 1")]
    Iterations,

    #[error("initial_temperature must be finite and positive")]
    Temperature,

    #[error("cooling_rate must lie in (0, 1]")]
    CoolingRate,

    #[error("step must be positive with a finite range [-step, step]")]
    Step,

    #[error("population_size must be at least 2")]
    PopulationSize,

    #[error("mutation_rate must lie in [0, 1]")]
    MutationRate,

    #[error("mutation_scale must be non-negative with a finite range [-scale, scale]")]
    MutationScale,

    #[error("swarm_size must be at least 1")]
    SwarmSize,

    #[error("inertia, cognitive and social coefficients must be finite and non-negative")]
    Coefficient,
}

/// Parameters for uniform random search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSearch {
    iterations: usize,
}

impl Default for RandomSearch {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(1000).unwrap()
    }
}

impl RandomSearch {
    /// Creates random search parameters drawing `iterations` samples.
    ///
    /// # Errors
    ///
    /// Returns an error if `iterations` is zero.
    pub fn new(iterations: usize) -> Result<Self, ConfigError> {
        if iterations == 0 {
            return Err(ConfigError::Iterations);
        }
        Ok(Self { iterations })
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Parameters for simulated annealing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annealing {
    iterations: usize,
    initial_temperature: f64,
    cooling_rate: f64,
    step: f64,
}

impl Default for Annealing {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, 10.0, 0.95, 1.0).unwrap()
    }
}

impl Annealing {
    /// Creates annealing parameters.
    ///
    /// Each iteration perturbs every coordinate by a uniform draw from
    /// `[-step, step]`, then multiplies the temperature by `cooling_rate`.
    ///
    /// # Errors
    ///
    /// Returns an error if `iterations` is zero, the temperature is not
    /// finite and positive, `cooling_rate` lies outside `(0, 1]`, or `step`
    /// is not positive with `2 * step` finite.
    pub fn new(
        iterations: usize,
        initial_temperature: f64,
        cooling_rate: f64,
        step: f64,
    ) -> Result<Self, ConfigError> {
        if iterations == 0 {
            return Err(ConfigError::Iterations);
        }
        if !initial_temperature.is_finite() || initial_temperature <= 0.0 {
            return Err(ConfigError::Temperature);
        }
        if !(cooling_rate > 0.0 && cooling_rate <= 1.0) {
            return Err(ConfigError::CoolingRate);
        }
        if step <= 0.0 || !(2.0 * step).is_finite() {
            return Err(ConfigError::Step);
        }

        Ok(Self {
            iterations,
            initial_temperature,
            cooling_rate,
            step,
        })
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[must_use]
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    #[must_use]
    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Parameters for the genetic algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Genetic {
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    mutation_scale: f64,
}

impl Default for Genetic {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(50, 20, 0.1, 1.0).unwrap()
    }
}

impl Genetic {
    /// Creates genetic algorithm parameters.
    ///
    /// Each child coordinate is mutated with probability `mutation_rate` by
    /// a uniform draw from `[-mutation_scale, mutation_scale]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `population_size < 2`, `generations` is zero,
    /// `mutation_rate` lies outside `[0, 1]`, or `mutation_scale` is negative
    /// or has an infinite `2 * mutation_scale`.
    pub fn new(
        population_size: usize,
        generations: usize,
        mutation_rate: f64,
        mutation_scale: f64,
    ) -> Result<Self, ConfigError> {
        if population_size < 2 {
            return Err(ConfigError::PopulationSize);
        }
        if generations == 0 {
            return Err(ConfigError::Iterations);
        }
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(ConfigError::MutationRate);
        }
        if mutation_scale < 0.0 || !(2.0 * mutation_scale).is_finite() {
            return Err(ConfigError::MutationScale);
        }

        Ok(Self {
            population_size,
            generations,
            mutation_rate,
            mutation_scale,
        })
    }

    #[must_use]
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    #[must_use]
    pub fn generations(&self) -> usize {
        self.generations
    }

    #[must_use]
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    #[must_use]
    pub fn mutation_scale(&self) -> f64 {
        self.mutation_scale
    }
}

/// Parameters for particle swarm optimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swarm {
    swarm_size: usize,
    iterations: usize,
    inertia: f64,
    cognitive: f64,
    social: f64,
}

impl Default for Swarm {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(30, 50, 0.5, 1.5, 1.5).unwrap()
    }
}

impl Swarm {
    /// Creates particle swarm parameters.
    ///
    /// `inertia`, `cognitive` and `social` are the `w`, `c1` and `c2` of the
    /// velocity update `v ← w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `swarm_size` or `iterations` is zero, or any
    /// coefficient is negative or non-finite.
    pub fn new(
        swarm_size: usize,
        iterations: usize,
        inertia: f64,
        cognitive: f64,
        social: f64,
    ) -> Result<Self, ConfigError> {
        if swarm_size == 0 {
            return Err(ConfigError::SwarmSize);
        }
        if iterations == 0 {
            return Err(ConfigError::Iterations);
        }
        if [inertia, cognitive, social]
            .iter()
            .any(|c| !c.is_finite() || *c < 0.0)
        {
            return Err(ConfigError::Coefficient);
        }

        Ok(Self {
            swarm_size,
            iterations,
            inertia,
            cognitive,
            social,
        })
    }

    #[must_use]
    pub fn swarm_size(&self) -> usize {
        self.swarm_size
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[must_use]
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    #[must_use]
    pub fn cognitive(&self) -> f64 {
        self.cognitive
    }

    #[must_use]
    pub fn social(&self) -> f64 {
        self.social
    }
}
