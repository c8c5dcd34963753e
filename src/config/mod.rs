/*!
Configuration of a solver run.

A [RunConfig] is a plain value, built fresh (or cloned) for each run and never stored by a [Session](crate::session::Session).

The options mirror the command line of the solver:
- The LHS generator, ILP converter, and ILP solver are combined into the `-c` option.
- Pseudo-positive observations and perturbation are toggles.
- A thread limit is passed with `-P`.

The timeout is not passed to the solver, and instead bounds how long the solver process is waited on.

```rust
# use david_link::config::{IlpSolver, RunConfig};
# use std::time::Duration;
let config = RunConfig::default()
    .with_solver("cbc".parse::<IlpSolver>().unwrap())
    .with_timeout(Duration::from_secs(30));

assert_eq!(config.engine_spec(), "astar,weighted,cbc");
```
*/

use std::time::Duration;

mod lhs_generator;
pub use lhs_generator::LhsGenerator;

mod ilp_converter;
pub use ilp_converter::IlpConverter;

mod ilp_solver;
pub use ilp_solver::IlpSolver;

pub mod defaults;

use crate::types::err::ConfigError;

/// The configuration of a single run of the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// How to generate the latent hypotheses set.
    pub generator: LhsGenerator,

    /// How to convert the latent hypotheses set to an ILP problem.
    pub converter: IlpConverter,

    /// Which ILP solver to use.
    pub solver: IlpSolver,

    /// Whether pseudo-positive observations are enabled.
    pub pseudo_positive: bool,

    /// Whether the objective is perturbed, to break ties between solutions.
    pub perturbation: bool,

    /// How long to wait for the solver, if at all.
    pub timeout: Option<Duration>,

    /// The maximum number of threads the solver may use.
    pub max_threads: Option<u32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            generator: LhsGenerator::default(),
            converter: IlpConverter::default(),
            solver: IlpSolver::default(),
            pseudo_positive: defaults::PSEUDO_POSITIVE,
            perturbation: defaults::PERTURBATION,
            timeout: None,
            max_threads: None,
        }
    }
}

impl RunConfig {
    pub fn with_generator(mut self, generator: LhsGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_converter(mut self, converter: IlpConverter) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_solver(mut self, solver: IlpSolver) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_pseudo_positive(mut self, enabled: bool) -> Self {
        self.pseudo_positive = enabled;
        self
    }

    pub fn with_perturbation(mut self, enabled: bool) -> Self {
        self.perturbation = enabled;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_threads(mut self, threads: u32) -> Self {
        self.max_threads = Some(threads);
        self
    }

    /// The value of the `-c` option, e.g. `astar,weighted,scip`.
    pub fn engine_spec(&self) -> String {
        format!("{},{},{}", self.generator, self.converter, self.solver)
    }

    /// Checks for values which the types permit but the solver does not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }
}
