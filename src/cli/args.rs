use std::path::PathBuf;

use clap::Parser;
use david_link::config::{IlpConverter, IlpSolver, LhsGenerator, RunConfig};

/// Explains observations with Open-David and prints the proof graph of the best hypothesis
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the Open-David executable
    #[arg(short, long)]
    pub david: PathBuf,

    /// The knowledge base file
    #[arg(short, long)]
    pub knowledge_base: PathBuf,

    /// An observed atom, may be given many times
    #[arg(short, long = "observe", required = true)]
    pub observations: Vec<String>,

    /// An atom any solution hypothesis must contain, may be given many times
    #[arg(short, long = "require")]
    pub required: Vec<String>,

    /// How to generate the latent hypotheses set
    #[arg(long, default_value_t, value_enum)]
    pub generator: LhsGenerator,

    /// How to convert the latent hypotheses set to an ILP problem
    #[arg(long, default_value_t, value_enum)]
    pub converter: IlpConverter,

    /// Which ILP solver to use
    #[arg(long, default_value_t, value_enum)]
    pub solver: IlpSolver,

    /// Disable pseudo-positive observations
    #[arg(long, default_value_t = false)]
    pub no_pseudo_positive: bool,

    /// Disable perturbation of the objective
    #[arg(long, default_value_t = false)]
    pub no_perturbation: bool,

    /// Time limit for the solver, in seconds
    #[arg(short, long, value_parser = |seconds: &str| seconds.parse().map(std::time::Duration::from_secs))]
    pub timeout: Option<std::time::Duration>,

    /// The maximum number of threads for the solver
    #[arg(short = 'P', long)]
    pub threads: Option<u32>,

    /// Print the output of the solver, rather than a proof graph
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

impl Args {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            generator: self.generator,
            converter: self.converter,
            solver: self.solver,
            pseudo_positive: !self.no_pseudo_positive,
            perturbation: !self.no_perturbation,
            timeout: self.timeout,
            max_threads: self.threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal() {
        let args = Args::try_parse_from([
            "david_link",
            "--david",
            "/usr/local/bin/david",
            "--knowledge-base",
            "kb.dav",
            "--observe",
            "vote(3,2)",
        ])
        .unwrap();

        assert_eq!(args.observations, vec!["vote(3,2)"]);
        assert!(args.required.is_empty());
        assert_eq!(args.run_config(), RunConfig::default());
    }

    #[test]
    fn all_options() {
        let args = Args::try_parse_from([
            "david_link",
            "-d",
            "david",
            "-k",
            "kb.dav",
            "-o",
            "a",
            "-o",
            "b",
            "-r",
            "c",
            "--generator",
            "naive",
            "--converter",
            "etcetera",
            "--solver",
            "lpsolve",
            "--no-pseudo-positive",
            "--no-perturbation",
            "--timeout",
            "30",
            "-P",
            "4",
        ])
        .unwrap();

        assert_eq!(args.observations, vec!["a", "b"]);
        assert_eq!(args.required, vec!["c"]);

        let config = args.run_config();
        assert_eq!(config.engine_spec(), "naive,etcetera,lpsolve");
        assert!(!config.pseudo_positive);
        assert!(!config.perturbation);
        assert_eq!(config.timeout, Some(std::time::Duration::from_secs(30)));
        assert_eq!(config.max_threads, Some(4));
    }

    #[test]
    fn observation_required() {
        assert!(Args::try_parse_from(["david_link", "-d", "david", "-k", "kb.dav"]).is_err());
    }

    #[test]
    fn unknown_solver() {
        assert!(Args::try_parse_from([
            "david_link",
            "-d",
            "david",
            "-k",
            "kb.dav",
            "-o",
            "a",
            "--solver",
            "cplex"
        ])
        .is_err());
    }
}
