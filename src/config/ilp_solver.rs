use std::str::FromStr;

use serde::Serialize;

use crate::types::err::ConfigError;

/// Backends used by the solver to optimise the ILP problem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IlpSolver {
    Gurobi,

    #[value(name = "lpsolve")]
    #[serde(rename = "lpsolve")]
    LpSolve,

    Cbc,

    #[default]
    Scip,
}

impl std::fmt::Display for IlpSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gurobi => write!(f, "gurobi"),
            Self::LpSolve => write!(f, "lpsolve"),
            Self::Cbc => write!(f, "cbc"),
            Self::Scip => write!(f, "scip"),
        }
    }
}

impl FromStr for IlpSolver {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gurobi" => Ok(Self::Gurobi),

            "lpsolve" => Ok(Self::LpSolve),

            "cbc" => Ok(Self::Cbc),

            "scip" => Ok(Self::Scip),

            unknown => Err(ConfigError::UnknownSolver(unknown.to_owned())),
        }
    }
}
