use std::str::FromStr;

use serde::Serialize;

use crate::types::err::ConfigError;

/// Ways to convert a latent hypotheses set into an integer linear programming problem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IlpConverter {
    /// Weighted abduction, where the cost of an observation is passed to its hypotheses.
    #[default]
    Weighted,

    /// Etcetera abduction, where costs are given as probabilities of etcetera literals.
    Etcetera,
}

impl std::fmt::Display for IlpConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weighted => write!(f, "weighted"),
            Self::Etcetera => write!(f, "etcetera"),
        }
    }
}

impl FromStr for IlpConverter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weighted" => Ok(Self::Weighted),

            "etcetera" => Ok(Self::Etcetera),

            unknown => Err(ConfigError::UnknownConverter(unknown.to_owned())),
        }
    }
}
