use std::str::FromStr;

use serde::Serialize;

use crate::types::err::ConfigError;

/// Ways to generate the latent hypotheses set (LHS) from observations and the knowledge base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LhsGenerator {
    /// Apply every applicable backward chaining step.
    Naive,

    /// As naive, but with a simple bound on the depth of chaining.
    Simple,

    /// Restrict chaining to steps on some path between observations, found by A* search.
    #[default]
    #[value(name = "astar")]
    #[serde(rename = "astar")]
    AStar,
}

impl std::fmt::Display for LhsGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Naive => write!(f, "naive"),
            Self::Simple => write!(f, "simple"),
            Self::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for LhsGenerator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Self::Naive),

            "simple" => Ok(Self::Simple),

            "astar" => Ok(Self::AStar),

            unknown => Err(ConfigError::UnknownGenerator(unknown.to_owned())),
        }
    }
}
