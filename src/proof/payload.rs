/*!
The schema of a solver payload, and its decoding.

Only the fields used to build a proof graph are read, and any other fields are ignored.
Each section of a solution is optional, and an absent section is distinct from an empty one.

```json
{
  "results": [
    {
      "solution": {
        "nodes":      [ { "index": 1, "atom": "p(a)" }, … ],
        "hypernodes": [ { "index": 10, "nodes": [1, 2] }, … ],
        "edges":      [ { "index": 99, "head": 10, "tail": 20 }, … ]
      }
    }
  ]
}
```
*/

use serde::Deserialize;

use crate::types::err::ParseError;

/// Index of a vertex (an entry of `nodes`).
pub type VertexIndex = i64;

/// Index of a hypernode (an entry of `hypernodes`).
/// Hypernode indices are distinct from vertex indices.
pub type HypernodeIndex = i64;

/// Index of an edge (an entry of `edges`).
pub type EdgeIndex = i64;

#[derive(Clone, Debug, Default, Deserialize)]
struct Payload {
    #[serde(default)]
    results: Option<Vec<SolverResult>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct SolverResult {
    #[serde(default)]
    solution: Option<SolutionView>,
}

/// The solution of a result, with each section present only if the solver wrote it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SolutionView {
    #[serde(default)]
    pub nodes: Option<Vec<Node>>,

    #[serde(default)]
    pub hypernodes: Option<Vec<Hypernode>>,

    #[serde(default)]
    pub edges: Option<Vec<Edge>>,
}

/// A vertex, labelled by an atom.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Node {
    pub index: VertexIndex,
    pub atom: String,
}

/// A named group of vertices.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Hypernode {
    pub index: HypernodeIndex,
    pub nodes: Vec<VertexIndex>,
}

/// An edge between two hypernodes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Edge {
    pub index: EdgeIndex,
    pub head: HypernodeIndex,
    pub tail: HypernodeIndex,
}

/// The outcome of decoding a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// No results were reported, or the first result has no solution.
    NoSolution,

    /// The solution of the first result.
    Solution(SolutionView),
}

/// Decodes `text` to the solution of its first result, if any.
///
/// Only text which is not JSON, or whose fields have unexpected types, is an error.
pub fn decode(text: &str) -> Result<Decoded, ParseError> {
    let payload: Payload = serde_json::from_str(text)?;

    let solution = payload
        .results
        .and_then(|results| results.into_iter().next())
        .and_then(|result| result.solution);

    match solution {
        Some(solution) => Ok(Decoded::Solution(solution)),
        None => Ok(Decoded::NoSolution),
    }
}
