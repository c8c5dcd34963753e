/*!
Proof graphs, from the output of the solver.

The solver reports a solution as flat lists of indexed nodes, hypernodes, and edges.
A proof graph is reconstructed from these lists by:
- Adding each node as a vertex, labelled with its atom.
- Resolving the head and tail of each edge to the members of the corresponding hypernodes.
- Adding one hyperarc for each member of the tail, so an edge into a hypernode with *n* members becomes *n* hyperarcs sharing a label.

```rust
# use david_link::proof::build_proof_graph;
let payload = r#"{"results": [{"solution": {
    "nodes": [{"index": 1, "atom": "p"}, {"index": 2, "atom": "q"}, {"index": 3, "atom": "r"}],
    "hypernodes": [{"index": 10, "nodes": [1]}, {"index": 20, "nodes": [2, 3]}],
    "edges": [{"index": 99, "head": 10, "tail": 20}]
}}]}"#;

let graph = build_proof_graph(payload).unwrap();
assert_eq!(graph.vertex_count(), 3);
assert_eq!(graph.hyperarcs_labelled("99").count(), 2);
```
*/

mod builder;
pub use builder::{build_into, build_proof_graph, HypernodeLookup};

pub mod graph;
pub use graph::{DirectedHypergraph, Hyperarc, ProofGraph};

pub mod payload;
