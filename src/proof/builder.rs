use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    types::err::ParseError,
};

use super::{
    graph::{DirectedHypergraph, ProofGraph},
    payload::{decode, Decoded, Edge, Hypernode, HypernodeIndex, SolutionView, VertexIndex},
};

/// Members of each hypernode, by hypernode index.
///
/// A later hypernode with the same index replaces an earlier one.
pub struct HypernodeLookup {
    members: HashMap<HypernodeIndex, Vec<VertexIndex>>,
}

impl HypernodeLookup {
    pub fn new(hypernodes: &[Hypernode]) -> Self {
        let members = hypernodes
            .iter()
            .map(|hypernode| (hypernode.index, hypernode.nodes.clone()))
            .collect();
        HypernodeLookup { members }
    }

    pub fn members(&self, index: HypernodeIndex) -> Option<&[VertexIndex]> {
        self.members.get(&index).map(Vec::as_slice)
    }

    /// The head and tail members of `edge`, or None if either hypernode is unknown.
    ///
    /// Solver output may reference hypernodes pruned from the solution, and such edges are skipped rather than treated as errors.
    pub fn resolve(&self, edge: &Edge) -> Option<(&[VertexIndex], &[VertexIndex])> {
        Some((self.members(edge.head)?, self.members(edge.tail)?))
    }
}

/// Builds a [ProofGraph] from the text of a solver payload.
///
/// See [build_into].
pub fn build_proof_graph(text: &str) -> Result<ProofGraph, ParseError> {
    build_into(text, ProofGraph::default())
}

/// Adds the proof graph of the first solution in `text` to `graph`.
///
/// - Each node of the solution is added as a vertex, labelled with its atom.
/// - Each edge is added as one hyperarc per member of its tail hypernode, each with the full head and the index of the edge as a label.
///   A tail with no members adds nothing.
/// - Edges with an unknown head or tail hypernode are skipped.
///
/// Sections are read in order (nodes, hypernodes, edges) and reading stops at the first absent section.
/// So, a payload with no solution results in `graph` unchanged.
///
/// The only error is a [ParseError], if `text` cannot be decoded.
pub fn build_into<G: DirectedHypergraph>(text: &str, mut graph: G) -> Result<G, ParseError> {
    match decode(text)? {
        Decoded::NoSolution => {
            log::info!(target: targets::PROOF_GRAPH, "No solution");
        }

        Decoded::Solution(solution) => add_solution(&solution, &mut graph),
    }

    Ok(graph)
}

fn add_solution<G: DirectedHypergraph>(solution: &SolutionView, graph: &mut G) {
    let Some(nodes) = &solution.nodes else {
        return;
    };
    for node in nodes {
        graph.add_vertex(node.index, node.atom.clone());
    }

    let Some(hypernodes) = &solution.hypernodes else {
        return;
    };
    let lookup = HypernodeLookup::new(hypernodes);

    let Some(edges) = &solution.edges else {
        return;
    };

    let mut skipped = 0;
    for edge in edges {
        let Some((head, tail)) = lookup.resolve(edge) else {
            log::debug!(target: targets::PROOF_GRAPH, "Skipping edge {} ({} -> {})", edge.index, edge.head, edge.tail);
            skipped += 1;
            continue;
        };

        let label = edge.index.to_string();
        for vertex in tail {
            graph.add_hyperarc(head.to_vec(), *vertex, label.clone());
        }
    }

    log::info!(target: targets::PROOF_GRAPH, "Added {} nodes and {} edges, skipped {skipped}", nodes.len(), edges.len() - skipped);
}
