/*!
Directed hypergraphs.

A hyperarc has a head of any number of vertices, and a tail of exactly one vertex.
Vertices are identified by the index given by the solver, and labelled with an atom.

[DirectedHypergraph] is the interface the [builder](crate::proof::build_into) writes to, and [ProofGraph] the implementation provided by the library.
*/

use std::collections::BTreeMap;

use petgraph::{dot::Dot, graph::NodeIndex, Graph};

use super::payload::VertexIndex;

/// The operations used to construct a directed hypergraph.
pub trait DirectedHypergraph {
    /// Adds a vertex with `index` and `label`.
    fn add_vertex(&mut self, index: VertexIndex, label: String);

    /// Adds a hyperarc from the vertices in `head` to `tail`, labelled with `label`.
    fn add_hyperarc(&mut self, head: Vec<VertexIndex>, tail: VertexIndex, label: String);
}

/// A hyperarc of a [ProofGraph].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hyperarc {
    pub head: Vec<VertexIndex>,
    pub tail: VertexIndex,
    pub label: String,
}

/// A proof graph, as reconstructed from a solution.
///
/// Vertices are kept in index order, and hyperarcs in the order they were added.
/// Adding a vertex with an existing index relabels the vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProofGraph {
    vertices: BTreeMap<VertexIndex, String>,
    hyperarcs: Vec<Hyperarc>,
}

impl DirectedHypergraph for ProofGraph {
    fn add_vertex(&mut self, index: VertexIndex, label: String) {
        self.vertices.insert(index, label);
    }

    fn add_hyperarc(&mut self, head: Vec<VertexIndex>, tail: VertexIndex, label: String) {
        self.hyperarcs.push(Hyperarc { head, tail, label });
    }
}

/// A node of the [Graph] a [ProofGraph] is lowered to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofNode {
    /// A vertex of the hypergraph.
    Vertex { index: VertexIndex, label: String },

    /// A vertex referenced by some hyperarc, but never added.
    Missing(VertexIndex),

    /// The junction of a hyperarc, joining the head vertices to the tail.
    Junction(String),
}

impl std::fmt::Display for ProofNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex { label, .. } => write!(f, "{label}"),
            Self::Missing(index) => write!(f, "{index}"),
            Self::Junction(label) => write!(f, "{label}"),
        }
    }
}

impl ProofGraph {
    pub fn new() -> Self {
        ProofGraph::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn hyperarc_count(&self) -> usize {
        self.hyperarcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.hyperarcs.is_empty()
    }

    /// The label of the vertex with `index`, if it exists.
    pub fn label(&self, index: VertexIndex) -> Option<&str> {
        self.vertices.get(&index).map(String::as_str)
    }

    /// The vertices, in index order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexIndex, &str)> {
        self.vertices
            .iter()
            .map(|(index, label)| (*index, label.as_str()))
    }

    /// The hyperarcs, in the order they were added.
    pub fn hyperarcs(&self) -> &[Hyperarc] {
        &self.hyperarcs
    }

    /// The hyperarcs with `label`, in the order they were added.
    pub fn hyperarcs_labelled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Hyperarc> {
        self.hyperarcs.iter().filter(move |arc| arc.label == label)
    }

    /// Lowers the hypergraph to a directed graph.
    ///
    /// Each vertex becomes a node, and each hyperarc a junction node with an edge from every head vertex and an edge to the tail.
    /// Edges carry the label of their hyperarc.
    /// Vertices referenced by a hyperarc but never added become [ProofNode::Missing] nodes.
    pub fn to_petgraph(&self) -> Graph<ProofNode, String> {
        let mut graph = Graph::<ProofNode, String>::new();
        let mut nodes: BTreeMap<VertexIndex, NodeIndex> = BTreeMap::new();

        for (index, label) in &self.vertices {
            let node = graph.add_node(ProofNode::Vertex {
                index: *index,
                label: label.clone(),
            });
            nodes.insert(*index, node);
        }

        for arc in &self.hyperarcs {
            let junction = graph.add_node(ProofNode::Junction(arc.label.clone()));

            for index in &arc.head {
                let from = *nodes
                    .entry(*index)
                    .or_insert_with(|| graph.add_node(ProofNode::Missing(*index)));
                graph.add_edge(from, junction, arc.label.clone());
            }

            let to = *nodes
                .entry(arc.tail)
                .or_insert_with(|| graph.add_node(ProofNode::Missing(arc.tail)));
            graph.add_edge(junction, to, arc.label.clone());
        }

        graph
    }

    /// Renders the hypergraph in the Graphviz DOT language.
    pub fn render(&self) -> String {
        let graph = self.to_petgraph();
        format!(
            "{}",
            Dot::with_config(&graph, &[petgraph::dot::Config::EdgeNoLabel])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> ProofGraph {
        let mut graph = ProofGraph::new();
        graph.add_vertex(1, "p(a)".to_owned());
        graph.add_vertex(2, "q(a)".to_owned());
        graph.add_hyperarc(vec![1], 2, "7".to_owned());
        graph
    }

    #[test]
    fn empty() {
        let graph = ProofGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.to_petgraph().node_count(), 0);
    }

    #[test]
    fn relabel() {
        let mut graph = small_graph();
        graph.add_vertex(1, "r(a)".to_owned());
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.label(1), Some("r(a)"));
    }

    #[test]
    fn lowering() {
        let graph = small_graph().to_petgraph();
        // two vertices and one junction
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn lowering_missing_vertices() {
        let mut graph = small_graph();
        graph.add_hyperarc(vec![1, 3], 4, "8".to_owned());

        let lowered = graph.to_petgraph();
        let missing: Vec<_> = lowered
            .raw_nodes()
            .iter()
            .filter_map(|node| match node.weight {
                ProofNode::Missing(index) => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(missing, vec![3, 4]);
        // four vertices and two junctions
        assert_eq!(lowered.node_count(), 6);
        assert_eq!(lowered.edge_count(), 5);
    }

    #[test]
    fn render() {
        let dot = small_graph().render();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("p(a)"));
        assert!(dot.contains("q(a)"));
    }
}
