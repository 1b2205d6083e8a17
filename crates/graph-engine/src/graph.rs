use crate::error::{GraphError, Result};
use crate::model::Edge;
use crate::topology::GraphTopology;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, warn};

/// Returned by [`Graph::edge_cost`] when no edge joins the two vertices.
pub const NO_EDGE: i64 = -1;

/// An immutable directed graph with non-negative integer edge weights.
///
/// Built once from a vertex collection and an edge collection; every query
/// afterwards is read-only and returns owned copies.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// Dense index -> vertex, in first-seen order.
    vertices: Vec<V>,
    vertex_index: HashMap<V, usize>,
    topology: GraphTopology,
    /// At most one edge per ordered (source, destination) index pair.
    edge_by_pair: HashMap<(usize, usize), Edge<V>>,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Build a graph from `vertices` and `edges`.
    ///
    /// Duplicate vertices collapse into one. Supplying the same edge twice is
    /// harmless, but two edges over the same ordered pair with different
    /// weights fail with [`GraphError::ConflictingEdge`]. Every edge endpoint
    /// must appear in `vertices`, otherwise [`GraphError::UnknownEndpoint`].
    pub fn new<I, E>(vertices: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>,
    {
        let mut graph = Graph {
            vertices: Vec::new(),
            vertex_index: HashMap::new(),
            topology: GraphTopology::default(),
            edge_by_pair: HashMap::new(),
        };

        for vertex in vertices {
            if graph.vertex_index.contains_key(&vertex) {
                continue;
            }
            let idx = graph.topology.add_node();
            graph.vertex_index.insert(vertex.clone(), idx);
            graph.vertices.push(vertex);
        }

        for edge in edges {
            graph.insert_edge(edge)?;
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            arcs = graph.topology.num_arcs(),
            "graph built"
        );
        Ok(graph)
    }

    fn insert_edge(&mut self, edge: Edge<V>) -> Result<()> {
        let src = self.endpoint_index(edge.source())?;
        let dst = self.endpoint_index(edge.destination())?;
        let weight = edge.weight();

        match self.edge_by_pair.entry((src, dst)) {
            Entry::Occupied(existing) => {
                let existing = existing.get().weight();
                if existing != weight {
                    warn!(
                        source = ?edge.source(),
                        destination = ?edge.destination(),
                        existing,
                        conflicting = weight,
                        "rejecting parallel edge with a different weight"
                    );
                    return Err(GraphError::ConflictingEdge {
                        from: format!("{:?}", edge.source()),
                        to: format!("{:?}", edge.destination()),
                        existing,
                        conflicting: weight,
                    });
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(edge);
            }
        }

        self.topology.add_arc(src, dst, weight);
        Ok(())
    }

    fn endpoint_index(&self, vertex: &V) -> Result<usize> {
        self.index_of(vertex).ok_or_else(|| {
            warn!(vertex = ?vertex, "edge endpoint missing from vertex set");
            GraphError::unknown_endpoint(vertex)
        })
    }

    /// Dense index of `vertex`, or an [`GraphError::UnknownVertex`] error.
    pub(crate) fn require(&self, vertex: &V) -> Result<usize> {
        self.index_of(vertex)
            .ok_or_else(|| GraphError::unknown_vertex(vertex))
    }

    /// Dense index in `0..vertex_count()` assigned at construction.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertex_index.get(vertex).copied()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertex_index.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_by_pair.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A copy of the vertex set.
    pub fn vertices(&self) -> HashSet<V> {
        self.vertices.iter().cloned().collect()
    }

    /// A copy of the edge set.
    pub fn edges(&self) -> HashSet<Edge<V>> {
        self.edge_by_pair.values().cloned().collect()
    }

    /// Every `w` with an edge `v -> w`, in the order the edges were supplied.
    pub fn adjacent_vertices(&self, v: &V) -> Result<Vec<V>> {
        let idx = self.require(v)?;
        Ok(self
            .topology
            .neighbors(idx)
            .map(|(n, _)| self.vertices[n].clone())
            .collect())
    }

    /// The edge `a -> b`, if there is one.
    pub fn edge(&self, a: &V, b: &V) -> Result<Option<&Edge<V>>> {
        let src = self.require(a)?;
        let dst = self.require(b)?;
        Ok(self.edge_by_pair.get(&(src, dst)))
    }

    /// Weight of the edge `a -> b`, or `None` without such an edge.
    pub fn edge_weight(&self, a: &V, b: &V) -> Result<Option<u32>> {
        Ok(self.edge(a, b)?.map(Edge::weight))
    }

    /// Weight of the edge `a -> b`, or [`NO_EDGE`] (`-1`) without one.
    pub fn edge_cost(&self, a: &V, b: &V) -> Result<i64> {
        Ok(self.edge_weight(a, b)?.map_or(NO_EDGE, i64::from))
    }

    pub(crate) fn topology(&self) -> &GraphTopology {
        &self.topology
    }

    pub(crate) fn vertex_at(&self, idx: usize) -> &V {
        &self.vertices[idx]
    }
}
