use serde::{Deserialize, Serialize};
use std::fmt;

/// A vertex label. Equality and hashing are by label value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// A directed, weighted edge. Equal only when all three fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V> {
    source: V,
    destination: V,
    weight: u32,
}

impl<V> Edge<V> {
    pub fn new(source: V, destination: V, weight: u32) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn destination(&self) -> &V {
        &self.destination
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// Result of a shortest-path query: the vertices from source to
/// destination inclusive, and the summed edge weight.
///
/// Never empty: deserializing a path without vertices fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPath<V>")]
pub struct Path<V> {
    vertices: Vec<V>,
    cost: u64,
}

#[derive(Deserialize)]
struct RawPath<V> {
    vertices: Vec<V>,
    cost: u64,
}

impl<V> TryFrom<RawPath<V>> for Path<V> {
    type Error = &'static str;

    fn try_from(raw: RawPath<V>) -> Result<Self, Self::Error> {
        if raw.vertices.is_empty() {
            return Err("a path holds at least its source vertex");
        }
        Ok(Self::new(raw.vertices, raw.cost))
    }
}

impl<V> Path<V> {
    /// Build a path. `vertices` must hold at least the source.
    pub(crate) fn new(vertices: Vec<V>, cost: u64) -> Self {
        debug_assert!(!vertices.is_empty(), "a path holds at least its source");
        Self { vertices, cost }
    }

    /// The zero-cost path from a vertex to itself.
    pub(crate) fn single(vertex: V) -> Self {
        Self::new(vec![vertex], 0)
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn source(&self) -> &V {
        &self.vertices[0]
    }

    pub fn destination(&self) -> &V {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges walked.
    pub fn hop_count(&self) -> usize {
        self.vertices.len() - 1
    }
}

impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, " (cost {})", self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_edge_equality_covers_weight() {
        let a = Edge::new(Vertex::from("A"), Vertex::from("B"), 2);
        let b = Edge::new(Vertex::from("A"), Vertex::from("B"), 2);
        let c = Edge::new(Vertex::from("A"), Vertex::from("B"), 5);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_path_accessors_and_display() {
        let path = Path::new(vec![Vertex::from("A"), Vertex::from("B"), Vertex::from("C")], 5);
        assert_eq!(path.source().label(), "A");
        assert_eq!(path.destination().label(), "C");
        assert_eq!(path.hop_count(), 2);
        assert_eq!(path.to_string(), "A -> B -> C (cost 5)");

        let single = Path::single(Vertex::from("A"));
        assert_eq!(single.hop_count(), 0);
        assert_eq!(single.to_string(), "A (cost 0)");
    }

    #[test]
    fn test_empty_path_is_rejected_on_deserialize() {
        let err = serde_json::from_str::<Path<Vertex>>(r#"{"vertices":[],"cost":0}"#).unwrap_err();
        assert!(err.to_string().contains("at least its source"));

        let path: Path<Vertex> = serde_json::from_str(r#"{"vertices":["A","B"],"cost":4}"#).unwrap();
        assert_eq!(path.hop_count(), 1);
        assert_eq!(path.destination().label(), "B");
    }

    #[test]
    fn test_vertex_serializes_as_plain_label() {
        let json = serde_json::to_string(&Vertex::from("A")).unwrap();
        assert_eq!(json, "\"A\"");

        let edge: Edge<Vertex> =
            serde_json::from_str(r#"{"source":"A","destination":"B","weight":3}"#).unwrap();
        assert_eq!(edge, Edge::new("A".into(), "B".into(), 3));
    }
}
