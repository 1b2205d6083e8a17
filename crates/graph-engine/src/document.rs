use crate::error::GraphError;
use crate::graph::Graph;
use crate::model::{Edge, Vertex};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// A graph description as read from JSON:
///
/// ```json
/// { "vertices": ["A", "B"], "edges": [{ "source": "A", "destination": "B", "weight": 2 }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<Edge<Vertex>>,
}

impl GraphDocument {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid graph document")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read graph document {}", path.display()))?;
        let doc = Self::from_json_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!(
            path = %path.display(),
            vertices = doc.vertices.len(),
            edges = doc.edges.len(),
            "graph document loaded"
        );
        Ok(doc)
    }

    /// Validate and build the graph.
    pub fn into_graph(self) -> crate::Result<Graph<Vertex>> {
        Graph::new(self.vertices, self.edges)
    }
}

impl TryFrom<GraphDocument> for Graph<Vertex> {
    type Error = GraphError;

    fn try_from(doc: GraphDocument) -> crate::Result<Self> {
        doc.into_graph()
    }
}

/// Seven edgeless vertices labelled `0`, `01`, ..., `0123456`.
pub fn sample_document() -> GraphDocument {
    let mut label = String::new();
    let vertices = (0..7)
        .map(|i| {
            label.push_str(&i.to_string());
            Vertex::new(label.clone())
        })
        .collect();

    GraphDocument {
        vertices,
        edges: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_build() -> Result<()> {
        let doc = GraphDocument::from_json_str(
            r#"{
                "vertices": ["A", "B", "C"],
                "edges": [
                    { "source": "A", "destination": "B", "weight": 2 },
                    { "source": "B", "destination": "C", "weight": 3 }
                ]
            }"#,
        )?;
        assert_eq!(doc.vertices.len(), 3);

        let graph: Graph<Vertex> = Graph::try_from(doc)?;
        assert_eq!(graph.edge_cost(&"B".into(), &"C".into())?, 3);
        Ok(())
    }

    #[test]
    fn test_edges_default_to_empty() -> Result<()> {
        let doc = GraphDocument::from_json_str(r#"{ "vertices": ["A"] }"#)?;
        assert!(doc.edges.is_empty());
        Ok(())
    }

    #[test]
    fn test_negative_weight_is_rejected_by_parser() {
        let err = GraphDocument::from_json_str(
            r#"{ "vertices": ["A", "B"], "edges": [{ "source": "A", "destination": "B", "weight": -1 }] }"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_conflicting_document_fails_to_build() -> Result<()> {
        let doc = GraphDocument::from_json_str(
            r#"{
                "vertices": ["A", "B"],
                "edges": [
                    { "source": "A", "destination": "B", "weight": 2 },
                    { "source": "A", "destination": "B", "weight": 5 }
                ]
            }"#,
        )?;
        assert!(matches!(doc.into_graph(), Err(GraphError::ConflictingEdge { .. })));
        Ok(())
    }

    #[test]
    fn test_sample_document_labels() {
        let doc = sample_document();
        let labels: Vec<_> = doc.vertices.iter().map(Vertex::label).collect();
        assert_eq!(labels, vec!["0", "01", "012", "0123", "01234", "012345", "0123456"]);
        assert!(doc.edges.is_empty());
    }
}
