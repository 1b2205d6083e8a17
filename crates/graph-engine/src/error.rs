use thiserror::Error;

/// Result type for graph construction and queries.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while building or querying a [`Graph`](crate::Graph).
///
/// Vertices are captured in their `Debug` rendering so the error stays
/// independent of the vertex type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two supplied edges share an ordered endpoint pair but differ in weight.
    #[error("conflicting parallel edge weights for {from} -> {to}: {existing} vs {conflicting}")]
    ConflictingEdge {
        from: String,
        to: String,
        existing: u32,
        conflicting: u32,
    },

    /// An edge endpoint is missing from the supplied vertex collection.
    #[error("edge endpoint {vertex} is not a vertex of the graph")]
    UnknownEndpoint { vertex: String },

    /// A query argument is not a vertex of the graph.
    #[error("vertex {vertex} does not exist in the graph")]
    UnknownVertex { vertex: String },
}

impl GraphError {
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn unknown_endpoint<V: std::fmt::Debug>(vertex: &V) -> Self {
        GraphError::UnknownEndpoint {
            vertex: format!("{vertex:?}"),
        }
    }
}
