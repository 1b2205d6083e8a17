pub mod document;
pub mod error;
pub mod graph;
mod heap;
pub mod model;
mod priority_queue;
mod shortest_path;
mod topology;

pub use document::{sample_document, GraphDocument};
pub use error::{GraphError, Result};
pub use graph::{Graph, NO_EDGE};
pub use model::{Edge, Path, Vertex};
