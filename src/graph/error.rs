use thiserror::Error;
use trackmatch_geo::GeoError;

use crate::graph::{EdgeId, NodeId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("edge {edge} references node {node}, which does not exist")]
    MissingNode { edge: EdgeId, node: NodeId },

    #[error("node {0} was inserted more than once")]
    DuplicateNode(NodeId),

    #[error("edge {edge} has an invalid length of {length}")]
    InvalidLength { edge: EdgeId, length: f64 },

    #[error("edge {edge} has invalid geometry: {reason}")]
    InvalidGeometry { edge: EdgeId, reason: String },

    #[error("node {node} has an invalid position: {source}")]
    InvalidPosition {
        node: NodeId,
        #[source]
        source: GeoError,
    },
}
