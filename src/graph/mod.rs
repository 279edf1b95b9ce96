pub mod builder;
pub mod edge;
pub mod error;
pub mod index;
pub mod interpolate;
pub mod item;
pub mod traits;

pub use builder::GraphBuilder;
pub use edge::{Edge, EdgeId, EdgePosition, EdgeIx, Node, NodeId, NodeIx};
pub use error::GraphError;
pub use index::{Projected, Segment, SegmentIndex};
pub use interpolate::{InterpolatedGraph, InterpolatedNode};
pub use item::{GraphStructure, RoadGraph};
pub use traits::*;
