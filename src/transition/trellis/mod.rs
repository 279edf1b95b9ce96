//! The trellis is the layered, directed acyclic graph
//! over which the most likely sequence of candidates
//! is decoded.

pub mod graph;
pub mod node;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use graph::*;
#[doc(inline)]
pub use node::*;
