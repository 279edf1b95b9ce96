pub mod dijkstra;
#[doc(inline)]
pub use dijkstra::*;

pub mod error;
pub use error::*;
