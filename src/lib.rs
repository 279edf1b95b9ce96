#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod graph;
pub mod transition;
pub mod util;

#[doc(inline)]
pub use graph::{
    Edge, EdgeId, EdgeIx, EdgePosition, GraphBuilder, GraphError, InterpolatedGraph, Match,
    MatchOutcome, Node, NodeId, NodeIx, RoadGraph, Route, RouteLeg, Scan,
};
#[doc(inline)]
pub use transition::*;

pub use trackmatch_geo as geo_util;
