use crate::graph::RoadGraph;
use crate::transition::*;

/// A base context provided to solvers.
///
/// Provides access to the base map [`map`](#field.map).
/// It also provides a reference to the [`trellis`](#field.trellis) being decoded.
#[derive(Clone, Copy, Debug)]
pub struct RoutingContext<'a> {
    pub map: &'a RoadGraph,
    pub trellis: &'a Trellis,
}

impl<'a> RoutingContext<'a> {
    pub fn new(map: &'a RoadGraph, trellis: &'a Trellis) -> Self {
        RoutingContext { map, trellis }
    }

    /// Obtain a [candidate](Candidate), should it exist, by its trellis index.
    pub fn candidate(&self, index: TrellisIx) -> Option<&'a Candidate> {
        self.trellis.candidate(index)
    }
}
