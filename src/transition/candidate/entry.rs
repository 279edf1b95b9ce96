use crate::graph::{EdgePosition, EdgeIx};

use geo::Point;

/// The location of a candidate within a solution.
/// This identifies which layer the candidate came from, and which node in the layer it was.
///
/// This is useful for debugging purposes to understand a node without requiring further context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CandidateLocation {
    /// The index of the observation the candidate was projected from.
    pub layer_id: usize,

    /// The rank of the candidate within its layer, nearest first.
    pub node_id: usize,
}

/// Represents the candidate selected within a layer.
///
/// This value holds the [edge](#field.edge) on the underlying routing structure it is sourced
/// from, along with the candidate [position](#field.position) and its offset along that edge.
///
/// It further contains the observation it was projected from, [origin](#field.origin), and the
/// candidate's location within the solution, [location](#field.location).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Refers to the edge within the map graph (Underlying routing structure)
    pub edge: EdgeIx,
    pub position: Point,

    /// The distance along the edge, in units of edge length.
    pub offset: f64,

    /// The great-circle distance between the origin and the position, in meters.
    pub distance: f64,

    /// The observation the candidate was projected from.
    pub origin: Point,

    pub location: CandidateLocation,
}

impl Candidate {
    pub fn new(
        edge: EdgeIx,
        position: Point,
        offset: f64,
        distance: f64,
        origin: Point,
        location: CandidateLocation,
    ) -> Self {
        Candidate {
            edge,
            position,
            offset,
            distance,
            origin,
            location,
        }
    }

    /// The index of the observation this candidate belongs to.
    #[inline]
    pub fn observation(&self) -> usize {
        self.location.layer_id
    }

    #[inline]
    pub fn edge_position(&self) -> EdgePosition {
        EdgePosition::new(self.edge, self.offset)
    }
}
