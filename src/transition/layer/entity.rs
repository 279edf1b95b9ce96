use crate::transition::Candidate;

use geo::Point;

/// The candidate set of a single observation.
///
/// Candidates are ordered by their distance to the observation, nearest
/// first, with ties broken by edge index. A layer may be empty when no
/// edge lies within the search radius of its observation.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// The index of the observation within the trip.
    pub observation: usize,
    pub origin: Point,
    pub candidates: Vec<Candidate>,
}

impl Layer {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The nearest candidate to the observation.
    pub fn closest(&self) -> Option<&Candidate> {
        self.candidates.first()
    }
}
