use crate::transition::Candidate;

use std::fmt::{Display, Formatter};

/// The virtual ends of the trellis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Sentinel {
    Start,
    Target,
}

/// A node of the trellis: either one of its two sentinels, or a candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrellisNode {
    Sentinel(Sentinel),
    Candidate(Candidate),
}

impl TrellisNode {
    #[inline]
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            TrellisNode::Candidate(candidate) => Some(candidate),
            TrellisNode::Sentinel(_) => None,
        }
    }

    #[inline]
    pub fn sentinel(&self) -> Option<Sentinel> {
        match self {
            TrellisNode::Sentinel(sentinel) => Some(*sentinel),
            TrellisNode::Candidate(_) => None,
        }
    }
}

impl Display for TrellisNode {
    /// Sentinels display as their label, candidates as `layer_id:node_id`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TrellisNode::Sentinel(sentinel) => write!(f, "{sentinel}"),
            TrellisNode::Candidate(candidate) => write!(
                f,
                "{}:{}",
                candidate.location.layer_id, candidate.location.node_id
            ),
        }
    }
}

/// The weight of a trellis edge.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum TrellisEdge {
    /// A known log-probability, used for the edges leaving `start` and entering `target`.
    Fixed(f64),

    /// A transition between two candidates, evaluated by the decoder.
    #[default]
    Deferred,
}

impl TrellisEdge {
    /// The edge of probability one.
    pub const CERTAIN: TrellisEdge = TrellisEdge::Fixed(0.0);
}
