use crate::transition::*;

use geo::{Distance, Haversine};

pub trait TransitionStrategy: for<'a> Strategy<TransitionContext<'a>> {}
impl<T> TransitionStrategy for T where T: for<'a> Strategy<TransitionContext<'a>> {}

#[derive(Clone, Copy, Debug)]
pub struct TransitionContext<'a> {
    /// The candidate being transitioned from.
    pub source_candidate: &'a Candidate,

    /// The candidate being transitioned to.
    pub target_candidate: &'a Candidate,

    /// The network distance between the two candidates, in meters,
    /// or `None` if the target cannot be reached from the source.
    pub route_distance: Option<f64>,
}

/// The pair of lengths compared by a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionLengths {
    /// The great-circle distance between the two observations.
    pub straightline_distance: f64,

    /// The network distance between the two candidates.
    pub route_length: f64,
}

impl TransitionLengths {
    /// The absolute difference between the route and straight-line lengths, in meters.
    #[inline]
    pub fn discrepancy(&self) -> f64 {
        (self.route_length - self.straightline_distance).abs()
    }
}

impl<'a> TransitionContext<'a> {
    pub fn new(source: &'a Candidate, target: &'a Candidate, route_distance: Option<f64>) -> Self {
        TransitionContext {
            source_candidate: source,
            target_candidate: target,
            route_distance,
        }
    }

    /// The great-circle distance between the observations of the two candidates.
    #[inline]
    pub fn great_circle_distance(&self) -> f64 {
        Haversine.distance(self.source_candidate.origin, self.target_candidate.origin)
    }

    /// The lengths of the transition, if the target is reachable.
    pub fn lengths(&self) -> Option<TransitionLengths> {
        Some(TransitionLengths {
            straightline_distance: self.great_circle_distance(),
            route_length: self.route_distance?,
        })
    }
}
