use crate::graph::InterpolatedGraph;
use crate::transition::{Decoded, Layer, MatchError, MatchOptions, Observation, RoutedPath, Trellis};

/// Every artifact of a single map-match.
#[derive(Debug)]
pub struct MatchOutcome<'a> {
    /// The densified overlay the candidates were projected upon.
    pub interpolated: InterpolatedGraph<'a>,

    /// The candidates of each observation, in order, including empty layers.
    pub layers: Vec<Layer>,

    pub trellis: Trellis,
    pub decoded: Decoded,

    /// The matched candidates, and the route travelled between them.
    pub routed: RoutedPath,
}

impl MatchOutcome<'_> {
    /// The log-probability of the matched path.
    pub fn log_probability(&self) -> f64 {
        self.decoded.log_probability
    }
}

pub trait Match {
    /// Matches the given observations against the map.
    ///
    /// Matching involves the use of a hidden markov model
    /// using the [`transition`](crate::transition) module
    /// to collapse the given input onto the map, finding
    /// the most likely candidate for each observation, and
    /// the route taken between them.
    fn r#match(
        &self,
        observations: &[Observation],
        options: &MatchOptions,
    ) -> Result<MatchOutcome<'_>, MatchError>;
}
