use thiserror::Error;
use trackmatch_geo::GeoError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("no input observations were given")]
    NoObservations,

    #[error("observation {index} is invalid: {source}")]
    InvalidObservation {
        index: usize,
        #[source]
        source: GeoError,
    },

    #[error("search radius must be positive and finite. Given: {0}")]
    InvalidRadius(f64),

    #[error("interpolation distance must be finite and at least {min}m. Given: {0}", min = crate::transition::MIN_INTERPOLATION_DISTANCE)]
    InvalidInterpolation(f64),

    #[error("emission sigma must be positive and finite. Given: {0}")]
    InvalidSigma(f64),

    #[error("transition beta must be positive and finite. Given: {0}")]
    InvalidBeta(f64),

    #[error("no observation has a candidate within the search radius")]
    NoCandidates,

    #[error("no feasible transition from observation {from} to observation {to}")]
    NoFeasiblePath { from: usize, to: usize },
}
