use crate::transition::MatchError;

use serde::{Deserialize, Serialize};

/// Spacing, in meters, of the synthetic nodes inserted along each edge.
pub const DEFAULT_INTERPOLATION_DISTANCE: f64 = 5.0;

/// The finest spacing, in meters, at which edges may be densified.
pub const MIN_INTERPOLATION_DISTANCE: f64 = 0.1;

/// Radius, in meters, within which edges become candidates of an observation.
pub const DEFAULT_RADIUS: f64 = 30.0;

/// Standard deviation, in meters, of the GPS measurement noise.
pub const DEFAULT_SIGMA: f64 = 4.07;

/// Scale, in meters, of the tolerated route-length discrepancy.
pub const DEFAULT_BETA: f64 = 3.0;

pub const DEFAULT_BOUND_FACTOR: f64 = 5.0;
pub const DEFAULT_BOUND_FLOOR: f64 = 200.0;

/// The search budget of a single network-distance query.
///
/// A route between two candidates is abandoned once it exceeds
/// `max(factor × great-circle distance, floor)` meters, where the
/// great-circle distance is measured between the two positions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBound {
    pub factor: f64,
    pub floor: f64,
}

impl Default for SearchBound {
    fn default() -> Self {
        SearchBound {
            factor: DEFAULT_BOUND_FACTOR,
            floor: DEFAULT_BOUND_FLOOR,
        }
    }
}

impl SearchBound {
    pub fn new(factor: f64, floor: f64) -> Self {
        SearchBound { factor, floor }
    }

    /// A bound which never abandons a route.
    pub fn unbounded() -> Self {
        SearchBound {
            factor: 1.0,
            floor: f64::INFINITY,
        }
    }

    /// The budget, in meters, for positions `great_circle` meters apart.
    #[inline]
    pub fn limit(&self, great_circle: f64) -> f64 {
        (self.factor * great_circle).max(self.floor)
    }
}

/// Configuration of a single map-match.
///
/// ```rust
/// use trackmatch::MatchOptions;
///
/// let options = MatchOptions::default()
///     .with_radius(50.0)
///     .with_closest_only(true);
///
/// assert_eq!(options.interpolation_distance, Some(5.0));
/// assert_eq!(options.radius, 50.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Spacing at which edges are densified before searching for candidates.
    /// When `None`, candidates are projected onto the raw edge geometry.
    pub interpolation_distance: Option<f64>,

    /// Search radius of each observation, in meters.
    pub radius: f64,

    /// Keep only the single nearest candidate of each observation.
    pub closest_only: bool,

    pub search_bound: SearchBound,

    /// Emission standard deviation (σ), in meters.
    pub sigma: f64,

    /// Transition scale (β), in meters.
    pub beta: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            interpolation_distance: Some(DEFAULT_INTERPOLATION_DISTANCE),
            radius: DEFAULT_RADIUS,
            closest_only: false,
            search_bound: SearchBound::default(),
            sigma: DEFAULT_SIGMA,
            beta: DEFAULT_BETA,
        }
    }
}

impl MatchOptions {
    pub fn with_interpolation(self, interpolation_distance: Option<f64>) -> Self {
        MatchOptions {
            interpolation_distance,
            ..self
        }
    }

    pub fn with_radius(self, radius: f64) -> Self {
        MatchOptions { radius, ..self }
    }

    pub fn with_closest_only(self, closest_only: bool) -> Self {
        MatchOptions {
            closest_only,
            ..self
        }
    }

    pub fn with_search_bound(self, search_bound: SearchBound) -> Self {
        MatchOptions {
            search_bound,
            ..self
        }
    }

    pub fn with_sigma(self, sigma: f64) -> Self {
        MatchOptions { sigma, ..self }
    }

    pub fn with_beta(self, beta: f64) -> Self {
        MatchOptions { beta, ..self }
    }

    /// Rejects probability model parameters which cannot form a distribution.
    ///
    /// The search parameters are validated alongside the observations,
    /// see [`get_candidates`](crate::transition::get_candidates).
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(MatchError::InvalidSigma(self.sigma));
        }

        if !self.beta.is_finite() || self.beta <= 0.0 {
            return Err(MatchError::InvalidBeta(self.beta));
        }

        Ok(())
    }
}
