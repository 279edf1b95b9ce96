use crate::graph::{InterpolatedGraph, RoadGraph, Scan};
use crate::transition::*;

use log::{debug, info};
use measure_time::debug_time;
use rayon::prelude::*;

#[cfg(feature = "tracing")]
use tracing::Level;

/// Generates the layers of the transition graph.
///
/// Each layer represents an observation of the trip, and each candidate
/// within the layer a position it may have been recorded at. Candidates
/// are found by projecting the observation onto every edge within the
/// `radius`, upon a densified overlay of the network.
pub struct CandidateGenerator<'a> {
    /// The maximum distance, in meters, at which an edge may
    /// still be considered a candidate of an observation.
    pub radius: f64,

    /// Keep only the nearest candidate of each observation, after
    /// filtering candidates to those within the [radius](#field.radius).
    pub closest_only: bool,

    /// The spacing, in meters, at which edges are densified.
    /// When `None`, observations are projected onto the raw edge geometry.
    pub interpolation_distance: Option<f64>,

    /// The routing map used to pull candidates from.
    map: &'a RoadGraph,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(map: &'a RoadGraph) -> Self {
        CandidateGenerator {
            map,
            radius: DEFAULT_RADIUS,
            closest_only: false,
            interpolation_distance: Some(DEFAULT_INTERPOLATION_DISTANCE),
        }
    }

    pub fn with_radius(self, radius: f64) -> Self {
        CandidateGenerator { radius, ..self }
    }

    pub fn with_closest_only(self, closest_only: bool) -> Self {
        CandidateGenerator {
            closest_only,
            ..self
        }
    }

    pub fn with_interpolation(self, interpolation_distance: Option<f64>) -> Self {
        CandidateGenerator {
            interpolation_distance,
            ..self
        }
    }

    /// Rejects malformed input before any work upon the graph.
    fn validate(&self, observations: &[Observation]) -> Result<(), MatchError> {
        if observations.is_empty() {
            return Err(MatchError::NoObservations);
        }

        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MatchError::InvalidRadius(self.radius));
        }

        if let Some(spacing) = self.interpolation_distance {
            if !spacing.is_finite() || spacing < MIN_INTERPOLATION_DISTANCE {
                return Err(MatchError::InvalidInterpolation(spacing));
            }
        }

        observations
            .iter()
            .enumerate()
            .try_for_each(|(index, observation)| {
                observation
                    .validate()
                    .map_err(|source| MatchError::InvalidObservation { index, source })
            })
    }

    /// Produces the densified overlay and one layer per observation, in order.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip_all))]
    pub fn generate(
        &self,
        observations: &[Observation],
    ) -> Result<(InterpolatedGraph<'a>, Vec<Layer>), MatchError> {
        self.validate(observations)?;
        info!(
            "Generating candidates for {} observations within {}m",
            observations.len(),
            self.radius
        );

        let interpolated = InterpolatedGraph::new(self.map, self.interpolation_distance);

        // In parallel, create each layer, and collect in observation order.
        let layers = {
            debug_time!("generate {} layers", observations.len());

            observations
                .par_iter()
                .enumerate()
                .map(|(layer_id, observation)| self.layer(&interpolated, layer_id, observation))
                .collect::<Vec<_>>()
        };

        let empty = layers.iter().filter(|layer| layer.is_empty()).count();
        debug!(
            "Generated {} candidates, {empty} observations without candidates",
            layers.iter().map(Layer::len).sum::<usize>()
        );

        Ok((interpolated, layers))
    }

    fn layer(&self, overlay: &InterpolatedGraph, layer_id: usize, observation: &Observation) -> Layer {
        let origin = observation.position;
        let projected = overlay.scan_edges_projected(&origin, self.radius);

        let limit = if self.closest_only { 1 } else { projected.len() };
        let candidates = projected
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(node_id, projected)| {
                let location = CandidateLocation { layer_id, node_id };
                Candidate::new(
                    projected.edge,
                    projected.position,
                    projected.offset,
                    projected.distance,
                    origin,
                    location,
                )
            })
            .collect();

        Layer {
            observation: layer_id,
            origin,
            candidates,
        }
    }
}

/// Finds the candidates of every observation.
///
/// Densifies the `map` every `interpolation_distance` meters (when given), then
/// projects each observation onto all edges within `radius` meters. With
/// `closest_only`, only the nearest of those candidates is kept. Observations
/// without any candidate produce an empty layer.
///
/// Returns the densified overlay and one [`Layer`] per observation, in order.
pub fn get_candidates<'a>(
    map: &'a RoadGraph,
    observations: &[Observation],
    interpolation_distance: Option<f64>,
    radius: f64,
    closest_only: bool,
) -> Result<(InterpolatedGraph<'a>, Vec<Layer>), MatchError> {
    CandidateGenerator::new(map)
        .with_interpolation(interpolation_distance)
        .with_radius(radius)
        .with_closest_only(closest_only)
        .generate(observations)
}
