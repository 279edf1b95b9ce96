use crate::graph::{Match, MatchOutcome, RoadGraph};
use crate::transition::*;

use log::info;

#[cfg(feature = "tracing")]
use tracing::Level;

impl Match for RoadGraph {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    fn r#match(
        &self,
        observations: &[Observation],
        options: &MatchOptions,
    ) -> Result<MatchOutcome<'_>, MatchError> {
        info!("Finding matched route for {} positions", observations.len());
        options.validate()?;

        let (interpolated, layers) = get_candidates(
            self,
            observations,
            options.interpolation_distance,
            options.radius,
            options.closest_only,
        )?;

        let trellis = create_trellis(&layers)?;

        let costing = CostingStrategies::new(
            DefaultEmissionCost::new(options.sigma),
            DefaultTransitionCost::new(options.beta),
        );

        let solver = ViterbiSolver::new(options.search_bound);
        let decoded = solver.solve(RoutingContext::new(self, &trellis), &costing)?;

        let path = decoded.path(&trellis)?;
        let routed = RoutedPath::new(path, self, options.search_bound);

        Ok(MatchOutcome {
            interpolated,
            layers,
            trellis,
            decoded,
            routed,
        })
    }
}
