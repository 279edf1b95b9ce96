use crate::graph::EdgeIx;
use crate::transition::*;

use approx::assert_relative_eq;
use geo::Point;
use std::f64::consts::PI;

fn candidate(layer_id: usize, origin: Point, distance: f64) -> Candidate {
    let location = CandidateLocation {
        layer_id,
        node_id: 0,
    };

    Candidate::new(EdgeIx::new(0), origin, 0.0, distance, origin, location)
}

#[test]
fn emission_is_gaussian() {
    let costing = DefaultCosting::default();
    let origin = Point::new(0.0, 0.0);

    let at = |distance: f64| {
        let candidate = candidate(0, origin, distance);
        costing.emission(EmissionContext::from(&candidate))
    };

    let sigma = DEFAULT_SIGMA;
    let peak = -((2.0 * PI).sqrt() * sigma).ln();

    assert_relative_eq!(at(0.0), peak, epsilon = 1e-12);
    assert_relative_eq!(at(sigma), peak - 0.5, epsilon = 1e-12);
    assert_relative_eq!(at(2.0 * sigma), peak - 2.0, epsilon = 1e-12);

    // Finite for any finite distance
    assert!(at(10_000.0).is_finite());
    assert!(at(5.0) > at(6.0));
}

#[test]
fn emission_probability_matches_density() {
    let strategy = DefaultEmissionCost::new(4.07);
    let origin = Point::new(0.0, 0.0);
    let context = EmissionContext::new(&origin, &origin, 3.0);

    let density = (1.0 / ((2.0 * PI).sqrt() * 4.07)) * (-(3.0f64.powi(2)) / (2.0 * 4.07f64.powi(2))).exp();
    assert_relative_eq!(strategy.probability(context), density, max_relative = 1e-12);
}

#[test]
fn transition_penalises_discrepancy() {
    let costing = DefaultCosting::default();
    let (a, b) = (Point::new(0.0, 0.0), Point::new(0.001, 0.0));
    let (source, target) = (candidate(0, a, 0.0), candidate(1, b, 0.0));

    let straight = TransitionContext::new(&source, &target, None).great_circle_distance();
    let at = |route: Option<f64>| costing.transition(TransitionContext::new(&source, &target, route));

    let beta = DEFAULT_BETA;
    assert_relative_eq!(at(Some(straight)), -beta.ln(), epsilon = 1e-12);
    assert_relative_eq!(at(Some(straight + beta)), -beta.ln() - 1.0, epsilon = 1e-9);

    // Shorter routes than the straight line are penalised symmetrically
    assert_relative_eq!(at(Some(straight - beta)), at(Some(straight + beta)), epsilon = 1e-9);
    assert_eq!(at(None), f64::NEG_INFINITY);
}

#[test]
fn custom_strategies_plug_in() {
    struct Uniform;

    impl<'a> Strategy<EmissionContext<'a>> for Uniform {
        fn zeta(&self) -> f64 {
            1.0
        }

        fn beta(&self) -> f64 {
            1.0
        }

        fn calculate(&self, _: EmissionContext<'a>) -> Option<f64> {
            Some(0.0)
        }
    }

    let costing = CostingStrategies::new(Uniform, DefaultTransitionCost::default());
    let origin = Point::new(0.0, 0.0);

    assert_eq!(costing.emission(EmissionContext::new(&origin, &origin, 25.0)), 0.0);
}
