pub mod emission {
    use crate::transition::*;
    use std::f64::consts::TAU;

    /// Calculates the emission probability of a candidate relative
    /// to its source observation.
    ///
    /// ## Calculation
    ///
    /// A zero-mean gaussian over the great-circle distance `d` between
    /// the observation and the candidate, with standard deviation `σ`.
    ///
    /// ```math
    /// emission(d) = (1 / (√(2π) · σ)) · e^(-d² / 2σ²)
    /// ```
    ///
    /// Expressed as a decay, `ζ = √(2π) · σ`, `β = σ²` and the value is `d² / 2`.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct DefaultEmissionCost {
        pub sigma: f64,
    }

    impl DefaultEmissionCost {
        pub fn new(sigma: f64) -> Self {
            DefaultEmissionCost { sigma }
        }
    }

    impl Default for DefaultEmissionCost {
        fn default() -> Self {
            DefaultEmissionCost::new(DEFAULT_SIGMA)
        }
    }

    impl<'a> Strategy<EmissionContext<'a>> for DefaultEmissionCost {
        #[inline(always)]
        fn zeta(&self) -> f64 {
            TAU.sqrt() * self.sigma
        }

        #[inline(always)]
        fn beta(&self) -> f64 {
            self.sigma.powi(2)
        }

        #[inline(always)]
        fn calculate(&self, context: EmissionContext<'a>) -> Option<f64> {
            Some(context.distance.powi(2) / 2.0)
        }
    }
}

pub mod transition {
    use crate::transition::*;

    /// Calculates the transition probability between two candidates.
    ///
    /// # Calculation
    ///
    /// An exponential over the discrepancy between the network distance
    /// between the candidates, and the great-circle distance between their
    /// observations. Routes which follow the observed movement closely are
    /// likely, while detours are exponentially less so.
    ///
    /// ```math
    /// discrepancy = |route(source, target) - distance(source, target)|
    /// transition = (1 / β) · e^(-discrepancy / β)
    /// ```
    ///
    /// Unreachable targets have a probability of zero.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct DefaultTransitionCost {
        pub beta: f64,
    }

    impl DefaultTransitionCost {
        pub fn new(beta: f64) -> Self {
            DefaultTransitionCost { beta }
        }
    }

    impl Default for DefaultTransitionCost {
        fn default() -> Self {
            DefaultTransitionCost::new(DEFAULT_BETA)
        }
    }

    impl<'a> Strategy<TransitionContext<'a>> for DefaultTransitionCost {
        #[inline(always)]
        fn zeta(&self) -> f64 {
            self.beta
        }

        #[inline(always)]
        fn beta(&self) -> f64 {
            self.beta
        }

        #[inline(always)]
        fn calculate(&self, context: TransitionContext<'a>) -> Option<f64> {
            context.lengths().map(|lengths| lengths.discrepancy())
        }
    }
}

pub mod costing {
    use crate::transition::*;

    /// The default emission and transition models.
    pub type DefaultCosting = CostingStrategies<DefaultEmissionCost, DefaultTransitionCost>;

    pub struct CostingStrategies<E, T>
    where
        E: EmissionStrategy,
        T: TransitionStrategy,
    {
        emission: E,
        transition: T,
    }

    impl<E, T> CostingStrategies<E, T>
    where
        E: EmissionStrategy,
        T: TransitionStrategy,
    {
        pub fn new(emission: E, transition: T) -> Self {
            Self {
                emission,
                transition,
            }
        }
    }

    impl Default for DefaultCosting {
        fn default() -> Self {
            CostingStrategies::new(DefaultEmissionCost::default(), DefaultTransitionCost::default())
        }
    }

    impl<E, T> Costing<E, T> for CostingStrategies<E, T>
    where
        T: TransitionStrategy,
        E: EmissionStrategy,
    {
        #[inline(always)]
        fn emission(&self, context: EmissionContext) -> f64 {
            self.emission.log_probability(context)
        }

        #[inline(always)]
        fn transition(&self, context: TransitionContext) -> f64 {
            self.transition.log_probability(context)
        }
    }
}

pub use costing::*;
pub use emission::*;
pub use transition::*;
