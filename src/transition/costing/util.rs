use crate::transition::*;

/// A probability model of the form `(1 / ζ) · e^(-value / β)`.
pub trait Strategy<Ctx> {
    /// The zeta (ζ) value in the decay function.
    fn zeta(&self) -> f64;

    /// The beta (β) value in the decay function.
    fn beta(&self) -> f64;

    /// The calculation value you must implement.
    ///
    /// Returning `None` marks the context as impossible,
    /// with a probability of zero.
    fn calculate(&self, context: Ctx) -> Option<f64>;

    /// The natural logarithm of the decay-based probability of the context.
    ///
    /// ### Formula
    /// The scalar is given by `1 / ζ`. Therefore, if `ζ` is `1`, no
    /// scaling is applied. The exponential component is the negative
    /// value divided by `β`. In log space, this becomes:
    ///
    /// ```math
    /// log_probability(value) = -ln(ζ) - value / β
    /// ```
    ///
    /// Impossible contexts return negative infinity.
    #[inline(always)]
    fn log_probability(&self, ctx: Ctx) -> f64 {
        match self.calculate(ctx) {
            Some(value) => -self.zeta().ln() - value / self.beta(),
            None => f64::NEG_INFINITY,
        }
    }

    /// The probability of the context, in the range `0..`.
    #[inline]
    fn probability(&self, ctx: Ctx) -> f64 {
        self.log_probability(ctx).exp()
    }
}

pub trait Costing<Emission, Transition>
where
    Transition: TransitionStrategy,
    Emission: EmissionStrategy,
{
    /// The emission log-probability of a candidate.
    fn emission(&self, context: EmissionContext) -> f64;

    /// The transition log-probability between two candidates.
    fn transition(&self, context: TransitionContext) -> f64;
}
