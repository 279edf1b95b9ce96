pub mod methods;
pub mod viterbi;

#[doc(inline)]
pub use methods::*;
#[doc(inline)]
pub use viterbi::*;
