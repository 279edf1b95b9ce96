//! A Hidden-Markov-Model (HMM) matching
//! transition module that allows for
//! matching raw data to an underlying
//! network.

pub mod candidate;
pub mod costing;
pub mod layer;
pub mod observation;
pub mod options;
pub mod primitives;
pub mod solver;
pub mod trellis;


// Re-Exports
#[doc(inline)]
pub use candidate::*;
#[doc(inline)]
pub use costing::*;
#[doc(inline)]
pub use primitives::*;
#[doc(inline)]
pub use solver::*;
#[doc(inline)]
pub use trellis::*;

pub use layer::*;
pub use observation::*;
pub use options::*;
