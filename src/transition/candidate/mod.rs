//! Candidates are the projections of an observation onto the
//! nearby edges of the network, any one of which may be the
//! position the observation was truly recorded at.

pub mod collapse;
pub mod entry;
pub mod route;

#[doc(inline)]
pub use collapse::*;
#[doc(inline)]
pub use entry::*;
#[doc(inline)]
pub use route::*;
