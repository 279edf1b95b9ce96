pub mod default;
pub mod emission;
pub mod routing;
pub mod transition;
pub mod util;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use default::*;
#[doc(inline)]
pub use emission::*;
#[doc(inline)]
pub use routing::*;
#[doc(inline)]
pub use transition::*;
#[doc(inline)]
pub use util::*;
