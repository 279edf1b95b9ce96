pub mod r#match;
pub mod proximity;
pub mod route;

pub use r#match::{Match, MatchOutcome};
pub use proximity::Scan;
pub use route::{Route, RouteLeg};
