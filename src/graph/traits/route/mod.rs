mod definition;
mod implementation;


pub use definition::{Route, RouteLeg};
