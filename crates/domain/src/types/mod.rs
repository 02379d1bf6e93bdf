//! Domain types and models

pub mod geo;
pub mod link;
pub mod stats;

pub use geo::{Coordinates, ResolvedLocation};
pub use link::{ExpandedLink, LinkRequest};
pub use stats::ResolverStats;
