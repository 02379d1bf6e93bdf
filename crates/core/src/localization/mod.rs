//! Map localization: turning maps links into coordinates
//!
//! - [`patterns`] holds the ordered coordinate matchers
//! - [`ports`] defines the outbound link-following boundary
//! - [`service`] combines both into the best-effort resolver

pub mod patterns;
pub mod ports;
pub mod service;

pub use service::MapsLinkResolver;
