//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Interface the server listens on.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port the server listens on.
pub const DEFAULT_PORT: u16 = 4000;
/// Frontend origins accepted by the CORS layer.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://cartevv.com"];

/// `User-Agent` sent when following links.
pub const DEFAULT_USER_AGENT: &str = concat!("cartevv-localization/", env!("CARGO_PKG_VERSION"));
/// Redirects followed before a link is given up on.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Scheme prefixed to links that carry none.
pub const DEFAULT_LINK_SCHEME: &str = "https://";

/// Marker that identifies a shortened Google Maps link.
pub const SHORT_LINK_MARKER: &str = "goo.gl";
