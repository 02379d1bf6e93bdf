//! Port interfaces for following maps links
//!
//! These traits define the boundary between the resolver and the HTTP
//! adapter that actually talks to the map service.

use async_trait::async_trait;
use cartevv_domain::Result;

/// Outcome of following a link through its redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowedLink {
    /// URL reached after the last redirect.
    pub final_url: String,
    /// Response body, `None` when it could not be read as text.
    pub body: Option<String>,
}

/// Trait for resolving a link to its final destination
#[async_trait]
pub trait LinkFollower: Send + Sync {
    /// Fetch `url` with GET, following redirects, and return the final URL
    /// together with the response body.
    async fn follow(&self, url: &str) -> Result<FollowedLink>;

    /// Issue a HEAD request to `url`, following redirects, and return the
    /// final URL.
    async fn expand(&self, url: &str) -> Result<String>;
}
