//! Maps link resolver service - core business logic

use std::sync::Arc;

use cartevv_domain::constants::SHORT_LINK_MARKER;
use cartevv_domain::{CartevvError, ResolvedLocation, ResolverStats, Result};
use tracing::{debug, error, warn};

use super::patterns::{match_body, match_direct_link, match_url, normalize_link};
use super::ports::LinkFollower;
use crate::resolve_metrics_ports::ResolveMetricsPort;

/// Best-effort resolver from maps links to coordinates.
///
/// Every call is a single attempt: no retries and no caching. Any failure
/// (malformed link, network error, no coordinates) collapses into `None` and
/// is counted once in the shared metrics.
pub struct MapsLinkResolver {
    follower: Arc<dyn LinkFollower>,
    metrics: Arc<dyn ResolveMetricsPort>,
}

impl MapsLinkResolver {
    /// Create a new resolver
    pub fn new(follower: Arc<dyn LinkFollower>, metrics: Arc<dyn ResolveMetricsPort>) -> Self {
        Self { follower, metrics }
    }

    /// Resolve `link` to coordinates and the URL they were found on.
    ///
    /// Well-formed links that already carry `@lat,lon` are answered without
    /// a network call. Otherwise the link is followed through its redirects
    /// and the final URL, then the page body, are searched.
    pub async fn resolve(&self, link: &str) -> Option<ResolvedLocation> {
        let url = normalize_link(link);

        if let Some(coordinates) = match_direct_link(&url) {
            debug!(%url, "coordinates found in link, skipping fetch");
            self.metrics.record_resolved();
            return Some(ResolvedLocation::new(coordinates, url));
        }

        let followed = match self.follower.follow(&url).await {
            Ok(followed) => followed,
            Err(err) => {
                self.metrics.record_unresolved();
                error!(link, error = %err, "maps link resolution failed");
                return None;
            }
        };

        let found = match_url(&followed.final_url)
            .or_else(|| followed.body.as_deref().and_then(match_body));

        match found {
            Some(coordinates) => {
                self.metrics.record_resolved();
                debug!(link, final_url = %followed.final_url, "maps link resolved");
                Some(ResolvedLocation::new(coordinates, followed.final_url))
            }
            None => {
                self.metrics.record_unresolved();
                warn!(link, final_url = %followed.final_url, "coordinates not found for maps link");
                None
            }
        }
    }

    /// Expand a shortened Google Maps link to its final URL.
    ///
    /// # Errors
    /// - `InvalidInput` if the link is not a shortened link
    /// - `Network` (or the adapter's mapping) if the request fails
    pub async fn expand(&self, link: &str) -> Result<String> {
        if !link.contains(SHORT_LINK_MARKER) {
            return Err(CartevvError::InvalidInput(
                "link is not a shortened Google Maps link".into(),
            ));
        }

        let url = normalize_link(link);
        let final_url = self.follower.expand(&url).await?;
        debug!(link, %final_url, "short link expanded");
        Ok(final_url)
    }

    /// Current resolver counters.
    pub fn stats(&self) -> ResolverStats {
        self.metrics.snapshot()
    }
}
