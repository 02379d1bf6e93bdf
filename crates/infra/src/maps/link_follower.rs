//! HTTP implementation of the link-following port

use async_trait::async_trait;
use cartevv_core::{FollowedLink, LinkFollower};
use cartevv_domain::{CartevvError, ResolverConfig, Result};
use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Follows maps links over HTTP, one attempt per call.
#[derive(Clone)]
pub struct HttpLinkFollower {
    client: HttpClient,
}

impl HttpLinkFollower {
    /// Wrap an already configured client.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build a follower from resolver configuration.
    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        let client = HttpClient::builder()
            .user_agent(config.user_agent.clone())
            .max_redirects(config.max_redirects)
            .build()?;
        Ok(Self::new(client))
    }

    fn parse(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|err| CartevvError::from(InfraError::from(err)))
    }
}

#[async_trait]
impl LinkFollower for HttpLinkFollower {
    async fn follow(&self, url: &str) -> Result<FollowedLink> {
        let url = Self::parse(url)?;
        let response = self.client.send(self.client.request(Method::GET, url)).await?;
        let final_url = response.url().to_string();

        let body = match response.text().await {
            Ok(text) => Some(text),
            Err(err) => {
                debug!(%final_url, error = %err, "response body unreadable, skipping body search");
                None
            }
        };

        Ok(FollowedLink { final_url, body })
    }

    async fn expand(&self, url: &str) -> Result<String> {
        let url = Self::parse(url)?;
        let response = self.client.send(self.client.request(Method::HEAD, url)).await?;
        Ok(response.url().to_string())
    }
}
