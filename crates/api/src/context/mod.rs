//! Application context - dependency injection container

use std::sync::Arc;

use axum::http::HeaderValue;
use cartevv_core::{LinkFollower, MapsLinkResolver};
use cartevv_domain::{Config, Result};
use cartevv_infra::{HttpLinkFollower, ResolveMetrics};

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    /// Configuration the context was built from.
    pub config: Config,
    /// Shared maps link resolver.
    pub resolver: Arc<MapsLinkResolver>,
}

impl AppContext {
    /// Wire the production adapters from configuration.
    ///
    /// # Errors
    /// Returns an error if the outbound HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let follower = HttpLinkFollower::from_config(&config.resolver)?;
        Ok(Self::with_follower(config, Arc::new(follower)))
    }

    /// Wire the context around an explicit link follower.
    pub fn with_follower(config: Config, follower: Arc<dyn LinkFollower>) -> Self {
        let resolver = Arc::new(MapsLinkResolver::new(follower, Arc::new(ResolveMetrics::new())));

        tracing::info!(
            max_redirects = config.resolver.max_redirects,
            origins = config.server.allowed_origins.len(),
            "application context initialised"
        );

        Self { config, resolver }
    }

    /// Perform health check on all application components
    ///
    /// `config` fails when a CORS origin cannot be used as a header value.
    /// `resolver` fails when short links cannot be followed with its settings.
    pub fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new()
            .add_component(self.check_config_health())
            .add_component(self.check_resolver_health());

        status.calculate_score();

        status
    }

    fn check_config_health(&self) -> ComponentHealth {
        let invalid: Vec<&str> = self
            .config
            .server
            .allowed_origins
            .iter()
            .map(String::as_str)
            .filter(|origin| HeaderValue::from_str(origin).is_err())
            .collect();

        if invalid.is_empty() {
            ComponentHealth::healthy("config")
        } else {
            ComponentHealth::unhealthy("config", format!("invalid CORS origins: {}", invalid.join(", ")))
        }
    }

    fn check_resolver_health(&self) -> ComponentHealth {
        let resolver = &self.config.resolver;
        let mut problems = Vec::new();

        if resolver.max_redirects == 0 {
            problems.push("max_redirects is 0, short links cannot be followed".to_string());
        }
        if HeaderValue::from_str(&resolver.user_agent).is_err() {
            problems.push(format!("invalid user agent: {:?}", resolver.user_agent));
        }

        if problems.is_empty() {
            ComponentHealth::healthy("resolver")
        } else {
            ComponentHealth::unhealthy("resolver", problems.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_healthy() {
        let context = AppContext::new(Config::default()).expect("context");
        let health = context.health_check();

        assert!(health.is_healthy);
        assert_eq!(health.components.len(), 2);
    }

    #[test]
    fn invalid_origin_degrades_config_component() {
        let mut config = Config::default();
        config.server.allowed_origins.push("http://bad\norigin".into());

        let context = AppContext::new(config).expect("context");
        let health = context.health_check();

        let component = health.components.iter().find(|c| c.name == "config").unwrap();
        assert!(!component.is_healthy);
        assert!(component.message.as_deref().unwrap().contains("bad"));
    }

    #[test]
    fn zero_redirects_degrades_resolver_component() {
        let mut config = Config::default();
        config.resolver.max_redirects = 0;

        let context = AppContext::new(config).expect("context");
        let health = context.health_check();

        let component = health.components.iter().find(|c| c.name == "resolver").unwrap();
        assert!(!component.is_healthy);
        assert!(component.message.as_deref().unwrap().contains("max_redirects"));
        assert!(!health.is_healthy);
    }

    #[test]
    fn invalid_user_agent_degrades_resolver_component() {
        let mut config = Config::default();
        config.resolver.user_agent = "cartevv\nbroken".into();

        let follower: Arc<dyn LinkFollower> = Arc::new(
            HttpLinkFollower::from_config(&cartevv_domain::ResolverConfig::default())
                .expect("follower"),
        );
        let context = AppContext::with_follower(config, follower);
        let health = context.health_check();

        let component = health.components.iter().find(|c| c.name == "resolver").unwrap();
        assert!(!component.is_healthy);
        assert!(component.message.as_deref().unwrap().contains("user agent"));
    }
}
