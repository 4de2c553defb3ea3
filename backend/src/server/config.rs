//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use practice_tracker::domain::GoalTargets;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) goal_targets: GoalTargets,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration with default goal targets.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            goal_targets: GoalTargets::default(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Seed the goals repository with `targets` instead of the defaults.
    #[must_use]
    pub fn with_goal_targets(mut self, targets: GoalTargets) -> Self {
        self.goal_targets = targets;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
