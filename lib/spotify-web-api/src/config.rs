//! Settings of the [`HyperClient`](crate::HyperClient) transport.
//!
//! Timeouts cover a whole Web API call: a slow `api.spotify.com` answer
//! surfaces as [`Error::Timeout`](crate::Error::Timeout) once
//! [`ClientConfig::timeout`] elapses, whatever stage the exchange is in.

use std::time::Duration;

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("spotify-web-api-rs/", env!("CARGO_PKG_VERSION"));

/// Connection and timeout settings for calls to the Web API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Deadline for one call, from connecting to the last body byte.
    pub timeout: Duration,
    /// Deadline for establishing the TCP connection.
    pub connect_timeout: Duration,
    /// Idle keep-alive connections kept per host.
    pub pool_idle_per_host: usize,
    /// How long an idle connection stays in the pool.
    pub pool_idle_timeout: Duration,
    /// `User-Agent` header, unless the request sets its own.
    pub user_agent: String,
}

impl Default for ClientConfig {
    /// 30 s per call, 10 s to connect, 32 idle connections kept for 90 s.
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Start from the defaults and override what differs.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Overrides on top of [`ClientConfig::default`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Deadline for one call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Deadline for connecting.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Idle connections kept per host; `0` disables reuse.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config.pool_idle_per_host = count;
        self
    }

    /// How long idle connections are kept.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Identify the application, e.g. `playlist-lookup/1.0`.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// The resulting configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn defaults_identify_this_library() {
        let config = ClientConfig::default();

        check!(config.timeout == Duration::from_secs(30));
        check!(config.connect_timeout == Duration::from_secs(10));
        check!(config.user_agent.starts_with("spotify-web-api-rs/"));
        check!(ClientConfig::builder().build() == config);
    }

    #[test]
    fn overrides_keep_other_defaults() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_secs(5))
            .user_agent("playlist-lookup/1.0")
            .build();

        check!(config.timeout == Duration::from_secs(5));
        check!(config.user_agent == "playlist-lookup/1.0");
        check!(config.connect_timeout == Duration::from_secs(10));
        check!(config.pool_idle_per_host == 32);
        check!(config.pool_idle_timeout == Duration::from_secs(90));
    }

    #[test]
    fn pooling_can_be_disabled() {
        let config = ClientConfig::builder().pool_idle_per_host(0).build();
        check!(config.pool_idle_per_host == 0);
    }
}
