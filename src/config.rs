use std::time::Duration;

/// Default API endpoint (Ishikari first zone). The DNS service is shared
/// across regions, so any regional endpoint works.
pub const DEFAULT_ENDPOINT: &str = "https://secure.sakura.ad.jp/cloud/zone/is1a/api/cloud/1.1";

/// Fixed per-request timeout applied by the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the CommonServiceItem API.
#[derive(Clone)]
pub struct ApiConfig {
    pub access_token: String,
    pub access_token_secret: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(access_token: impl Into<String>, access_token_secret: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let config = ApiConfig::new("token", "secret");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn builder_overrides() {
        let config = ApiConfig::new("token", "secret")
            .with_endpoint("https://example.invalid/api")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.endpoint, "https://example.invalid/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
