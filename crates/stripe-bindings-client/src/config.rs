//! Client configuration.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::StripeError;

/// Default Stripe API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com/v1";

/// Paths searched for a secrets file, relative to the working directory.
const SECRET_PATHS: [&str; 2] = [".secrets/stripe.json", "../.secrets/stripe.json"];

/// Configuration for [`StripeClient`](crate::StripeClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// Secret API key (`sk_test_...` or `sk_live_...`).
    pub api_key: String,

    /// API base URL, without a trailing slash (default: `https://api.stripe.com/v1`).
    pub api_base: String,

    /// Pinned API version sent as `Stripe-Version`. Account default when unset.
    pub api_version: Option<String>,

    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,

    /// Connect timeout in seconds (default: 10).
    pub connect_timeout_seconds: u64,

    /// `User-Agent` header value.
    pub user_agent: String,

    /// Generate an `Idempotency-Key` for POST requests that do not carry one.
    pub auto_idempotency_keys: bool,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("auto_idempotency_keys", &self.auto_idempotency_keys)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.into(),
            api_version: None,
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
            user_agent: concat!("stripe-bindings-rust/", env!("CARGO_PKG_VERSION")).into(),
            auto_idempotency_keys: false,
        }
    }
}

/// Stripe secrets file structure.
#[derive(Debug, Deserialize)]
struct StripeSecrets {
    api_key: String,
    #[serde(default)]
    api_base: Option<String>,
    #[serde(default)]
    api_version: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with defaults and the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Point the client at another base URL (a mock server, a proxy).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Pin the API version.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Generate idempotency keys for POST requests.
    #[must_use]
    pub fn with_auto_idempotency_keys(mut self, enabled: bool) -> Self {
        self.auto_idempotency_keys = enabled;
        self
    }

    /// Load configuration from a secrets file and environment variables.
    ///
    /// `.secrets/stripe.json` is read first; `STRIPE_API_KEY`,
    /// `STRIPE_API_BASE`, `STRIPE_API_VERSION` and `STRIPE_TIMEOUT_SECONDS`
    /// fill in or override its values.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Configuration`] when no API key is found.
    pub fn from_env() -> Result<Self, StripeError> {
        let paths: Vec<&Path> = SECRET_PATHS.iter().map(Path::new).collect();
        Self::from_sources(&paths, |name| std::env::var(name).ok())
    }

    /// Load configuration from the first readable secrets file in `paths`,
    /// then apply overrides looked up through `env`.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Configuration`] when no API key is found.
    pub fn from_sources<F>(paths: &[&Path], env: F) -> Result<Self, StripeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some((path, secrets)) = paths
            .iter()
            .find_map(|path| load_secrets_file::<StripeSecrets>(path).ok().map(|s| (path, s)))
        {
            tracing::info!(path = %path.display(), "Loaded Stripe secrets from file");
            config.api_key = secrets.api_key;
            if let Some(api_base) = secrets.api_base {
                config = config.with_api_base(api_base);
            }
            config.api_version = secrets.api_version;
        } else {
            tracing::debug!("Stripe secrets file not found, using environment variables");
        }

        if let Some(api_key) = env("STRIPE_API_KEY").filter(|k| !k.is_empty()) {
            config.api_key = api_key;
        }
        if let Some(api_base) = env("STRIPE_API_BASE") {
            config = config.with_api_base(api_base);
        }
        if let Some(version) = env("STRIPE_API_VERSION") {
            config.api_version = Some(version);
        }
        if let Some(timeout) = env("STRIPE_TIMEOUT_SECONDS").and_then(|s| s.parse().ok()) {
            config.timeout_seconds = timeout;
        }

        if config.api_key.is_empty() {
            return Err(StripeError::Configuration(
                "Stripe API key not configured (set STRIPE_API_KEY)".into(),
            ));
        }

        Ok(config)
    }
}

/// Load secrets from a JSON file.
fn load_secrets_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, std::io::Error> {
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Secrets file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Keep the key mode visible, hide the secret.
fn redact(key: &str) -> String {
    match key.get(..8) {
        Some(prefix) if key.len() > 8 => format!("{prefix}***"),
        _ if key.is_empty() => String::new(),
        _ => "***".to_string(),
    }
}
