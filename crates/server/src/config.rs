//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_STORE` - Shopify store domain (e.g., your-store.myshopify.com)
//! - `SHOPIFY_ACCESS_TOKEN` - Shopify Admin API access token (HIGH PRIVILEGE)
//!
//! ## Optional
//! - `SHOPIFY_API_VERSION` - API version (default: 2026-01)
//! - `LOG_FORMAT` - `text` or `json` (default: text). Logs always go to stderr.
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment (e.g., "production")
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//!
//! Configuration is resolved once at startup. A missing or invalid store
//! domain or token is fatal: the MCP server is never started without them.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DEFAULT_API_VERSION: &str = "2026-01";
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "your_",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per line, for log shippers.
    Json,
}

/// MCP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shopify Admin API configuration
    pub shopify: ShopifyConfig,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry configuration (optional)
    pub sentry: Option<SentryConfig>,
}

/// Shopify Admin API configuration.
///
/// Implements `Debug` manually to redact the HIGH PRIVILEGE access token.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Shopify store domain (e.g., your-store.myshopify.com)
    pub store: String,
    /// Shopify API version (e.g., 2026-01)
    pub api_version: String,
    /// Admin API access token (HIGH PRIVILEGE - full store access)
    pub access_token: SecretString,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Sentry error tracking configuration.
#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry DSN
    pub dsn: String,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sample_rate: f32,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the access token fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(&std::env::vars().collect())
    }

    /// Load configuration from an explicit variable map.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let shopify = ShopifyConfig::from_vars(vars)?;

        let log_format = match get_optional_env(vars, "LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "LOG_FORMAT".to_string(),
                    format!("expected 'text' or 'json', got '{other}'"),
                ));
            }
        };

        let sentry = get_optional_env(vars, "SENTRY_DSN").map(|dsn| SentryConfig {
            dsn,
            environment: get_optional_env(vars, "SENTRY_ENVIRONMENT"),
            sample_rate: get_optional_env(vars, "SENTRY_SAMPLE_RATE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1.0),
        });

        Ok(Self {
            shopify,
            log_format,
            sentry,
        })
    }
}

impl ShopifyConfig {
    fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let store = get_required_env(vars, "SHOPIFY_STORE")?;
        validate_store_domain(&store, "SHOPIFY_STORE")?;

        let api_version = get_env_or_default(vars, "SHOPIFY_API_VERSION", DEFAULT_API_VERSION);
        validate_api_version(&api_version, "SHOPIFY_API_VERSION")?;

        Ok(Self {
            store,
            api_version,
            access_token: get_validated_secret(vars, "SHOPIFY_ACCESS_TOKEN")?,
        })
    }

    /// Admin GraphQL endpoint for this store and API version.
    ///
    /// # Errors
    ///
    /// Returns an error if the store domain does not form a valid URL.
    pub fn graphql_endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "https://{}/admin/api/{}/graphql.json",
            self.store, self.api_version
        ))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable. Blank values count as missing.
fn get_required_env(vars: &HashMap<String, String>, key: &str) -> Result<String, ConfigError> {
    get_optional_env(vars, key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable, trimmed.
fn get_optional_env(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    get_optional_env(vars, key).unwrap_or_else(|| default.to_string())
}

/// Get a required secret and validate it is not a placeholder.
fn get_validated_secret(
    vars: &HashMap<String, String>,
    key: &str,
) -> Result<SecretString, ConfigError> {
    let secret = SecretString::from(get_required_env(vars, key)?);
    validate_secret_strength(secret.expose_secret(), key)?;
    Ok(secret)
}

/// Validate that the store is a bare host name (no scheme, port or path).
fn validate_store_domain(store: &str, var_name: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| {
        Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            reason.to_string(),
        ))
    };

    if store.contains("://") {
        return invalid("must be a bare domain without a scheme (e.g., your-store.myshopify.com)");
    }
    if store.chars().any(char::is_whitespace) {
        return invalid("must not contain whitespace");
    }
    if store.contains([':', '/', '?', '#', '@']) {
        return invalid("must be a bare domain without a port or path");
    }

    match Url::parse(&format!("https://{store}/")) {
        Ok(url)
            if url
                .host_str()
                .is_some_and(|host| host.eq_ignore_ascii_case(store)) =>
        {
            Ok(())
        }
        Ok(_) => invalid("must be a bare domain name"),
        Err(e) => invalid(&e.to_string()),
    }
}

/// Validate a Shopify API version: `YYYY-MM` or `unstable`.
fn validate_api_version(version: &str, var_name: &str) -> Result<(), ConfigError> {
    if version == "unstable" {
        return Ok(());
    }

    let valid = version
        .split_once('-')
        .filter(|(year, month)| {
            year.len() == 4
                && month.len() == 2
                && year.chars().all(|c| c.is_ascii_digit())
                && month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
        })
        .is_some();

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected YYYY-MM or 'unstable', got '{version}'"),
        ))
    }
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real access tokens are random hex)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use the token generated by Shopify."
            ),
        ));
    }

    Ok(())
}
