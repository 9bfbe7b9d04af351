//! Link resolution settings loaded from environment variables.
//!
//! Links are rooted at the URI the client used to reach the service. Behind a
//! reverse proxy that URI differs from what the service sees, so the root can
//! either come from trusted `X-Forwarded-*` headers or be pinned outright.
//!
//! ## Variables
//!
//! - `PUBLIC_BASE_URL` - Fixed root for every link, e.g. `https://api.example.com/v1`
//!   (optional; takes priority over request headers)
//! - `BEHIND_PROXY` - Honor `X-Forwarded-Proto`, `X-Forwarded-Host` and
//!   `X-Forwarded-Prefix` (`true`/`1`, default: `false`)
//! - `DEFAULT_SCHEME` - Scheme used when the request carries none: `http` or
//!   `https` (default: `http`)
//!
//! ```bash
//! export PUBLIC_BASE_URL="https://api.example.com/v1"
//! export BEHIND_PROXY=true
//! ```

use anyhow::{Context, Result};
use std::env;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Pinned link root. When set, request headers are not consulted.
    pub public_base_url: Option<Url>,
    /// When true, forwarded headers override `Host` and the request scheme.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub default_scheme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_base_url: None,
            behind_proxy: false,
            default_scheme: "http".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PUBLIC_BASE_URL` is set but is not a valid URL.
    pub fn from_env() -> Result<Self> {
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| Url::parse(&v).with_context(|| format!("Invalid PUBLIC_BASE_URL '{v}'")))
            .transpose()?;

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let default_scheme = env::var("DEFAULT_SCHEME")
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_else(|_| "http".to_string());

        Ok(Self {
            public_base_url,
            behind_proxy,
            default_scheme,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default_scheme` is not `http` or `https`
    /// - `public_base_url` is not an absolute HTTP(S) URL with a path
    pub fn validate(&self) -> Result<()> {
        if self.default_scheme != "http" && self.default_scheme != "https" {
            anyhow::bail!(
                "DEFAULT_SCHEME must be 'http' or 'https', got '{}'",
                self.default_scheme
            );
        }

        if let Some(ref url) = self.public_base_url {
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!(
                    "PUBLIC_BASE_URL must start with 'http://' or 'https://', got '{}'",
                    url
                );
            }
            if url.cannot_be_a_base() || url.host().is_none() {
                anyhow::bail!("PUBLIC_BASE_URL must include a host, got '{}'", url);
            }
            if url.query().is_some() || url.fragment().is_some() {
                anyhow::bail!(
                    "PUBLIC_BASE_URL must not carry a query or fragment, got '{}'",
                    url
                );
            }
        }

        Ok(())
    }

    /// Logs the effective settings.
    pub fn print_summary(&self) {
        tracing::info!("Link configuration loaded:");
        match self.public_base_url {
            Some(ref url) => tracing::info!("  Public base URL: {}", url),
            None => tracing::info!("  Public base URL: from request"),
        }
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Default scheme: {}", self.default_scheme);
    }
}

/// Loads `.env` (if present), then reads and validates the configuration.
///
/// # Errors
///
/// Returns an error if a variable fails to parse or validation fails.
pub fn load_from_env() -> Result<Config> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
