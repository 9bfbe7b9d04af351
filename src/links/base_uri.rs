//! Root URI that links of the current request are built from.

use axum::http::request::Parts;
use url::Url;

use crate::config::Config;
use crate::error::LinkError;
use crate::utils::forwarded::{extract_host, forwarded_host, forwarded_prefix, forwarded_proto};

/// The externally visible root of the service for one request, e.g.
/// `https://api.example.com/v1/`.
///
/// Always ends with `/` so route paths can be appended to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUri(Url);

impl BaseUri {
    /// Wraps `url`, dropping any query or fragment.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::CannotBeABase`] for URIs without a hierarchical
    /// path (`mailto:`, `data:`).
    pub fn new(mut url: Url) -> Result<Self, LinkError> {
        if url.cannot_be_a_base() {
            return Err(LinkError::CannotBeABase(url.into()));
        }

        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self(url))
    }

    /// Resolves the root for an inbound request.
    ///
    /// Priority:
    /// 1. `public_base_url` from configuration
    /// 2. `X-Forwarded-*` headers, when `behind_proxy` is set
    /// 3. The request URI's scheme and authority, then the `Host` header
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingHost`] if no host can be determined and
    /// [`LinkError::InvalidBaseUri`] if the pieces do not form a valid URI.
    pub fn from_parts(parts: &Parts, config: &Config) -> Result<Self, LinkError> {
        if let Some(ref url) = config.public_base_url {
            return Self::new(url.clone());
        }

        let headers = &parts.headers;
        let (proxy_scheme, proxy_host, prefix) = if config.behind_proxy {
            (
                forwarded_proto(headers),
                forwarded_host(headers),
                forwarded_prefix(headers),
            )
        } else {
            (None, None, None)
        };

        let scheme = proxy_scheme
            .or_else(|| parts.uri.scheme_str().map(str::to_string))
            .unwrap_or_else(|| config.default_scheme.clone());

        let host = match proxy_host {
            Some(host) => host,
            None => match parts.uri.authority() {
                Some(authority) => match authority.port_u16() {
                    Some(port) => format!("{}:{}", authority.host(), port),
                    None => authority.host().to_string(),
                },
                None => extract_host(headers)?,
            },
        };

        let url = Url::parse(&format!(
            "{}://{}{}/",
            scheme,
            host,
            prefix.unwrap_or_default()
        ))?;

        tracing::debug!(base = %url, "Resolved request base URI");
        Self::new(url)
    }

    /// Appends a route path to the root, keeping any prefix.
    pub fn resolve(&self, path: &str) -> Url {
        let mut url = self.0.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(uri: &str, headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn proxied() -> Config {
        Config {
            behind_proxy: true,
            ..Config::default()
        }
    }

    #[test]
    fn test_from_host_header() {
        let parts = parts("/items?page=2", &[("host", "localhost:3000")]);

        let base = BaseUri::from_parts(&parts, &Config::default()).unwrap();

        assert_eq!(base.as_url().as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_absolute_request_uri_wins_over_host() {
        let parts = parts("https://api.example.com/items", &[("host", "internal:8080")]);

        let base = BaseUri::from_parts(&parts, &Config::default()).unwrap();

        assert_eq!(base.as_url().as_str(), "https://api.example.com/");
    }

    #[test]
    fn test_missing_host() {
        let parts = parts("/items", &[]);

        let result = BaseUri::from_parts(&parts, &Config::default());

        assert!(matches!(result, Err(LinkError::MissingHost)));
    }

    #[test]
    fn test_host_with_path_is_rejected() {
        let parts = parts("/items", &[("host", "example.com/evil?x")]);

        let result = BaseUri::from_parts(&parts, &Config::default());

        assert!(matches!(result, Err(LinkError::InvalidHeader("Host"))));
    }

    #[test]
    fn test_host_with_userinfo_is_rejected() {
        let parts = parts("/items", &[("host", "a@b")]);

        let result = BaseUri::from_parts(&parts, &Config::default());

        assert!(matches!(result, Err(LinkError::InvalidHeader("Host"))));
    }

    #[test]
    fn test_request_uri_userinfo_is_dropped() {
        let parts = parts("http://user@api.example.com:8080/items", &[]);

        let base = BaseUri::from_parts(&parts, &Config::default()).unwrap();

        assert_eq!(base.as_url().as_str(), "http://api.example.com:8080/");
    }

    #[test]
    fn test_malformed_forwarded_host_falls_back_to_host() {
        let parts = parts(
            "/items",
            &[("host", "app:8080"), ("x-forwarded-host", "evil.example.com/x")],
        );

        let base = BaseUri::from_parts(&parts, &proxied()).unwrap();

        assert_eq!(base.as_url().as_str(), "http://app:8080/");
    }

    #[test]
    fn test_public_base_url_takes_priority() {
        let config = Config {
            public_base_url: Some(Url::parse("https://api.example.com/v1").unwrap()),
            ..Config::default()
        };
        let parts = parts("/items", &[("host", "localhost:3000")]);

        let base = BaseUri::from_parts(&parts, &config).unwrap();

        assert_eq!(base.as_url().as_str(), "https://api.example.com/v1/");
    }

    #[test]
    fn test_forwarded_headers_behind_proxy() {
        let parts = parts(
            "/items",
            &[
                ("host", "app:8080"),
                ("x-forwarded-proto", "https"),
                ("x-forwarded-host", "api.example.com"),
                ("x-forwarded-prefix", "/shop"),
            ],
        );

        let base = BaseUri::from_parts(&parts, &proxied()).unwrap();

        assert_eq!(base.as_url().as_str(), "https://api.example.com/shop/");
    }

    #[test]
    fn test_forwarded_headers_ignored_without_proxy() {
        let parts = parts(
            "/items",
            &[("host", "app:8080"), ("x-forwarded-host", "evil.example.com")],
        );

        let base = BaseUri::from_parts(&parts, &Config::default()).unwrap();

        assert_eq!(base.as_url().as_str(), "http://app:8080/");
    }

    #[test]
    fn test_resolve_keeps_prefix() {
        let base = BaseUri::new(Url::parse("https://api.example.com/v1").unwrap()).unwrap();

        assert_eq!(base.resolve("/items").as_str(), "https://api.example.com/v1/items");
        assert_eq!(base.resolve("items").as_str(), "https://api.example.com/v1/items");
    }

    #[test]
    fn test_new_strips_query_and_fragment() {
        let base = BaseUri::new(Url::parse("http://localhost/api?x=1#top").unwrap()).unwrap();

        assert_eq!(base.as_url().as_str(), "http://localhost/api/");
    }

    #[test]
    fn test_new_rejects_cannot_be_a_base() {
        let result = BaseUri::new(Url::parse("mailto:someone@example.com").unwrap());

        assert!(matches!(result, Err(LinkError::CannotBeABase(_))));
    }
}
