//! Request origin extraction from HTTP headers.

use crate::error::LinkError;
use axum::http::{HeaderMap, header, uri::Authority};

pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
pub const X_FORWARDED_HOST: &str = "x-forwarded-host";
pub const X_FORWARDED_PREFIX: &str = "x-forwarded-prefix";

/// Extracts the authority (host and optional port) from the `Host` header.
///
/// Unlike a bare domain lookup, the port is kept: links must point back at
/// the same origin the client used.
///
/// # Errors
///
/// Returns [`LinkError::MissingHost`] if the header is missing or empty, and
/// [`LinkError::InvalidHeader`] if it is not valid UTF-8 or not a bare
/// `host[:port]` authority (paths, queries and userinfo are rejected).
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// assert_eq!(extract_host(&headers).unwrap(), "example.com:8080");
/// ```
pub fn extract_host(headers: &HeaderMap) -> Result<String, LinkError> {
    let host = headers
        .get(header::HOST)
        .ok_or(LinkError::MissingHost)?
        .to_str()
        .map_err(|_| LinkError::InvalidHeader("Host"))?
        .trim();

    if host.is_empty() {
        return Err(LinkError::MissingHost);
    }

    parse_authority(host).ok_or(LinkError::InvalidHeader("Host"))
}

/// Scheme announced by the proxy, if it is `http` or `https`.
pub fn forwarded_proto(headers: &HeaderMap) -> Option<String> {
    let proto = first_value(headers, X_FORWARDED_PROTO)?.to_ascii_lowercase();

    if proto == "http" || proto == "https" {
        Some(proto)
    } else {
        tracing::warn!("Ignoring unsupported X-Forwarded-Proto '{}'", proto);
        None
    }
}

/// Original host announced by the proxy (first entry of a chain).
pub fn forwarded_host(headers: &HeaderMap) -> Option<String> {
    let host = first_value(headers, X_FORWARDED_HOST)?;

    let authority = parse_authority(host);
    if authority.is_none() {
        tracing::warn!("Ignoring X-Forwarded-Host '{}' that is not a host[:port]", host);
    }
    authority
}

/// Normalizes `value` to `host[:port]`, or `None` if it is anything else.
pub fn parse_authority(value: &str) -> Option<String> {
    let authority = value.parse::<Authority>().ok()?;

    if authority.as_str().contains('@') || authority.host().is_empty() {
        return None;
    }

    Some(authority.as_str().to_string())
}

/// Path prefix stripped by the proxy, normalized to `/segment` without a
/// trailing slash.
pub fn forwarded_prefix(headers: &HeaderMap) -> Option<String> {
    let prefix = first_value(headers, X_FORWARDED_PREFIX)?;

    if !prefix.starts_with('/') {
        tracing::warn!("Ignoring X-Forwarded-Prefix '{}' without leading slash", prefix);
        return None;
    }

    let prefix = prefix.trim_end_matches('/');
    (!prefix.is_empty()).then(|| prefix.to_string())
}

/// First comma-separated, non-empty value of a header.
fn first_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let value = headers.get(name)?;
    let Ok(value) = value.to_str() else {
        tracing::warn!("Ignoring non UTF-8 {} header", name);
        return None;
    };

    value
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
