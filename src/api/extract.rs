//! Axum extractors for query parameters and the request base URI.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::config::Config;
use crate::domain::{QueryParams, RequestParameters};
use crate::error::LinkError;
use crate::links::BaseUri;

/// Extracts every query parameter, keeping order and repeated names.
///
/// Unlike `axum::extract::Query`, this never rejects: a request without a
/// query yields an empty map.
impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.parameter_map())
    }
}

/// Resolves the link root of the current request from the router's [`Config`].
///
/// # Example
///
/// ```rust,ignore
/// async fn list_items(base: BaseUri, params: QueryParams) -> Json<Links> {
///     let builder = ControllerLinkBuilder::link_to::<ItemController>(&base);
///     // ...
/// }
///
/// let app = Router::new()
///     .route("/items", get(list_items))
///     .with_state(config);
/// ```
impl<S> FromRequestParts<S> for BaseUri
where
    Config: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = LinkError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Config::from_ref(state);
        BaseUri::from_parts(parts, &config)
    }
}
