//! Read-only access to the parameters of an inbound request.

use axum::http::{Request, Uri, request::Parts};

use super::query_params::QueryParams;

/// Anything that carries an inbound request's query string.
///
/// Only the URI query is a parameter source; request bodies are never read.
pub trait RequestParameters {
    fn query_string(&self) -> Option<&str>;

    /// Decodes every query parameter, preserving order and multiplicity.
    fn parameter_map(&self) -> QueryParams {
        self.query_string()
            .map(QueryParams::from_query_str)
            .unwrap_or_default()
    }
}

impl RequestParameters for Uri {
    fn query_string(&self) -> Option<&str> {
        self.query()
    }
}

impl RequestParameters for Parts {
    fn query_string(&self) -> Option<&str> {
        self.uri.query()
    }
}

impl<B> RequestParameters for Request<B> {
    fn query_string(&self) -> Option<&str> {
        self.uri().query()
    }
}
