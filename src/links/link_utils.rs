//! Query-parameter extraction and link construction for resource handlers.
//!
//! Typical use inside a paginated list handler:
//!
//! ```rust,ignore
//! let params = uri_params_excluding(&uri, &["page"]);
//! let mut next = params.clone();
//! next.insert("page", vec![(page + 1).to_string()]);
//!
//! let mut links = Links::new();
//! links
//!     .add(create_link(&builder, &uri_params(&uri)))
//!     .add(create_link(&builder, &next).with_relation(rel::NEXT))
//!     .add(create_templated_link(&builder, "search", &["q", "page"]));
//! ```

use super::base_uri::BaseUri;
use super::builder::{Controller, ControllerLinkBuilder, LinkBuilder};
use crate::domain::{
    Link, QueryParams, RequestParameters, TemplateVariable, TemplateVariables, UriTemplate,
};

/// Creates a `self` link to the builder's URI with its query string replaced
/// by `uri_params`.
///
/// Existing query parameters of the builder URI are discarded, not merged.
/// Names and values are form-encoded; a name with no values is written as a
/// bare key. An empty map removes the query entirely.
pub fn create_link(link_builder: &impl LinkBuilder, uri_params: &QueryParams) -> Link {
    let mut url = link_builder.to_uri_components();
    url.set_query(None);

    if !uri_params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, values) in uri_params.iter() {
            if values.is_empty() {
                pairs.append_key_only(name);
            }
            for value in values {
                pairs.append_pair(name, value);
            }
        }
    }

    tracing::debug!(href = %url, "Created link");
    Link::new(url)
}

/// All query parameters of the request, in order, with every value.
pub fn uri_params(request: &impl RequestParameters) -> QueryParams {
    request.parameter_map()
}

/// Query parameters of the request restricted to `names`.
///
/// Names the request does not carry are skipped.
pub fn uri_params_including_only(request: &impl RequestParameters, names: &[&str]) -> QueryParams {
    uri_params(request).including_only(names)
}

/// Query parameters of the request without `names`.
pub fn uri_params_excluding(request: &impl RequestParameters, names: &[&str]) -> QueryParams {
    uri_params(request).excluding(names)
}

/// Creates a templated link to the builder's URI that declares `param_names`
/// as query-parameter placeholders.
///
/// With no names the href is the plain URI and the link is not templated.
pub fn create_templated_link(
    link_builder: &impl LinkBuilder,
    rel: &str,
    param_names: &[&str],
) -> Link {
    let template = UriTemplate::new(
        link_builder.to_uri_components(),
        create_template_vars(param_names),
    );

    tracing::debug!(rel, template = %template, "Created templated link");
    Link::templated(template, rel)
}

/// Same as [`create_templated_link`], rooted at the mapping of controller `C`.
pub fn create_templated_link_to<C: Controller>(
    base: &BaseUri,
    rel: &str,
    param_names: &[&str],
) -> Link {
    create_templated_link(&ControllerLinkBuilder::link_to::<C>(base), rel, param_names)
}

/// One query-parameter variable per name, in input order.
pub fn create_template_vars(param_names: &[&str]) -> TemplateVariables {
    param_names
        .iter()
        .map(|name| TemplateVariable::request_param(*name))
        .collect()
}
