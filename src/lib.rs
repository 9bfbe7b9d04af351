//! # HATEOAS Links
//!
//! Query-parameter filtering and hypermedia link building for Axum REST
//! handlers.
//!
//! ## Layout
//!
//! - **Domain** ([`domain`]) - Query parameter maps, links, URI templates
//! - **Links** ([`links`]) - Base URI resolution, link builders, and the link utilities
//! - **API** ([`api`]) - Axum extractors
//! - **Utils** ([`utils`]) - Header parsing helpers
//!
//! ## Example
//!
//! ```rust,ignore
//! struct ItemController;
//!
//! impl Controller for ItemController {
//!     const BASE_PATH: &'static str = "/items";
//! }
//!
//! async fn list_items(base: BaseUri, uri: Uri) -> Json<Links> {
//!     let builder = ControllerLinkBuilder::link_to::<ItemController>(&base);
//!     let mut links = Links::new();
//!     links
//!         .add(create_link(&builder, &uri_params_excluding(&uri, &["debug"])))
//!         .add(create_templated_link(&builder, "search", &["q", "page"]));
//!     Json(links)
//! }
//! ```
//!
//! ## Configuration
//!
//! How the link root is resolved is controlled by [`config::Config`], usually
//! loaded with [`config::load_from_env`].

pub mod api;
pub mod domain;
pub mod error;
pub mod links;
pub mod utils;

pub mod config;

pub use error::LinkError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::{
        Link, Links, QueryParams, RequestParameters, TemplateVariable, TemplateVariables,
        UriTemplate, VariableType, rel,
    };
    pub use crate::error::LinkError;
    pub use crate::links::{
        BaseUri, Controller, ControllerLinkBuilder, LinkBuilder, create_link,
        create_template_vars, create_templated_link, create_templated_link_to, uri_params,
        uri_params_excluding, uri_params_including_only,
    };
}
