//! Link construction for resource handlers.
//!
//! - [`base_uri`] - Externally visible root of the current request
//! - [`builder`] - Link builders and controller mappings
//! - [`link_utils`] - Query-parameter filtering and link creation

pub mod base_uri;
pub mod builder;
pub mod link_utils;

pub use base_uri::BaseUri;
pub use builder::{Controller, ControllerLinkBuilder, LinkBuilder};
pub use link_utils::{
    create_link, create_template_vars, create_templated_link, create_templated_link_to,
    uri_params, uri_params_excluding, uri_params_including_only,
};
