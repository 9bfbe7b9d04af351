//! Core link and query-parameter types.
//!
//! - [`query_params`] - Ordered, multi-valued query parameter map
//! - [`request`] - Parameter access on inbound requests
//! - [`template`] - URI templates and their variables
//! - [`link`] - Concrete and templated hypermedia links

pub mod link;
pub mod query_params;
pub mod request;
pub mod template;

pub use link::{Link, Links, rel};
pub use query_params::QueryParams;
pub use request::RequestParameters;
pub use template::{TemplateVariable, TemplateVariables, UriTemplate, VariableType};
