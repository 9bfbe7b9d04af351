//! Link builders: sources of the URI a link points at.

use std::fmt::Display;

use url::Url;

use super::base_uri::BaseUri;
use crate::domain::Link;
use crate::error::LinkError;

/// Anything that can produce the URI a link should point at.
pub trait LinkBuilder {
    /// The target URI as a mutable set of components.
    fn to_uri_components(&self) -> Url;

    fn with_rel(&self, rel: &str) -> Link {
        Link::with_rel(self.to_uri_components(), rel)
    }

    fn with_self_rel(&self) -> Link {
        Link::new(self.to_uri_components())
    }
}

impl LinkBuilder for Url {
    fn to_uri_components(&self) -> Url {
        self.clone()
    }
}

/// A resource handler mounted under a fixed route prefix.
///
/// ```rust,ignore
/// struct ItemController;
///
/// impl Controller for ItemController {
///     const BASE_PATH: &'static str = "/items";
/// }
///
/// let builder = ControllerLinkBuilder::link_to::<ItemController>(&base);
/// ```
pub trait Controller {
    const BASE_PATH: &'static str;
}

/// Builds links rooted at a controller's mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerLinkBuilder {
    url: Url,
}

impl ControllerLinkBuilder {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Starts from the route prefix of `C` under the request's base URI.
    pub fn link_to<C: Controller>(base: &BaseUri) -> Self {
        Self::new(base.resolve(C::BASE_PATH))
    }

    /// Appends one percent-encoded path segment.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::CannotBeABase`] if the URI has no hierarchical path.
    pub fn slash(mut self, segment: impl Display) -> Result<Self, LinkError> {
        if self.url.cannot_be_a_base() {
            return Err(LinkError::CannotBeABase(self.url.into()));
        }
        if let Ok(mut segments) = self.url.path_segments_mut() {
            segments.pop_if_empty().push(&segment.to_string());
        }
        Ok(self)
    }
}

impl LinkBuilder for ControllerLinkBuilder {
    fn to_uri_components(&self) -> Url {
        self.url.clone()
    }
}
