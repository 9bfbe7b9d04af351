//! Hypermedia links and their HAL representation.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::query_params::QueryParams;
use super::template::UriTemplate;
use crate::error::LinkError;

/// Well-known link relations.
pub mod rel {
    pub const SELF: &str = "self";
    pub const NEXT: &str = "next";
    pub const PREV: &str = "prev";
    pub const FIRST: &str = "first";
    pub const LAST: &str = "last";
}

/// A URI plus the relation it has to the current resource.
///
/// A link is either concrete, or templated: its href then contains
/// placeholders the client fills in (see [`UriTemplate`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    rel: String,
    href: String,
    template: Option<UriTemplate>,
}

impl Link {
    /// Concrete link with the `self` relation.
    pub fn new(href: impl Into<String>) -> Self {
        Self::with_rel(href, rel::SELF)
    }

    pub fn with_rel(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            template: None,
        }
    }

    pub fn templated(template: UriTemplate, rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: template.to_string(),
            template: Some(template),
        }
    }

    /// The same link under another relation.
    pub fn with_relation(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn template(&self) -> Option<&UriTemplate> {
        self.template.as_ref()
    }

    pub fn is_templated(&self) -> bool {
        self.template
            .as_ref()
            .is_some_and(|template| !template.variables().is_empty())
    }

    pub fn variable_names(&self) -> Vec<&str> {
        self.template
            .as_ref()
            .map(UriTemplate::variable_names)
            .unwrap_or_default()
    }

    /// Resolves a templated link against `params`, keeping the relation.
    ///
    /// Concrete links come back unchanged.
    pub fn expand(&self, params: &QueryParams) -> Result<Link, LinkError> {
        match &self.template {
            Some(template) => Ok(Link::with_rel(template.expand(params)?, self.rel.clone())),
            None => Ok(self.clone()),
        }
    }
}

#[derive(Serialize)]
struct HalLink<'a> {
    href: &'a str,
    #[serde(skip_serializing_if = "is_false")]
    templated: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        HalLink {
            href: &self.href,
            templated: self.is_templated(),
        }
        .serialize(serializer)
    }
}

/// Links of one resource, keyed by relation.
///
/// Serializes as a HAL `_links` object. Adding a link whose relation is
/// already present replaces it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Links(IndexMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, link: Link) -> &mut Self {
        self.0.insert(link.rel.clone(), link);
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.get(rel)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Link> for Links {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        let mut links = Links::new();
        for link in iter {
            links.add(link);
        }
        links
    }
}
