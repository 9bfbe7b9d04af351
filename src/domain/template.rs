//! URI templates with named placeholders (RFC 6570 subset).
//!
//! A template is a concrete base URI followed by one or more expressions,
//! e.g. `https://api.example.com/items{?q,page}`. Consecutive variables of the
//! same kind share one expression. A fragment of the base is kept after the
//! expressions: `https://api.example.com/items{?q}#top`.
//!
//! Expanded values are percent-encoded as in RFC 6570 form-style expansion
//! (a space becomes `%20`), except that `*` is left as-is and `~` is escaped.

use std::fmt;

use url::{Url, form_urlencoded};

use super::query_params::QueryParams;
use crate::error::LinkError;

/// Where a template variable is placed when the template is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// Starts the query string: `{?name}`.
    RequestParam,
    /// Continues an existing query string: `{&name}`.
    RequestParamContinued,
    /// Appends a path segment: `{/name}`.
    Segment,
    /// Sets the fragment: `{#name}`.
    Fragment,
}

impl VariableType {
    pub fn operator(self) -> char {
        match self {
            VariableType::RequestParam => '?',
            VariableType::RequestParamContinued => '&',
            VariableType::Segment => '/',
            VariableType::Fragment => '#',
        }
    }

    pub fn is_request_param(self) -> bool {
        matches!(
            self,
            VariableType::RequestParam | VariableType::RequestParamContinued
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariable {
    name: String,
    kind: VariableType,
}

impl TemplateVariable {
    pub fn new(name: impl Into<String>, kind: VariableType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn request_param(name: impl Into<String>) -> Self {
        Self::new(name, VariableType::RequestParam)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VariableType {
        self.kind
    }
}

/// Ordered list of template variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVariables(Vec<TemplateVariable>);

impl TemplateVariables {
    pub fn new(variables: Vec<TemplateVariable>) -> Self {
        Self(variables)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateVariable> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(TemplateVariable::name).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rewrites query-starting variables so they continue an existing query.
    fn continued(self) -> Self {
        self.0
            .into_iter()
            .map(|variable| {
                if variable.kind.is_request_param() {
                    TemplateVariable {
                        kind: VariableType::RequestParamContinued,
                        ..variable
                    }
                } else {
                    variable
                }
            })
            .collect()
    }
}

impl FromIterator<TemplateVariable> for TemplateVariables {
    fn from_iter<I: IntoIterator<Item = TemplateVariable>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TemplateVariables {
    type Item = &'a TemplateVariable;
    type IntoIter = std::slice::Iter<'a, TemplateVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TemplateVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current: Option<VariableType> = None;

        for variable in &self.0 {
            match current {
                Some(kind) if kind == variable.kind => write!(f, ",{}", variable.name)?,
                Some(_) => write!(f, "}}{{{}{}", variable.kind.operator(), variable.name)?,
                None => write!(f, "{{{}{}", variable.kind.operator(), variable.name)?,
            }
            current = Some(variable.kind);
        }

        if current.is_some() {
            f.write_str("}")?;
        }
        Ok(())
    }
}

/// A base URI plus the variables a client may fill in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    base: String,
    fragment: Option<String>,
    variables: TemplateVariables,
}

impl UriTemplate {
    /// Builds a template over `base`.
    ///
    /// A fragment of `base` is split off and rendered after the expressions.
    /// When `base` already has a query string, request-parameter variables
    /// render as `{&...}` so the expanded URI stays well-formed.
    pub fn new(base: impl Into<String>, variables: TemplateVariables) -> Self {
        let mut base = base.into();
        let fragment = base.find('#').map(|at| {
            let fragment = base[at + 1..].to_string();
            base.truncate(at);
            fragment
        });

        let variables = if base.contains('?') {
            variables.continued()
        } else {
            variables
        };

        Self {
            base,
            fragment,
            variables,
        }
    }

    /// The base URI without its fragment.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn variables(&self) -> &TemplateVariables {
        &self.variables
    }

    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.names()
    }

    /// Fills the template from `params`.
    ///
    /// Variables with no values in `params` are left out. Request parameters
    /// carry every value; segments join multiple values with `,`; fragments
    /// take the first value and replace the base's fragment.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidBaseUri`] if the base does not parse and
    /// [`LinkError::CannotBeABase`] if a segment is added to a URI without a
    /// path (e.g. `mailto:`).
    pub fn expand(&self, params: &QueryParams) -> Result<Url, LinkError> {
        let mut url = Url::parse(&self.base)?;
        url.set_fragment(self.fragment.as_deref());
        let mut pairs = Vec::new();

        for variable in &self.variables {
            let Some(values) = params.get(variable.name()).filter(|v| !v.is_empty()) else {
                continue;
            };

            match variable.kind() {
                VariableType::RequestParam | VariableType::RequestParamContinued => {
                    let name = encode_component(variable.name());
                    for value in values {
                        pairs.push(format!("{}={}", name, encode_component(value)));
                    }
                }
                VariableType::Segment => {
                    url.path_segments_mut()
                        .map_err(|_| LinkError::CannotBeABase(self.base.clone()))?
                        .pop_if_empty()
                        .push(&values.join(","));
                }
                VariableType::Fragment => url.set_fragment(Some(&values[0])),
            }
        }

        if !pairs.is_empty() {
            let query = match url.query() {
                Some(existing) if !existing.is_empty() => {
                    format!("{}&{}", existing, pairs.join("&"))
                }
                _ => pairs.join("&"),
            };
            url.set_query(Some(&query));
        }

        tracing::debug!(template = %self, expanded = %url, "Expanded URI template");
        Ok(url)
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.variables)?;
        if let Some(ref fragment) = self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

/// Percent-encodes a query name or value, with `%20` for spaces.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
