//! Ordered, multi-valued query parameter map.

use indexmap::IndexMap;
use serde::Serialize;
use url::form_urlencoded;

/// Query parameters keyed by name, each name holding its values in the order
/// they appeared.
///
/// Names are unique and keep first-appearance order. Filtering operations
/// never touch `self`: they build a new map with cloned value lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(IndexMap<String, Vec<String>>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` query string.
    ///
    /// `+` decodes to a space and a bare `name` (no `=`) yields an empty value.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let params = QueryParams::from_query_str("sort=asc&q=hello&sort=desc");
    /// assert_eq!(params.get("sort").unwrap(), &["asc", "desc"]);
    /// ```
    pub fn from_query_str(query: &str) -> Self {
        let mut params = Self::new();
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            params.add(name.into_owned(), value.into_owned());
        }
        params
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Replaces all values of `name`, returning the previous ones.
    ///
    /// A new name goes to the end; an existing name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(name.into(), values)
    }

    /// Appends one value to `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// Removes `name`, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.0.shift_remove(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries whose name is listed in `names`, in this map's order.
    ///
    /// Listed names that are absent here are skipped.
    pub fn including_only(&self, names: &[&str]) -> Self {
        self.0
            .iter()
            .filter(|(name, _)| names.contains(&name.as_str()))
            .map(|(name, values)| (name.clone(), values.clone()))
            .collect()
    }

    /// Entries whose name is not listed in `names`, in this map's order.
    pub fn excluding(&self, names: &[&str]) -> Self {
        self.0
            .iter()
            .filter(|(name, _)| !names.contains(&name.as_str()))
            .map(|(name, values)| (name.clone(), values.clone()))
            .collect()
    }
}

impl FromIterator<(String, Vec<String>)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QueryParams {
        QueryParams::from_query_str("q=hello&page=2&sort=asc&sort=desc")
    }

    #[test]
    fn test_parse_preserves_order_and_multiplicity() {
        let params = sample();

        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["q", "page", "sort"]);
        assert_eq!(params.get("sort").unwrap(), &["asc", "desc"]);
        assert_eq!(params.get_first("q"), Some("hello"));
    }

    #[test]
    fn test_parse_decodes_values() {
        let params = QueryParams::from_query_str("q=hello+world&name=caf%C3%A9&flag");

        assert_eq!(params.get_first("q"), Some("hello world"));
        assert_eq!(params.get_first("name"), Some("café"));
        assert_eq!(params.get_first("flag"), Some(""));
    }

    #[test]
    fn test_parse_empty_query() {
        assert!(QueryParams::from_query_str("").is_empty());
    }

    #[test]
    fn test_interleaved_names_group_under_first_position() {
        let params = QueryParams::from_query_str("a=1&b=2&a=3");

        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(params.get("a").unwrap(), &["1", "3"]);
    }

    #[test]
    fn test_including_only() {
        let params = sample();

        let result = params.including_only(&["q", "page"]);

        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["q", "page"]);
        assert_eq!(result.get("q").unwrap(), &["hello"]);
        assert_eq!(result.get("page").unwrap(), &["2"]);
    }

    #[test]
    fn test_including_only_keeps_source_order() {
        let result = sample().including_only(&["sort", "q"]);

        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["q", "sort"]);
    }

    #[test]
    fn test_including_only_skips_absent_names() {
        let result = sample().including_only(&["q", "missing"]);

        assert_eq!(result.len(), 1);
        assert!(!result.contains_key("missing"));
    }

    #[test]
    fn test_excluding() {
        let result = sample().excluding(&["sort"]);

        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["q", "page"]);
    }

    #[test]
    fn test_excluding_absent_name_is_noop() {
        let params = sample();

        let result = params.excluding(&["missing"]);

        assert_eq!(result, params);
    }

    #[test]
    fn test_filters_partition_the_source() {
        let params = sample();
        let names = ["page", "sort"];

        let included = params.including_only(&names);
        let excluded = params.excluding(&names);

        assert_eq!(included.len() + excluded.len(), params.len());
        for (name, values) in params.iter() {
            let found = included.get(name).or_else(|| excluded.get(name));
            assert_eq!(found, Some(values));
        }
    }

    #[test]
    fn test_filtering_copies_values() {
        let params = sample();
        let mut copy = params.including_only(&["sort"]);

        copy.add("sort", "none");

        assert_eq!(params.get("sort").unwrap(), &["asc", "desc"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = sample();

        let previous = params.insert("q", vec!["bye".to_string()]);

        assert_eq!(previous, Some(vec!["hello".to_string()]));
        assert_eq!(params.keys().next(), Some("q"));
        assert_eq!(params.get_first("q"), Some("bye"));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut params = sample();

        params.remove("q");

        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["page", "sort"]);
    }

    #[test]
    fn test_serializes_as_object_of_arrays() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"q": ["hello"], "page": ["2"], "sort": ["asc", "desc"]})
        );
    }
}
