//! Pagination continuations.
//!
//! A listing response advertises its next page in a `Link` header
//! (`<https://…/comments?before=…>; rel="next"`). The continuation keeps the
//! path and query of that URL so it can be replayed through
//! `Endpoint::infinite_scroll`, which merges the query on top of the wrapped
//! endpoint's own parameters.

use serde_json::Value;
use url::Url;

use crate::endpoint::Parameters;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continuation {
    path: String,
    query: Option<Vec<(String, String)>>,
}

impl Continuation {
    pub fn new(path: &str, query: Vec<(String, String)>) -> Self {
        Self {
            path: path.to_string(),
            query: Some(query),
        }
    }

    pub fn from_url(url: &Url) -> Self {
        Self {
            path: url.path().to_string(),
            query: url.query().map(|_| url.query_pairs().into_owned().collect()),
        }
    }

    /// Extract the `rel="next"` target from a `Link` header value.
    ///
    /// Targets are read between `<` and `>` before any splitting, so commas
    /// inside a URL do not break it apart.
    pub fn from_link_header(value: &str) -> Option<Self> {
        let mut rest = value;
        while let Some(start) = rest.find('<') {
            let after = &rest[start + 1..];
            let end = after.find('>')?;
            let target = &after[..end];
            let tail = &after[end + 1..];
            let params_end = tail.find('<').unwrap_or(tail.len());
            if is_next(&tail[..params_end]) {
                return Url::parse(target).ok().map(|url| Self::from_url(&url));
            }
            rest = &tail[params_end..];
        }
        None
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query pairs as parameters, or `None` when the URL had no query.
    /// A repeated key keeps its last value.
    pub fn parameters(&self) -> Option<Parameters> {
        let query = self.query.as_ref()?;
        let mut params = Parameters::new();
        for (key, value) in query {
            params.insert(key.clone(), Value::String(value.clone()));
        }
        Some(params)
    }
}

/// Whether a link's `;`-separated params include `rel="next"`.
fn is_next(params: &str) -> bool {
    params
        .trim()
        .trim_end_matches(',')
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("rel="))
        .any(|rel| rel.trim_matches('"').split_whitespace().any(|r| r == "next"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn picks_next_link() {
        let header = r#"<https://ello.co/api/v2/posts/1/comments?before=abc>; rel="prev", <https://ello.co/api/v2/posts/1/comments?before=xyz&per_page=10>; rel="next""#;
        let next = Continuation::from_link_header(header).unwrap();
        assert_eq!(next.path(), "/api/v2/posts/1/comments");
        assert_eq!(
            Value::Object(next.parameters().unwrap()),
            json!({"before": "xyz", "per_page": "10"})
        );
    }

    #[test]
    fn next_link_may_contain_commas() {
        let header = r#"<https://ello.co/api/v2/post_views?ids=1,2&before=x>; rel="next""#;
        let next = Continuation::from_link_header(header).unwrap();
        assert_eq!(next.path(), "/api/v2/post_views");
        assert_eq!(
            Value::Object(next.parameters().unwrap()),
            json!({"ids": "1,2", "before": "x"})
        );

        let header = r#"<https://ello.co/a?ids=1,2>; rel="prev", <https://ello.co/b?ids=3,4>; rel="next""#;
        let next = Continuation::from_link_header(header).unwrap();
        assert_eq!(next.path(), "/b");
        assert_eq!(Value::Object(next.parameters().unwrap()), json!({"ids": "3,4"}));
    }

    #[test]
    fn missing_next_link_yields_none() {
        assert!(Continuation::from_link_header(r#"<https://ello.co/x>; rel="prev""#).is_none());
        assert!(Continuation::from_link_header("garbage").is_none());
    }

    #[test]
    fn url_without_query_has_no_parameters() {
        let url = Url::parse("https://ello.co/api/v2/following/posts/recent").unwrap();
        assert!(Continuation::from_url(&url).parameters().is_none());
    }
}
