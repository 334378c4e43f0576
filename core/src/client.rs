//! Stateless request builder and response checker for the catalog.
//!
//! # Design
//! `ApiClient` holds only a `ClientConfig` and carries no mutable state
//! between calls. `build` turns an `Endpoint` plus a credential snapshot into
//! an `HttpRequest`; the caller performs the round-trip and hands the
//! `HttpResponse` back to `check_status` and `next_page`. Every endpoint is
//! resolved against the configured base URL, decorators included.
//!
//! `stubbed_response` answers any endpoint from its bundled fixture so
//! hosts can run offline against the same request shapes.

use tracing::{debug, trace};
use url::Url;

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, Parameters};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, ParameterEncoding};
use crate::paging::Continuation;
use crate::query::encode_query;

/// Cursor advertised by stubbed comment listings.
const STUB_NEXT_CURSOR: &str = "before=2014-06-03T00%3A00%3A00.000000000%2B0000";

#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL of `endpoint` without parameters.
    pub fn url(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!(
            "{}{}",
            self.config.base_url(),
            endpoint.path()
        ))?)
    }

    pub fn build(&self, endpoint: &Endpoint, credentials: &Credentials) -> Result<HttpRequest, ApiError> {
        let mut url = self.url(endpoint)?;
        let params = endpoint.parameters(&self.config);
        let method = endpoint.method();

        let body = match endpoint.parameter_encoding() {
            ParameterEncoding::Query => {
                if let Some(params) = params.filter(|p| !p.is_empty()) {
                    url.set_query(Some(&encode_query(&params)));
                }
                None
            }
            ParameterEncoding::JsonBody => {
                Some(serde_json::to_string(&params.unwrap_or_else(Parameters::new))?)
            }
        };

        trace!(
            method = %method,
            url = %url,
            mapping = %endpoint.mapping_type(),
            "built request"
        );

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers: endpoint.headers(&self.config, credentials),
            body,
        })
    }

    /// A canned 200 response carrying the endpoint's fixture.
    pub fn stubbed_response(&self, endpoint: &Endpoint) -> HttpResponse {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Endpoint::PostComments { .. } = endpoint {
            let target = format!("{}{}", self.config.base_url(), endpoint.path());
            headers.push((
                "Link".to_string(),
                format!("<{target}?{STUB_NEXT_CURSOR}>; rel=\"next\""),
            ));
        }
        HttpResponse {
            status: 200,
            headers,
            body: endpoint.sample_data().to_string(),
        }
    }

    /// The endpoint that loads the page after `response`, if the response
    /// advertises one. Scrolling an already-scrolled endpoint replaces its
    /// continuation instead of nesting another decorator. When the endpoint
    /// is already as deep as nesting allows, the innermost plain endpoint is
    /// scrolled instead.
    pub fn next_page(&self, endpoint: &Endpoint, response: &HttpResponse) -> Option<Endpoint> {
        let continuation = Continuation::from_link_header(response.header("Link")?)?;
        let api = match endpoint {
            Endpoint::InfiniteScroll(scroll) => scroll.api(),
            other => other,
        };
        match Endpoint::infinite_scroll(continuation.clone(), api.clone()) {
            Ok(next) => Some(next),
            Err(err) => {
                debug!(%err, "scrolling the innermost endpoint");
                let mut plain = api;
                while let Some(inner) = plain.wrapped() {
                    plain = inner;
                }
                Endpoint::infinite_scroll(continuation, plain.clone()).ok()
            }
        }
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
pub fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::{json, Value};

    use super::*;
    use crate::auth::AuthToken;
    use crate::endpoint::MappingType;
    use crate::http::HttpMethod;
    use crate::request::RequestDescriptor;

    fn client() -> ApiClient {
        ApiClient::new(ClientConfig::new("http://localhost:3000"))
    }

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: "oops".to_string(),
        }
    }

    #[test]
    fn get_parameters_go_in_query() {
        let endpoint = Endpoint::SearchForUsers {
            terms: "cats".to_string(),
        };
        let req = client().build(&endpoint, &Credentials::none()).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "http://localhost:3000/api/v2/users?per_page=10&terms=cats"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn custom_request_get_uses_url_query() {
        let url = Url::parse("https://ello.co/api/v2/posts?terms=cats").unwrap();
        let request = RequestDescriptor::new(url, HttpMethod::Get, None);
        let search = Endpoint::SearchForPosts {
            terms: "ignored".to_string(),
        };
        let endpoint = Endpoint::custom_request(request, search.clone()).unwrap();
        assert_eq!(endpoint.mapping_type(), search.mapping_type());

        let req = client().build(&endpoint, &Credentials::none()).unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/v2/posts?terms=cats");
    }

    #[test]
    fn get_without_parameters_has_bare_url() {
        let req = client()
            .build(&Endpoint::Editorials, &Credentials::none())
            .unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/v2/editorials");
        assert!(req.body.is_none());
    }

    #[test]
    fn body_encoded_without_parameters_sends_empty_object() {
        let endpoint = Endpoint::DeletePost {
            post_id: "7".to_string(),
        };
        let req = client().build(&endpoint, &Credentials::none()).unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/api/v2/posts/7");
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[test]
    fn body_encoded_parameters_are_json() {
        let endpoint = Endpoint::Availability {
            content: BTreeMap::from([("username".to_string(), "bob".to_string())]),
        };
        let req = client().build(&endpoint, &Credentials::none()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"username": "bob"}));
    }

    #[test]
    fn custom_request_get_mimicking_search() {
        let url = Url::parse("https://ello.co/api/v2/posts").unwrap();
        let request = RequestDescriptor::new(
            url,
            HttpMethod::Get,
            Some(BTreeMap::from([("terms".to_string(), "cats".to_string())])),
        );
        let endpoint = Endpoint::custom_request(
            request,
            Endpoint::SearchForPosts {
                terms: "ignored".to_string(),
            },
        )
        .unwrap();
        assert_eq!(endpoint.mapping_type(), MappingType::Posts);

        let req = client().build(&endpoint, &Credentials::none()).unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/v2/posts?terms=cats");
        assert!(req.body.is_none());
    }

    #[test]
    fn headers_carry_bearer_token() {
        let credentials = Credentials::with_token(AuthToken::user("abc"));
        let req = client().build(&Endpoint::Following, &credentials).unwrap();
        assert_eq!(req.header("authorization"), Some("Bearer abc"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:3000/"));
        let req = client.build(&Endpoint::Categories, &Credentials::none()).unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/v2/categories?meta=1");
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let client = ApiClient::new(ClientConfig::new("not a url"));
        let err = client
            .build(&Endpoint::Categories, &Credentials::none())
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn check_status_maps_codes() {
        assert!(check_status(&response(200)).is_ok());
        assert!(check_status(&response(204)).is_ok());
        assert!(matches!(
            check_status(&response(401)),
            Err(ApiError::Unauthorized)
        ));
        assert!(matches!(
            check_status(&response(404)),
            Err(ApiError::NotFound)
        ));
        assert!(matches!(
            check_status(&response(500)),
            Err(ApiError::HttpError { status: 500, .. })
        ));
    }

    #[test]
    fn stubbed_comments_advertise_next_page() {
        let endpoint = Endpoint::PostComments {
            post_id: "1".to_string(),
        };
        let stub = client().stubbed_response(&endpoint);
        assert_eq!(stub.status, 200);
        assert_eq!(
            stub.header("Link"),
            Some("<http://localhost:3000/api/v2/posts/1/comments?before=2014-06-03T00%3A00%3A00.000000000%2B0000>; rel=\"next\"")
        );
        assert!(serde_json::from_str::<Value>(&stub.body).is_ok());
    }

    #[test]
    fn stubbed_response_without_link() {
        let stub = client().stubbed_response(&Endpoint::Categories);
        assert!(stub.header("Link").is_none());
    }

    #[test]
    fn next_page_wraps_endpoint_in_infinite_scroll() {
        let endpoint = Endpoint::PostComments {
            post_id: "1".to_string(),
        };
        let stub = client().stubbed_response(&endpoint);
        let next = client().next_page(&endpoint, &stub).unwrap();
        assert_eq!(next.wrapped(), Some(&endpoint));
        assert_eq!(next.decorator_depth(), 1);

        let req = client().build(&next, &Credentials::none()).unwrap();
        let url = Url::parse(&req.url).unwrap();
        let query: BTreeMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(
            query.get("before").map(String::as_str),
            Some("2014-06-03T00:00:00.000000000+0000")
        );
        assert_eq!(query.get("per_page").map(String::as_str), Some("10"));

        let again = client().next_page(&next, &stub).unwrap();
        assert_eq!(again.decorator_depth(), 1);
    }

    #[test]
    fn next_page_at_nesting_limit_scrolls_innermost() {
        let comments = Endpoint::PostComments {
            post_id: "1".to_string(),
        };
        let url = Url::parse("https://ello.co/api/v2/posts/1/comments").unwrap();
        let once = Endpoint::custom(url.clone(), comments.clone()).unwrap();
        let twice = Endpoint::custom(url, once).unwrap();
        assert_eq!(twice.decorator_depth(), 2);

        let stub = client().stubbed_response(&comments);
        let next = client().next_page(&twice, &stub).unwrap();
        assert_eq!(next.wrapped(), Some(&comments));
        assert_eq!(next.decorator_depth(), 1);
    }

    #[test]
    fn next_page_without_link_is_none() {
        assert!(client().next_page(&Endpoint::Categories, &response(200)).is_none());
    }
}
