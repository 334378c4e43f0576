//! A concrete HTTP call described independently of the catalog.

use std::collections::BTreeMap;

use url::Url;

use crate::http::HttpMethod;

/// URL, method and optional string parameters of one call. Produced by
/// callers that already hold a concrete URL, most often a decoded
/// hypermedia action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    url: Url,
    method: HttpMethod,
    parameters: Option<BTreeMap<String, String>>,
}

impl RequestDescriptor {
    pub fn new(url: Url, method: HttpMethod, parameters: Option<BTreeMap<String, String>>) -> Self {
        Self {
            url,
            method,
            parameters,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn parameters(&self) -> Option<&BTreeMap<String, String>> {
        self.parameters.as_ref()
    }
}
