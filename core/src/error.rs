//! Error types for the API client core.
//!
//! # Design
//! `NotFound` and `Unauthorized` get dedicated variants because callers
//! distinguish "the resource does not exist" and "sign in again" from "the
//! server returned an unexpected status." All other non-2xx responses land in
//! `HttpError` with the raw status code and body for debugging.
//!
//! Malformed hypermedia actions are not errors: their decoders return
//! `Option` so one bad action never fails the entity that carries it.

use thiserror::Error;

/// Errors returned by `ApiClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned 401; the request went out without a usable
    /// credential or the credential was rejected.
    #[error("authentication required")]
    Unauthorized,

    /// The server returned a non-2xx status other than 401 and 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The configured base URL joined with an endpoint path is not a URL.
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request parameters could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Errors raised while constructing decorator endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("decorator nesting of depth {depth} exceeds the limit of {max}")]
    NestingTooDeep { depth: usize, max: usize },
}

/// An HTTP method token outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported HTTP method: {0}")]
pub struct ParseMethodError(pub String);

/// A submission status outside `approved`, `selected`, `unapproved`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown submission status: {0}")]
pub struct ParseStatusError(pub String);
