//! Endpoint catalog and request construction for the Ello content API.
//!
//! # Overview
//! Every remote operation the client can perform is a variant of
//! `Endpoint`. Each variant derives its path, method, parameters, headers,
//! response mapping, auth requirement and offline sample data. `ApiClient`
//! turns an endpoint into an `HttpRequest` without touching the network
//! (host-does-IO pattern); the caller executes the round-trip.
//!
//! # Design
//! - `ApiClient` is stateless; it holds only a `ClientConfig`.
//! - Credentials are passed in per call as a `Credentials` snapshot rather
//!   than read from global state.
//! - Three decorator variants reshape another endpoint: `Custom` (server
//!   supplied URL), `CustomRequest` (full descriptor, used by hypermedia
//!   actions) and `InfiniteScroll` (pagination continuation).
//! - Hypermedia actions decode from payloads and from versioned records;
//!   a malformed action is dropped without failing its owner.

pub mod action;
pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod paging;
pub mod query;
pub mod request;
pub mod submission;

pub use action::{ActionName, ActionRecord, HypermediaAction, SubmissionStatus};
pub use auth::{AuthRequirement, AuthToken, Credentials, TokenKind};
pub use client::{check_status, ApiClient};
pub use config::ClientConfig;
pub use endpoint::{Endpoint, Fixture, MappingType, Parameters, RelationshipPriority};
pub use error::{ApiError, EndpointError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ParameterEncoding};
pub use paging::Continuation;
pub use request::RequestDescriptor;
pub use submission::{ArtistInviteSubmission, SubmissionSnapshot};
