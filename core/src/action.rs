//! Hypermedia actions: follow-up operations the server describes inside a
//! response payload.
//!
//! # Design
//! A submission payload carries an `actions` object keyed by action name:
//!
//! ```json
//! "approve": {
//!   "label": "Approve",
//!   "method": "post",
//!   "href": "https://ello.co/api/v2/artist_invite_submissions/42/approve",
//!   "body": { "status": "approved" }
//! }
//! ```
//!
//! Each entry decodes into a `HypermediaAction`: the status the submission
//! moves to, a symbolic name, a button label, and a `RequestDescriptor` that
//! replays the call through `Endpoint::CustomRequest`. Decoding returns
//! `None` on any missing or malformed field so the owning entity can keep
//! its other actions. Names the client does not know are kept verbatim in
//! `ActionName::Other`, so newer servers never break older clients.
//!
//! Actions are persisted as a flat `ActionRecord` inside the owner's
//! versioned snapshot. Only version 1 of the record exists; any other
//! version number is decoded with the version-1 rules rather than rejected.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::ParseStatusError;
use crate::http::HttpMethod;
use crate::request::RequestDescriptor;

/// Current layout of `ActionRecord`.
pub const ACTION_RECORD_VERSION: u32 = 1;

/// Review state of an artist-invite submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Approved,
    Selected,
    Unapproved,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Selected => "selected",
            SubmissionStatus::Unapproved => "unapproved",
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(SubmissionStatus::Approved),
            "selected" => Ok(SubmissionStatus::Selected),
            "unapproved" => Ok(SubmissionStatus::Unapproved),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionName {
    Approve,
    Unapprove,
    Select,
    Unselect,
    /// A name introduced by the server after this client shipped.
    Other(String),
}

impl ActionName {
    pub fn as_str(&self) -> &str {
        match self {
            ActionName::Approve => "approve",
            ActionName::Unapprove => "unapprove",
            ActionName::Select => "select",
            ActionName::Unselect => "unselect",
            ActionName::Other(name) => name,
        }
    }
}

impl From<&str> for ActionName {
    fn from(name: &str) -> Self {
        match name {
            "approve" => ActionName::Approve,
            "unapprove" => ActionName::Unapprove,
            "select" => ActionName::Select,
            "unselect" => ActionName::Unselect,
            other => ActionName::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypermediaAction {
    pub status_change: SubmissionStatus,
    pub name: ActionName,
    pub label: String,
    pub request: RequestDescriptor,
}

/// Flat persisted form of a `HypermediaAction`, version 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    pub status_change: String,
    pub name: String,
    pub label: String,
    pub url: String,
    pub method: String,
    pub parameters: BTreeMap<String, String>,
}

impl HypermediaAction {
    /// A request without explicit parameters is given the ones it would
    /// send: the URL's query pairs for GET, nothing otherwise. The persisted
    /// record always carries a parameter map, so this keeps actions equal
    /// across a save and restore.
    pub fn new(
        status_change: SubmissionStatus,
        name: ActionName,
        label: &str,
        request: RequestDescriptor,
    ) -> Self {
        let request = if request.parameters().is_some() {
            request
        } else {
            let parameters: BTreeMap<String, String> = match request.method() {
                HttpMethod::Get => request.url().query_pairs().into_owned().collect(),
                _ => BTreeMap::new(),
            };
            RequestDescriptor::new(request.url().clone(), request.method(), Some(parameters))
        };
        Self {
            status_change,
            name,
            label: label.to_string(),
            request,
        }
    }

    /// Decode one entry of a payload's `actions` object.
    ///
    /// Every `body` value must be a string and `body.status` must name a
    /// known status; the method is matched case-insensitively.
    pub fn from_json(name: &str, json: &Value) -> Option<Self> {
        let action = decode_json(name, json);
        if action.is_none() {
            debug!(action = name, "dropping malformed hypermedia action");
        }
        action
    }

    /// The catalog endpoint that performs this action.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::request_mimicking(self.request.clone(), Endpoint::ArtistInviteSubmissions)
    }

    pub fn to_record(&self) -> ActionRecord {
        ActionRecord {
            status_change: self.status_change.as_str().to_string(),
            name: self.name.as_str().to_string(),
            label: self.label.clone(),
            url: self.request.url().to_string(),
            method: self.request.method().as_str().to_string(),
            parameters: self.request.parameters().cloned().unwrap_or_default(),
        }
    }

    /// Decode a persisted record written under snapshot `version`.
    pub fn from_record(record: &Value, version: u32) -> Option<Self> {
        let action = match version {
            ACTION_RECORD_VERSION => decode_record_v1(record),
            other => {
                warn!(
                    version = other,
                    "no action record decoder for this version, applying version 1 rules"
                );
                decode_record_v1(record)
            }
        };
        if action.is_none() {
            debug!(version, "dropping malformed action record");
        }
        action
    }
}

fn decode_json(name: &str, json: &Value) -> Option<HypermediaAction> {
    let body = json.get("body")?.as_object()?;
    let parameters = body
        .iter()
        .map(|(key, value)| value.as_str().map(|v| (key.clone(), v.to_string())))
        .collect::<Option<BTreeMap<_, _>>>()?;
    let status_change = parameters.get("status")?.parse().ok()?;
    let label = json.get("label")?.as_str()?;
    let method = json
        .get("method")?
        .as_str()?
        .to_ascii_uppercase()
        .parse::<HttpMethod>()
        .ok()?;
    let url = Url::parse(json.get("href")?.as_str()?).ok()?;

    Some(HypermediaAction::new(
        status_change,
        ActionName::from(name),
        label,
        RequestDescriptor::new(url, method, Some(parameters)),
    ))
}

fn decode_record_v1(record: &Value) -> Option<HypermediaAction> {
    let record = ActionRecord::deserialize(record).ok()?;
    let status_change = record.status_change.parse().ok()?;
    let method = record.method.parse::<HttpMethod>().ok()?;
    let url = Url::parse(&record.url).ok()?;

    Some(HypermediaAction::new(
        status_change,
        ActionName::from(record.name.as_str()),
        &record.label,
        RequestDescriptor::new(url, method, Some(record.parameters)),
    ))
}
