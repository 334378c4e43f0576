//! Artist-invite submissions, the entity that owns hypermedia actions.
//!
//! Only the parts that touch this crate live here: decoding the payload's
//! `actions` object, the cache grouping key, and the versioned snapshot the
//! persistence layer stores. A malformed action is dropped on its own; it
//! never fails the submission.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::action::{HypermediaAction, SubmissionStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistInviteSubmission {
    pub id: String,
    pub status: SubmissionStatus,
    pub actions: Vec<HypermediaAction>,
}

/// Persisted form of a submission. Older snapshots may lack `status` or
/// `actions`, or store `actions` as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSnapshot {
    pub version: u32,
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub actions: Vec<Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ArtistInviteSubmission {
    /// Snapshot layout version written by `to_snapshot`.
    pub const VERSION: u32 = 1;

    pub fn new(id: &str, status: SubmissionStatus) -> Self {
        Self {
            id: id.to_string(),
            status,
            actions: Vec::new(),
        }
    }

    /// Cache key and UI grouping key; fixed for the entity's lifetime.
    pub fn group_id(&self) -> String {
        format!("ArtistInviteSubmission-{}", self.id)
    }

    /// Build from an API payload. A missing or unknown status reads as
    /// `Unapproved`.
    pub fn from_json(data: &Value) -> Self {
        let id = match data.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => String::new(),
        };
        let status = data
            .get("status")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or(SubmissionStatus::Unapproved);

        let actions = data
            .get("actions")
            .and_then(Value::as_object)
            .map(|actions| {
                actions
                    .iter()
                    .filter_map(|(name, json)| HypermediaAction::from_json(name, json))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id,
            status,
            actions,
        }
    }

    pub fn to_snapshot(&self) -> SubmissionSnapshot {
        SubmissionSnapshot {
            version: Self::VERSION,
            id: self.id.clone(),
            status: self.status.as_str().to_string(),
            actions: self
                .actions
                .iter()
                .filter_map(|action| serde_json::to_value(action.to_record()).ok())
                .collect(),
        }
    }

    /// Restore from a stored snapshot. Fails only when the snapshot itself is
    /// unreadable; bad action records are skipped.
    pub fn from_snapshot(value: &Value) -> Result<Self, serde_json::Error> {
        let snapshot = SubmissionSnapshot::deserialize(value)?;
        let status = snapshot
            .status
            .parse()
            .unwrap_or(SubmissionStatus::Unapproved);
        let actions = snapshot
            .actions
            .iter()
            .filter_map(|record| HypermediaAction::from_record(record, snapshot.version))
            .collect();
        Ok(Self {
            id: snapshot.id,
            status,
            actions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionName;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "id": "42",
            "status": "unapproved",
            "actions": {
                "approve": {
                    "label": "Approve",
                    "method": "patch",
                    "href": "https://ello.co/api/v2/artist_invite_submissions/42/approve",
                    "body": {"status": "approved"}
                },
                "select": {
                    "label": "Select",
                    "method": "patch",
                    "href": "https://ello.co/api/v2/artist_invite_submissions/42/select",
                    "body": {"status": "selected"}
                },
                "broken": {
                    "method": "patch",
                    "href": "https://ello.co/api/v2/artist_invite_submissions/42/broken",
                    "body": {"status": "selected"}
                }
            }
        })
    }

    #[test]
    fn malformed_action_does_not_fail_submission() {
        let submission = ArtistInviteSubmission::from_json(&payload());
        assert_eq!(submission.id, "42");
        assert_eq!(submission.status, SubmissionStatus::Unapproved);
        let names: Vec<_> = submission.actions.iter().map(|a| a.name.clone()).collect();
        assert_eq!(names, vec![ActionName::Approve, ActionName::Select]);
    }

    #[test]
    fn group_id_is_kind_and_id() {
        let submission = ArtistInviteSubmission::new("7", SubmissionStatus::Selected);
        assert_eq!(submission.group_id(), "ArtistInviteSubmission-7");
    }

    #[test]
    fn numeric_id_and_unknown_status() {
        let submission = ArtistInviteSubmission::from_json(&json!({"id": 9, "status": "weird"}));
        assert_eq!(submission.id, "9");
        assert_eq!(submission.status, SubmissionStatus::Unapproved);
        assert!(submission.actions.is_empty());
    }

    #[test]
    fn snapshot_round_trip() {
        let submission = ArtistInviteSubmission::from_json(&payload());
        let snapshot = serde_json::to_value(submission.to_snapshot()).unwrap();
        assert_eq!(snapshot["version"], 1);
        let restored = ArtistInviteSubmission::from_snapshot(&snapshot).unwrap();
        assert_eq!(restored, submission);
    }

    #[test]
    fn snapshot_drops_record_missing_label() {
        let submission = ArtistInviteSubmission::from_json(&payload());
        let mut snapshot = serde_json::to_value(submission.to_snapshot()).unwrap();
        snapshot["actions"][0]
            .as_object_mut()
            .unwrap()
            .remove("label");
        let restored = ArtistInviteSubmission::from_snapshot(&snapshot).unwrap();
        assert_eq!(restored.actions.len(), 1);
        assert_eq!(restored.actions[0], submission.actions[1]);
    }

    #[test]
    fn snapshot_without_actions_is_accepted() {
        let restored = ArtistInviteSubmission::from_snapshot(&json!({
            "version": 1,
            "id": "3",
            "status": "approved"
        }))
        .unwrap();
        assert_eq!(restored.status, SubmissionStatus::Approved);
        assert!(restored.actions.is_empty());
    }

    #[test]
    fn snapshot_without_status_reads_as_unapproved() {
        let submission = ArtistInviteSubmission::from_json(&payload());
        let mut snapshot = serde_json::to_value(submission.to_snapshot()).unwrap();
        snapshot.as_object_mut().unwrap().remove("status");

        let restored = ArtistInviteSubmission::from_snapshot(&snapshot).unwrap();
        assert_eq!(restored.status, SubmissionStatus::Unapproved);
        assert_eq!(restored.actions, submission.actions);
    }

    #[test]
    fn snapshot_with_null_actions_is_accepted() {
        let restored = ArtistInviteSubmission::from_snapshot(&json!({
            "version": 1,
            "id": "3",
            "status": "approved",
            "actions": null
        }))
        .unwrap();
        assert_eq!(restored.status, SubmissionStatus::Approved);
        assert!(restored.actions.is_empty());
    }

    #[test]
    fn unreadable_snapshot_is_an_error() {
        assert!(ArtistInviteSubmission::from_snapshot(&json!({"id": "3"})).is_err());
    }
}
