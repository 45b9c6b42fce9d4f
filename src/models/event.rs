use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored event row. `id`, `created_at` and `updated_at` are always
/// assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Incoming event body for create and update requests.
///
/// Missing fields deserialize to their empty forms instead of failing, so the
/// validator can report every absent field in a single response. Unknown
/// fields (such as a client-supplied `id` or `created_at`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_by: String,
}

impl EventPayload {
    /// Description with the empty string collapsed to `None`, so stored rows
    /// match the omit-when-empty JSON contract.
    pub fn normalized_description(&self) -> Option<String> {
        self.description
            .as_deref()
            .filter(|description| !description.is_empty())
            .map(str::to_owned)
    }
}

/// A validated, storage-ready event body. Produced by
/// [`crate::validation::validate_event`]; both timestamps are guaranteed
/// present.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(description: Option<&str>) -> Event {
        let now = Utc::now();
        Event {
            id: 7,
            title: "Standup".to_string(),
            description: description.map(str::to_owned),
            location: "Room 1".to_string(),
            start_time: now,
            end_time: now,
            created_by: "host@example.com".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn description_is_omitted_from_json_when_absent() {
        let value = serde_json::to_value(sample_event(None)).unwrap();
        assert!(value.get("description").is_none());
    }

    #[test]
    fn description_is_present_in_json_when_set() {
        let value = serde_json::to_value(sample_event(Some("Daily sync"))).unwrap();
        assert_eq!(value["description"], "Daily sync");
    }

    #[test]
    fn payload_tolerates_missing_fields() {
        let payload: EventPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.title.is_empty());
        assert!(payload.start_time.is_none());
        assert!(payload.end_time.is_none());
    }

    #[test]
    fn payload_ignores_server_assigned_fields() {
        let payload: EventPayload =
            serde_json::from_str(r#"{"id": 99, "title": "Picnic", "created_at": "bogus"}"#)
                .unwrap();
        assert_eq!(payload.title, "Picnic");
    }

    #[test]
    fn empty_description_normalizes_to_none() {
        let payload = EventPayload {
            description: Some(String::new()),
            ..EventPayload::default()
        };
        assert_eq!(payload.normalized_description(), None);

        let payload = EventPayload {
            description: Some("Offsite".to_string()),
            ..EventPayload::default()
        };
        assert_eq!(
            payload.normalized_description(),
            Some("Offsite".to_string())
        );
    }
}
