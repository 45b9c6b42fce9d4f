use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{EventDraft, EventPayload};

/// A single field-level validation failure, serialized into the `details`
/// list of the 422 error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Checks an incoming event body against every rule and reports all
/// violations at once, in field order. On success returns the storage-ready
/// draft.
///
/// Rules:
/// - `title` and `location` must be non-empty.
/// - `created_by` must be non-empty and shaped like an email address.
/// - `start_time` must be present and strictly after `now`.
/// - `end_time` must be present and strictly after `start_time`.
///
/// Pure function of the payload and the supplied instant.
pub fn validate_event(
    payload: &EventPayload,
    now: DateTime<Utc>,
) -> Result<EventDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    if payload.title.is_empty() {
        errors.push(FieldError::new("title", "title is required"));
    }

    if payload.location.is_empty() {
        errors.push(FieldError::new("location", "location is required"));
    }

    if payload.created_by.is_empty() {
        errors.push(FieldError::new("created_by", "created_by is required"));
    } else if !looks_like_email(&payload.created_by) {
        errors.push(FieldError::new(
            "created_by",
            "created_by must be a valid email address",
        ));
    }

    match payload.start_time {
        None => errors.push(FieldError::new("start_time", "start_time is required")),
        Some(start) if start <= now => {
            errors.push(FieldError::new("start_time", "start_time must be in the future"));
        }
        Some(_) => {}
    }

    match payload.end_time {
        None => errors.push(FieldError::new("end_time", "end_time is required")),
        Some(end) => {
            // The ordering rule is independent of the in-the-future rule: a
            // past start_time still anchors the comparison.
            if let Some(start) = payload.start_time {
                if end <= start {
                    errors.push(FieldError::new(
                        "end_time",
                        "end_time must be after start_time",
                    ));
                }
            }
        }
    }

    // An empty error list implies both timestamps were present.
    match (payload.start_time, payload.end_time) {
        (Some(start_time), Some(end_time)) if errors.is_empty() => Ok(EventDraft {
            title: payload.title.clone(),
            description: payload.normalized_description(),
            location: payload.location.clone(),
            start_time,
            end_time,
            created_by: payload.created_by.clone(),
        }),
        _ => Err(errors),
    }
}

/// Minimal email shape: an `@` that is neither the first nor the last
/// character, and a `.` inside the domain part that is neither the domain's
/// first nor last character.
fn looks_like_email(value: &str) -> bool {
    let at = match value.find('@') {
        Some(index) => index,
        None => return false,
    };
    if at == 0 || at == value.len() - 1 {
        return false;
    }

    let domain = &value[at + 1..];
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_payload(now: DateTime<Utc>) -> EventPayload {
        EventPayload {
            title: "Team offsite".to_string(),
            description: Some("Annual planning".to_string()),
            location: "Lisbon".to_string(),
            start_time: Some(now + Duration::hours(1)),
            end_time: Some(now + Duration::hours(2)),
            created_by: "organizer@example.com".to_string(),
        }
    }

    fn field_names(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|error| error.field).collect()
    }

    #[test]
    fn valid_payload_produces_a_draft() {
        let now = Utc::now();
        let draft = validate_event(&valid_payload(now), now).expect("payload should be valid");
        assert_eq!(draft.title, "Team offsite");
        assert_eq!(draft.description, Some("Annual planning".to_string()));
        assert_eq!(draft.created_by, "organizer@example.com");
    }

    #[test]
    fn empty_payload_reports_every_missing_field() {
        let errors = validate_event(&EventPayload::default(), Utc::now()).unwrap_err();
        assert_eq!(
            field_names(&errors),
            vec!["title", "location", "created_by", "start_time", "end_time"]
        );
    }

    #[test]
    fn missing_title_and_location_are_both_reported() {
        let now = Utc::now();
        let payload = EventPayload {
            title: String::new(),
            location: String::new(),
            ..valid_payload(now)
        };
        let errors = validate_event(&payload, now).unwrap_err();
        assert_eq!(field_names(&errors), vec!["title", "location"]);
    }

    #[test]
    fn start_time_in_the_past_is_rejected() {
        let now = Utc::now();
        let payload = EventPayload {
            start_time: Some(now - Duration::hours(1)),
            end_time: Some(now + Duration::hours(1)),
            ..valid_payload(now)
        };
        let errors = validate_event(&payload, now).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "start_time");
        assert_eq!(errors[0].message, "start_time must be in the future");
    }

    #[test]
    fn start_time_equal_to_now_is_rejected() {
        let now = Utc::now();
        let payload = EventPayload {
            start_time: Some(now),
            ..valid_payload(now)
        };
        let errors = validate_event(&payload, now).unwrap_err();
        assert_eq!(field_names(&errors), vec!["start_time"]);
    }

    #[test]
    fn end_time_not_after_start_time_is_rejected() {
        let now = Utc::now();
        let start = now + Duration::hours(2);
        for end in [start, start - Duration::minutes(30)] {
            let payload = EventPayload {
                start_time: Some(start),
                end_time: Some(end),
                ..valid_payload(now)
            };
            let errors = validate_event(&payload, now).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "end_time");
            assert_eq!(errors[0].message, "end_time must be after start_time");
        }
    }

    #[test]
    fn past_start_and_misordered_end_are_both_reported() {
        let now = Utc::now();
        let payload = EventPayload {
            start_time: Some(now - Duration::hours(1)),
            end_time: Some(now - Duration::hours(2)),
            ..valid_payload(now)
        };
        let errors = validate_event(&payload, now).unwrap_err();
        assert_eq!(field_names(&errors), vec!["start_time", "end_time"]);
    }

    #[test]
    fn blank_creator_is_reported_as_required() {
        let now = Utc::now();
        let payload = EventPayload {
            created_by: String::new(),
            ..valid_payload(now)
        };
        let errors = validate_event(&payload, now).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "created_by is required");
    }

    #[test]
    fn email_shape_accepts_plain_addresses() {
        for candidate in [
            "a@b.co",
            "organizer@example.com",
            "first.last@sub.example.org",
        ] {
            assert!(looks_like_email(candidate), "{candidate} should pass");
        }
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        for candidate in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@.com",
            "user@example.",
        ] {
            assert!(!looks_like_email(candidate), "{candidate} should fail");
        }
    }

    #[test]
    fn malformed_creator_is_reported() {
        let now = Utc::now();
        let payload = EventPayload {
            created_by: "not-an-email".to_string(),
            ..valid_payload(now)
        };
        let errors = validate_event(&payload, now).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "created_by");
        assert_eq!(errors[0].message, "created_by must be a valid email address");
    }
}
