//! Event types shared across the semestra ecosystem.
//!
//! Events are single-instant: `date` marks the scheduled start and the
//! event occupies exactly one calendar day. `start_day`/`end_day` exist so
//! the placement engine can grow into multi-day spans without changing its
//! contract.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SemestraError, SemestraResult};

/// A calendar event as stored and served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Free text; may embed `@course/class` reference tokens which the
    /// engine never interprets (see [`crate::refs`]).
    pub description: Option<String>,
    /// Scheduled start instant (RFC 3339 on the wire).
    pub date: DateTime<Utc>,
    pub kind: EventKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// First calendar day this event occupies.
    pub fn start_day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Last calendar day this event occupies. Currently identical to
    /// [`Event::start_day`]; multi-day events would override this.
    pub fn end_day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Visual category of an event. Drives rendering only, never placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    General,
    Club,
    Exam,
    Deadline,
    Rescheduled,
}

/// Payload for creating or replacing an event. Ids and timestamps are
/// assigned by the store, never by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub kind: EventKind,
}

impl EventDraft {
    /// Validate at the persistence boundary. The kind enum is closed by
    /// construction; only the title needs checking.
    pub fn validate(&self) -> SemestraResult<()> {
        if self.title.trim().is_empty() {
            return Err(SemestraError::InvalidEvent(
                "title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_kind_serializes_lowercase() {
        let json = serde_json::to_string(&EventKind::Rescheduled).unwrap();
        assert_eq!(json, "\"rescheduled\"");

        let kind: EventKind = serde_json::from_str("\"deadline\"").unwrap();
        assert_eq!(kind, EventKind::Deadline);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = serde_json::from_str::<EventKind>("\"party\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_requires_title() {
        let draft = EventDraft {
            title: "   ".to_string(),
            description: None,
            date: Utc.with_ymd_and_hms(2025, 6, 5, 9, 0, 0).unwrap(),
            kind: EventKind::General,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_event_date_roundtrips_rfc3339() {
        let json = r#"{
            "id": "e1",
            "title": "Midterm",
            "description": null,
            "date": "2025-06-05T09:00:00Z",
            "kind": "exam",
            "created_at": "2025-06-01T00:00:00Z",
            "updated_at": "2025-06-01T00:00:00Z"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(
            event.date,
            Utc.with_ymd_and_hms(2025, 6, 5, 9, 0, 0).unwrap()
        );
        assert_eq!(event.start_day(), event.end_day());
    }
}
