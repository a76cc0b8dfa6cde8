//! File-backed persistence for events and the notes catalog.
//!
//! Events live as one JSON file per event under `<data_dir>/events/`.
//! Writes go through a temp file and rename so a crash never leaves a
//! half-written event behind.

mod notes;

pub use notes::NotesStore;

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{SemestraError, SemestraResult};
use crate::event::{Event, EventDraft};

pub struct EventStore {
    events_dir: PathBuf,
}

impl EventStore {
    /// Open (and create if needed) the event directory under `data_dir`.
    pub fn open(data_dir: &Path) -> SemestraResult<Self> {
        let events_dir = data_dir.join("events");
        std::fs::create_dir_all(&events_dir)?;

        info!(events_dir = %events_dir.display(), "opened event store");

        Ok(EventStore { events_dir })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.events_dir.join(format!("{id}.json"))
    }

    /// Load all events, sorted by start date ascending. Unreadable files
    /// are skipped with a warning rather than failing the whole listing.
    pub fn list(&self) -> SemestraResult<Vec<Event>> {
        let entries = std::fs::read_dir(&self.events_dir)?;

        let mut events: Vec<Event> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == "json"))
            .filter_map(|path| match read_event(&path) {
                Ok(event) => Some(event),
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "skipping unreadable event file");
                    None
                }
            })
            .collect();

        events.sort_by_key(|event| event.date);
        Ok(events)
    }

    pub fn get(&self, id: &str) -> SemestraResult<Event> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(SemestraError::EventNotFound(id.to_string()));
        }
        read_event(&path)
    }

    /// Create an event from a draft. The store assigns the id and both
    /// timestamps; callers never pick ids.
    pub fn create(&self, draft: &EventDraft) -> SemestraResult<Event> {
        draft.validate()?;

        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            date: draft.date,
            kind: draft.kind,
            created_at: now,
            updated_at: now,
        };

        self.write_event(&event)?;
        Ok(event)
    }

    /// Replace an event's fields wholesale, keeping id and created_at and
    /// bumping updated_at.
    pub fn update(&self, id: &str, draft: &EventDraft) -> SemestraResult<Event> {
        draft.validate()?;

        let existing = self.get(id)?;
        let event = Event {
            id: existing.id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            date: draft.date,
            kind: draft.kind,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.write_event(&event)?;
        Ok(event)
    }

    pub fn delete(&self, id: &str) -> SemestraResult<()> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(SemestraError::EventNotFound(id.to_string()));
        }
        std::fs::remove_file(&path)?;
        Ok(())
    }

    fn write_event(&self, event: &Event) -> SemestraResult<()> {
        let content = serde_json::to_string_pretty(event)
            .map_err(|e| SemestraError::Serialization(e.to_string()))?;

        let path = self.path_for(&event.id);
        let temp = self.events_dir.join(format!("{}.json.tmp", event.id));

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

fn read_event(path: &Path) -> SemestraResult<Event> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| SemestraError::Serialization(e.to_string()))
}
