//! Record Store — per-session, append-only health log.
//!
//! Sessions are identified by a client-supplied UUID. Entries are never
//! edited or deleted individually; a session's list is only ever appended to
//! or dropped wholesale. Everything lives in memory and dies with the process.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::health_log::HealthLogEntry;

/// Cloneable handle to the session-keyed record store.
#[derive(Clone, Default)]
pub struct RecordStore {
    sessions: Arc<DashMap<Uuid, Vec<HealthLogEntry>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the session's log and returns the new length.
    pub fn append(&self, session: Uuid, entry: HealthLogEntry) -> usize {
        let mut records = self.sessions.entry(session).or_default();
        records.push(entry);
        records.len()
    }

    /// All entries for a session, oldest first.
    pub fn all(&self, session: Uuid) -> Vec<HealthLogEntry> {
        self.sessions
            .get(&session)
            .map(|r| r.value().clone())
            .unwrap_or_default()
    }

    /// The most recent `n` entries, oldest first. Fewer when history is short.
    pub fn recent(&self, session: Uuid, n: usize) -> Vec<HealthLogEntry> {
        self.sessions
            .get(&session)
            .map(|r| {
                let records = r.value();
                let start = records.len().saturating_sub(n);
                records[start..].to_vec()
            })
            .unwrap_or_default()
    }

    /// The latest entry, if any.
    pub fn latest(&self, session: Uuid) -> Option<HealthLogEntry> {
        self.sessions
            .get(&session)
            .and_then(|r| r.value().last().cloned())
    }

    pub fn len(&self, session: Uuid) -> usize {
        self.sessions.get(&session).map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self, session: Uuid) -> bool {
        self.len(session) == 0
    }

    /// Drops the whole session list (session end).
    pub fn clear(&self, session: Uuid) {
        self.sessions.remove(&session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health_log::{MealLevel, StoolState, WaterLevel};
    use chrono::NaiveDate;

    fn entry(day: u32) -> HealthLogEntry {
        HealthLogEntry {
            date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            meal_level: MealLevel::Normal,
            water_level: WaterLevel::Normal,
            stool_state: StoolState::Normal,
            behavior_tags: vec![],
            symptom_tags: vec![],
            vomit_color: None,
            vomit_content: None,
            memo: None,
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let store = RecordStore::new();
        let session = Uuid::new_v4();
        for day in 1..=3 {
            store.append(session, entry(day));
        }
        let all = store.all(session);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].date.to_string(), "2025-06-01");
        assert_eq!(all[2].date.to_string(), "2025-06-03");
    }

    #[test]
    fn test_recent_returns_tail_oldest_first() {
        let store = RecordStore::new();
        let session = Uuid::new_v4();
        for day in 1..=10 {
            store.append(session, entry(day));
        }
        let recent = store.recent(session, 7);
        assert_eq!(recent.len(), 7);
        assert_eq!(recent[0].date.to_string(), "2025-06-04");
        assert_eq!(recent[6].date.to_string(), "2025-06-10");
    }

    #[test]
    fn test_recent_with_short_history() {
        let store = RecordStore::new();
        let session = Uuid::new_v4();
        store.append(session, entry(1));
        assert_eq!(store.recent(session, 7).len(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = RecordStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.append(a, entry(1));
        assert_eq!(store.len(a), 1);
        assert!(store.is_empty(b));
    }

    #[test]
    fn test_clear_drops_only_that_session() {
        let store = RecordStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.append(a, entry(1));
        store.append(b, entry(2));
        store.clear(a);
        assert!(store.is_empty(a));
        assert_eq!(store.len(b), 1);
    }
}
