//! In-memory log store.
//!
//! Entries are kept in insertion order; that order drives "most recent entry"
//! for suggestions and tie-breaking for the most frequent activity. Ids come
//! from a counter that starts at 1 and is never rewound, so a deleted id is
//! never handed out again.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::models::entry::{EntryPayload, FitnessEntry};
use crate::models::insight::{ProgressSummary, Suggestion};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("log {0} not found")]
    NotFound(i64),
}

struct Inner {
    entries: Vec<FitnessEntry>,
    next_id: i64,
}

pub struct LogStore {
    inner: Mutex<Inner>,
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStore {
    pub fn new() -> Self {
        LogStore {
            inner: Mutex::new(Inner {
                entries: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // Every operation finishes its mutation before releasing the guard, so a
    // poisoned lock still holds consistent data.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, payload: EntryPayload) -> FitnessEntry {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let entry = FitnessEntry::from_payload(id, payload);
        inner.entries.push(entry.clone());
        entry
    }

    pub fn list(&self) -> Vec<FitnessEntry> {
        self.lock().entries.clone()
    }

    pub fn get(&self, id: i64) -> Result<FitnessEntry, StoreError> {
        self.lock()
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub fn update(&self, id: i64, payload: EntryPayload) -> Result<FitnessEntry, StoreError> {
        let mut inner = self.lock();
        let entry = inner
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(StoreError::NotFound(id))?;
        entry.apply(payload);
        Ok(entry.clone())
    }

    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let index = inner
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(StoreError::NotFound(id))?;
        inner.entries.remove(index);
        Ok(())
    }

    pub fn progress(&self) -> ProgressSummary {
        let inner = self.lock();
        summarize(&inner.entries)
    }

    pub fn suggest(&self) -> Suggestion {
        match self.lock().entries.last() {
            None => Suggestion::GetStarted,
            Some(latest) => Suggestion::for_mood(latest.mood.as_deref()),
        }
    }
}

fn summarize(entries: &[FitnessEntry]) -> ProgressSummary {
    let mut total_duration: i64 = 0;
    let mut total_calories: i64 = 0;
    // activity -> (count, first position seen)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    // Totals clamp at the i64 bounds instead of overflowing.
    for (position, entry) in entries.iter().enumerate() {
        total_duration = total_duration.saturating_add(entry.duration);
        total_calories = total_calories.saturating_add(entry.calories_burned.unwrap_or(0));
        counts.entry(entry.activity.as_str()).or_insert((0, position)).0 += 1;
    }

    let most_frequent_activity = counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(activity, _)| activity.to_string());

    ProgressSummary {
        total_duration,
        total_calories,
        most_frequent_activity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(activity: &str, duration: i64, calories: Option<i64>, mood: Option<&str>) -> EntryPayload {
        EntryPayload {
            activity: activity.to_string(),
            duration,
            calories_burned: calories,
            mood: mood.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn ids_start_at_one_and_ignore_caller_id() {
        let store = LogStore::new();
        let ids: Vec<i64> = (0..5)
            .map(|i| {
                let mut p = payload("Run", 10, None, None);
                p.id = Some(100 - i);
                store.create(p).id
            })
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn get_returns_created_entry() {
        let store = LogStore::new();
        let created = store.create(payload("Cycling", 40, Some(320), Some("Happy")));
        assert_eq!(store.get(created.id), Ok(created));
    }

    #[test]
    fn missing_ids_are_not_found() {
        let store = LogStore::new();
        store.create(payload("Run", 10, None, None));
        assert_eq!(store.get(-1), Err(StoreError::NotFound(-1)));
        assert_eq!(store.get(9), Err(StoreError::NotFound(9)));
        assert_eq!(store.update(9, payload("Run", 1, None, None)), Err(StoreError::NotFound(9)));
        assert_eq!(store.delete(9), Err(StoreError::NotFound(9)));
    }

    #[test]
    fn delete_never_reuses_ids() {
        let store = LogStore::new();
        store.create(payload("A", 1, None, None));
        store.create(payload("B", 2, None, None));
        store.create(payload("C", 3, None, None));

        store.delete(3).unwrap();
        store.delete(1).unwrap();
        assert_eq!(store.list().iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(store.delete(1), Err(StoreError::NotFound(1)));

        assert_eq!(store.create(payload("D", 4, None, None)).id, 4);
    }

    #[test]
    fn update_replaces_everything_but_id() {
        let store = LogStore::new();
        let created = store.create(EntryPayload {
            activity: "Run".to_string(),
            duration: 30,
            intensity: Some("High".to_string()),
            mood: Some("Tired".to_string()),
            calories_burned: Some(250),
            notes: Some("hills".to_string()),
            id: None,
        });

        let updated = store
            .update(
                created.id,
                EntryPayload {
                    id: Some(77),
                    activity: "Walk".to_string(),
                    duration: 15,
                    ..Default::default()
                },
            )
            .unwrap();

        let expected = FitnessEntry {
            id: created.id,
            activity: "Walk".to_string(),
            duration: 15,
            intensity: None,
            mood: None,
            calories_burned: None,
            notes: None,
        };
        assert_eq!(updated, expected);
        assert_eq!(store.get(created.id), Ok(expected));
    }

    #[test]
    fn returned_entries_are_copies() {
        let store = LogStore::new();
        let mut created = store.create(payload("Run", 30, None, None));
        created.activity = "Changed".to_string();
        assert_eq!(store.get(1).unwrap().activity, "Run");
    }

    #[test]
    fn progress_on_empty_store() {
        let store = LogStore::new();
        assert_eq!(
            store.progress(),
            ProgressSummary {
                total_duration: 0,
                total_calories: 0,
                most_frequent_activity: None,
            }
        );
    }

    #[test]
    fn progress_sums_and_picks_mode() {
        let store = LogStore::new();
        store.create(payload("Run", 30, Some(200), None));
        store.create(payload("Run", 45, Some(300), None));
        store.create(payload("Yoga", 20, None, None));

        let summary = store.progress();
        assert_eq!(summary.total_duration, 95);
        assert_eq!(summary.total_calories, 500);
        assert_eq!(summary.most_frequent_activity.as_deref(), Some("Run"));
    }

    #[test]
    fn progress_totals_saturate_instead_of_overflowing() {
        let store = LogStore::new();
        store.create(payload("Run", i64::MAX, Some(i64::MAX), None));
        store.create(payload("Run", i64::MAX, Some(i64::MAX), None));
        store.create(payload("Swim", i64::MIN, None, None));

        let summary = store.progress();
        assert_eq!(summary.total_duration, i64::MAX + i64::MIN);
        assert_eq!(summary.total_calories, i64::MAX);

        let store = LogStore::new();
        store.create(payload("Run", i64::MAX, None, None));
        store.create(payload("Run", i64::MAX, None, None));
        assert_eq!(store.progress().total_duration, i64::MAX);
    }

    #[test]
    fn progress_ties_go_to_first_seen_activity() {
        let store = LogStore::new();
        store.create(payload("Swim", 10, None, None));
        store.create(payload("Run", 10, None, None));
        store.create(payload("Run", 10, None, None));
        store.create(payload("Swim", 10, None, None));
        store.create(payload("Yoga", 10, None, None));

        assert_eq!(store.progress().most_frequent_activity.as_deref(), Some("Swim"));
    }

    #[test]
    fn suggestion_follows_latest_entry() {
        let store = LogStore::new();
        assert_eq!(store.suggest(), Suggestion::GetStarted);

        store.create(payload("Run", 30, None, Some("Tired")));
        assert_eq!(store.suggest(), Suggestion::Recovery);

        store.create(payload("Walk", 20, None, Some("Energetic")));
        assert_eq!(store.suggest(), Suggestion::HighIntensity);

        store.create(payload("Walk", 20, None, None));
        assert_eq!(store.suggest(), Suggestion::Balanced);

        store.delete(3).unwrap();
        assert_eq!(store.suggest(), Suggestion::HighIntensity);
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(LogStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..50).map(|_| store.create(payload("Run", 1, None, None)).id).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=400).collect::<Vec<_>>());
    }
}
