use serde::{Deserialize, Serialize};

/// A single recorded fitness activity, as held by the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FitnessEntry {
    pub id: i64,
    pub activity: String,
    /// Minutes spent on the activity.
    pub duration: i64,
    pub intensity: Option<String>,
    pub mood: Option<String>,
    pub calories_burned: Option<i64>,
    pub notes: Option<String>,
}

/// Request body for create and update. Any `id` sent by the caller is
/// accepted for compatibility and then ignored.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EntryPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub activity: String,
    pub duration: i64,
    #[serde(default)]
    pub intensity: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub calories_burned: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FitnessEntry {
    pub fn from_payload(id: i64, payload: EntryPayload) -> Self {
        FitnessEntry {
            id,
            activity: payload.activity,
            duration: payload.duration,
            intensity: payload.intensity,
            mood: payload.mood,
            calories_burned: payload.calories_burned,
            notes: payload.notes,
        }
    }

    /// Replaces every field except `id`.
    pub fn apply(&mut self, payload: EntryPayload) {
        self.activity = payload.activity;
        self.duration = payload.duration;
        self.intensity = payload.intensity;
        self.mood = payload.mood;
        self.calories_burned = payload.calories_burned;
        self.notes = payload.notes;
    }
}
