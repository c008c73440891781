use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressSummary {
    pub total_duration: i64,
    pub total_calories: i64,
    pub most_frequent_activity: Option<String>,
}

/// Fixed recommendations keyed off the mood of the latest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    GetStarted,
    Recovery,
    HighIntensity,
    Balanced,
}

impl Suggestion {
    pub fn for_mood(mood: Option<&str>) -> Self {
        match mood {
            Some("Tired") => Suggestion::Recovery,
            Some("Energetic") => Suggestion::HighIntensity,
            _ => Suggestion::Balanced,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Suggestion::GetStarted => "Try a light walk to get started!",
            Suggestion::Recovery => "Consider yoga or stretching today.",
            Suggestion::HighIntensity => "Go for a run or HIIT session!",
            Suggestion::Balanced => "Keep it balanced with moderate cardio.",
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SuggestionResponse {
    pub suggestion: &'static str,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(suggestion: Suggestion) -> Self {
        SuggestionResponse { suggestion: suggestion.text() }
    }
}
