use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdventureError;

/// Number of suggestions produced per generation attempt. The pipeline never
/// returns a partial list: all five parse or the whole attempt is replaced by
/// the fallback set.
pub const SUGGESTION_COUNT: usize = 5;

/// The four moods a request can steer generation toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Chill,
    Funny,
    Active,
    Creative,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Chill => "chill",
            Mood::Funny => "funny",
            Mood::Active => "active",
            Mood::Creative => "creative",
        }
    }

    /// Descriptive phrase woven into the generation prompt.
    pub fn tone(&self) -> &'static str {
        match self {
            Mood::Chill => "relaxing, peaceful, low-energy activities",
            Mood::Funny => "humorous, silly, entertaining experiences",
            Mood::Active => "energetic, physical, movement-based activities",
            Mood::Creative => "artistic, imaginative, expressive pursuits",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = AdventureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chill" => Ok(Mood::Chill),
            "funny" => Ok(Mood::Funny),
            "active" => Ok(Mood::Active),
            "creative" => Ok(Mood::Creative),
            other => Err(AdventureError::Config(format!(
                "unknown mood `{other}`, expected one of: chill, funny, active, creative"
            ))),
        }
    }
}

/// Input for one generation attempt. Built once per user action and discarded
/// after the suggestions are handed back; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdventureRequest {
    pub mood: Mood,
    /// Minutes available, as the caller supplied it (e.g. "45").
    pub time_budget: String,
    /// Spending category or range (e.g. "Free", "$5-10").
    pub budget: String,
    /// Free-text place name.
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A single generated activity. Every field is mandatory; the resolver
/// rejects records with missing or blank fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdventureSuggestion {
    pub title: String,
    pub description: String,
    pub emoji: String,
    pub estimated_time: String,
    pub cost: String,
    pub location: String,
    pub tips: Vec<String>,
    pub category: String,
}

impl AdventureSuggestion {
    /// True when all eight mandatory fields carry content.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.emoji.trim().is_empty()
            && !self.estimated_time.trim().is_empty()
            && !self.cost.trim().is_empty()
            && !self.location.trim().is_empty()
            && !self.tips.is_empty()
            && self.tips.iter().all(|tip| !tip.trim().is_empty())
            && !self.category.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion() -> AdventureSuggestion {
        AdventureSuggestion {
            title: "Rooftop Sunset Watch".to_string(),
            description: "Find a rooftop and watch the sun go down.".to_string(),
            emoji: "🌇".to_string(),
            estimated_time: "30-40 minutes".to_string(),
            cost: "Free".to_string(),
            location: "Downtown".to_string(),
            tips: vec!["Bring a friend".to_string()],
            category: "chill".to_string(),
        }
    }

    #[test]
    fn test_mood_round_trip() {
        for mood in [Mood::Chill, Mood::Funny, Mood::Active, Mood::Creative] {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
        assert_eq!("FUNNY".parse::<Mood>().unwrap(), Mood::Funny);
        assert!("bored".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Creative).unwrap(), "\"creative\"");
        let mood: Mood = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(mood, Mood::Active);
    }

    #[test]
    fn test_suggestion_wire_names_are_camel_case() {
        let value = serde_json::to_value(suggestion()).unwrap();
        assert!(value.get("estimatedTime").is_some());
        assert!(value.get("estimated_time").is_none());
    }

    #[test]
    fn test_is_complete_rejects_blank_fields() {
        assert!(suggestion().is_complete());

        let mut blank_cost = suggestion();
        blank_cost.cost = "  ".to_string();
        assert!(!blank_cost.is_complete());

        let mut no_tips = suggestion();
        no_tips.tips.clear();
        assert!(!no_tips.is_complete());

        let mut blank_tip = suggestion();
        blank_tip.tips.push(String::new());
        assert!(!blank_tip.is_complete());
    }
}
