//! Turns raw completion text into adventure suggestions, with a deterministic
//! fallback set for every way that can go wrong.

use serde::Deserialize;

use crate::error::{AdventureError, Result};
use crate::types::{AdventureSuggestion, SUGGESTION_COUNT};

#[derive(Debug, Deserialize)]
struct ActivityEnvelope {
    activities: Vec<AdventureSuggestion>,
}

/// Slice out the widest brace-delimited span of `text`: first `{` through the
/// last `}`.
///
/// Models sometimes wrap the requested JSON in explanatory prose; taking the
/// widest span tolerates that. This is a heuristic, not a balanced-brace
/// parser: a stray `{` or `}` inside the surrounding prose widens the span
/// and the subsequent parse rejects it.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse raw completion text into activity suggestions.
///
/// Fails with [`AdventureError::Parse`] when no brace-delimited span exists,
/// the span is not valid JSON, the top-level `activities` array is missing,
/// or any element lacks one of the eight mandatory fields. The count is not
/// checked here; the pipeline enforces the fan-out.
pub fn parse_suggestions(text: &str) -> Result<Vec<AdventureSuggestion>> {
    let span = extract_json_object(text)
        .ok_or_else(|| AdventureError::Parse("no JSON object found in completion".to_string()))?;

    let mut deserializer = serde_json::Deserializer::from_str(span);
    let envelope: ActivityEnvelope =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            let path = err.path().to_string();
            let location = if path.is_empty() {
                "<root>".to_string()
            } else {
                path
            };
            AdventureError::Parse(format!("invalid activities payload at {location}: {err}"))
        })?;

    for (index, activity) in envelope.activities.iter().enumerate() {
        if !activity.is_complete() {
            return Err(AdventureError::Parse(format!(
                "activity {} is missing a mandatory field",
                index + 1
            )));
        }
    }

    Ok(envelope.activities)
}

/// Produce the deterministic fallback set for a mood: five variants of the
/// mood's canned template, distinguished only by an ordinal title suffix.
/// Never fails; an unrecognized mood string uses the chill template.
pub fn fallback_suggestions(mood: &str) -> Vec<AdventureSuggestion> {
    let base = fallback_template(mood);
    (1..=SUGGESTION_COUNT)
        .map(|ordinal| {
            let mut variant = base.clone();
            variant.title = format!("{} #{}", base.title, ordinal);
            variant
        })
        .collect()
}

fn fallback_template(mood: &str) -> AdventureSuggestion {
    match mood {
        "funny" => AdventureSuggestion {
            title: "Silly Selfie Challenge".to_string(),
            description: "Take creative selfies with random objects around your neighborhood \
                          and create a funny photo story."
                .to_string(),
            emoji: "📸".to_string(),
            estimated_time: "20-30 minutes".to_string(),
            cost: "Free".to_string(),
            location: "Your neighborhood".to_string(),
            tips: vec![
                "Be creative with poses".to_string(),
                "Use interesting backgrounds".to_string(),
                "Share with friends".to_string(),
            ],
            category: "funny".to_string(),
        },
        "active" => AdventureSuggestion {
            title: "Quick Fitness Adventure".to_string(),
            description: "Do a quick workout circuit at a local park or outdoor space.".to_string(),
            emoji: "🏃‍♀️".to_string(),
            estimated_time: "15-30 minutes".to_string(),
            cost: "Free".to_string(),
            location: "Local park or outdoor space".to_string(),
            tips: vec![
                "Warm up first".to_string(),
                "Stay hydrated".to_string(),
                "Have fun with it".to_string(),
            ],
            category: "active".to_string(),
        },
        "creative" => AdventureSuggestion {
            title: "Artistic Photo Walk".to_string(),
            description: "Take artistic photos of interesting things you find while walking \
                          around your area."
                .to_string(),
            emoji: "📷".to_string(),
            estimated_time: "30-45 minutes".to_string(),
            cost: "Free".to_string(),
            location: "Your neighborhood".to_string(),
            tips: vec![
                "Look for interesting textures".to_string(),
                "Try different angles".to_string(),
                "Capture the moment".to_string(),
            ],
            category: "creative".to_string(),
        },
        // chill doubles as the template for unrecognized moods
        _ => AdventureSuggestion {
            title: "Peaceful Park Stroll".to_string(),
            description: "Take a relaxing walk in a nearby park and find a quiet spot to \
                          people-watch or read."
                .to_string(),
            emoji: "🌳".to_string(),
            estimated_time: "30-45 minutes".to_string(),
            cost: "Free".to_string(),
            location: "Local park".to_string(),
            tips: vec![
                "Bring a book or journal".to_string(),
                "Find a shady spot".to_string(),
                "Take your time and enjoy nature".to_string(),
            ],
            category: "chill".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity_json(title: &str) -> serde_json::Value {
        serde_json::json!({
            "title": title,
            "description": "Something worth doing.",
            "emoji": "🎯",
            "estimatedTime": "20-30 minutes",
            "cost": "Free",
            "location": "Main square",
            "tips": ["Go early"],
            "category": "chill"
        })
    }

    fn payload(titles: &[&str]) -> String {
        serde_json::json!({
            "activities": titles.iter().map(|t| activity_json(t)).collect::<Vec<_>>()
        })
        .to_string()
    }

    #[test]
    fn test_extract_json_object_takes_widest_span() {
        assert_eq!(extract_json_object("{\"a\":1}"), Some("{\"a\":1}"));
        assert_eq!(
            extract_json_object("Sure! Here you go: {\"a\":1} Enjoy!"),
            Some("{\"a\":1}")
        );
        assert_eq!(
            extract_json_object("prose {\"a\":{\"b\":2}} more prose"),
            Some("{\"a\":{\"b\":2}}")
        );
    }

    #[test]
    fn test_extract_json_object_rejects_braceless_text() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} reversed {"), None);
    }

    #[test]
    fn test_parse_suggestions_accepts_prose_wrapped_json() {
        let text = format!("Here are your adventures!\n{}\nHave fun!", payload(&["One", "Two"]));
        let suggestions = parse_suggestions(&text).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].title, "One");
    }

    #[test]
    fn test_parse_suggestions_requires_activities_array() {
        let err = parse_suggestions("{\"items\": []}").unwrap_err();
        assert_eq!(err.error_code(), "PARSE_ERROR");

        let err = parse_suggestions("{\"activities\": \"nope\"}").unwrap_err();
        assert_eq!(err.error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_parse_suggestions_rejects_missing_field() {
        let mut activity = activity_json("Half-baked");
        activity.as_object_mut().unwrap().remove("emoji");
        let text = serde_json::json!({ "activities": [activity] }).to_string();

        let err = parse_suggestions(&text).unwrap_err();
        assert!(err.to_string().contains("emoji"), "got: {err}");
    }

    #[test]
    fn test_parse_suggestions_rejects_blank_field() {
        let mut activity = activity_json("Blank cost");
        activity["cost"] = serde_json::json!("   ");
        let text = serde_json::json!({ "activities": [activity] }).to_string();

        let err = parse_suggestions(&text).unwrap_err();
        assert!(err.to_string().contains("mandatory field"));
    }

    #[test]
    fn test_fallback_titles_are_numbered_variants() {
        let suggestions = fallback_suggestions("funny");
        assert_eq!(suggestions.len(), SUGGESTION_COUNT);

        for (index, suggestion) in suggestions.iter().enumerate() {
            assert_eq!(
                suggestion.title,
                format!("Silly Selfie Challenge #{}", index + 1)
            );
            // everything except the title is identical across variants
            assert_eq!(suggestion.description, suggestions[0].description);
            assert_eq!(suggestion.emoji, suggestions[0].emoji);
            assert_eq!(suggestion.estimated_time, suggestions[0].estimated_time);
            assert_eq!(suggestion.cost, suggestions[0].cost);
            assert_eq!(suggestion.location, suggestions[0].location);
            assert_eq!(suggestion.tips, suggestions[0].tips);
            assert_eq!(suggestion.category, "funny");
        }
    }

    #[test]
    fn test_fallback_defaults_to_chill_for_unknown_mood() {
        let suggestions = fallback_suggestions("melancholy");
        assert!(suggestions[0].title.starts_with("Peaceful Park Stroll"));
        assert_eq!(suggestions[0].category, "chill");
    }

    #[test]
    fn test_fallback_suggestions_are_complete() {
        for mood in ["chill", "funny", "active", "creative", "???"] {
            for suggestion in fallback_suggestions(mood) {
                assert!(suggestion.is_complete(), "incomplete template for {mood}");
            }
        }
    }
}
