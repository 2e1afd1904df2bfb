//! Prompt construction for the generation pipeline.
//!
//! Centralizing the strings here keeps the tone of generated adventures easy
//! to tweak without touching the client or the resolver.

use crate::types::{AdventureRequest, SUGGESTION_COUNT};

/// Fixed system instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str = "You are an AI assistant that creates fun, spontaneous \
    mini-adventures for teens. Always respond with valid JSON in the exact format requested.";

/// Build the user prompt for one generation attempt.
///
/// Restates every request parameter, asks for exactly five activities and
/// pins the JSON shape the resolver expects. Pure string formatting; never
/// fails for a well-formed request.
pub fn build_prompt(request: &AdventureRequest) -> String {
    let mood = request.mood.as_str();

    format!(
        "You are an expert adventure curator for teens! Generate {count} amazing personalized \
         activities based on these criteria:\n\
         \n\
         Location: {location} (coordinates: {lat}, {lon})\n\
         Mood: {mood} ({tone})\n\
         Time Available: {time} minutes\n\
         Budget: {budget}\n\
         \n\
         Create {count} unique, engaging activities that:\n\
         - Are perfect for teens (ages 13-19)\n\
         - Can realistically be completed in the specified time\n\
         - Fit exactly within the specified budget\n\
         - Are location-aware and actually doable in {location}\n\
         - Match the {mood} mood perfectly\n\
         - Are spontaneous, fun, and Instagram-worthy\n\
         - Include specific, actionable details\n\
         - Are safe and appropriate\n\
         - Feel like mini adventures, not just regular activities\n\
         - Are all different from each other (variety is key!)\n\
         \n\
         Respond in this EXACT JSON format (no additional text, no markdown):\n\
         {{\n\
         \x20 \"activities\": [\n\
         \x20   {{\n\
         \x20     \"title\": \"Creative activity title (max 45 characters)\",\n\
         \x20     \"description\": \"Exciting 2-3 sentence description that makes the activity sound irresistible\",\n\
         \x20     \"emoji\": \"Perfect emoji that represents the activity\",\n\
         \x20     \"estimatedTime\": \"Realistic time estimate (e.g., '25-35 minutes')\",\n\
         \x20     \"cost\": \"Exact cost estimate (e.g., 'Free', '$3-5', '$8-12')\",\n\
         \x20     \"location\": \"Specific location name or area in {location}\",\n\
         \x20     \"tips\": [\"Practical tip 1\", \"Fun tip 2\", \"Pro tip 3\"],\n\
         \x20     \"category\": \"{mood}\"\n\
         \x20   }}\n\
         \x20 ]\n\
         }}\n\
         \n\
         Return exactly {count} activities in the array, every one matching the {mood} mood, and \
         make all {count} sound absolutely amazing!",
        count = SUGGESTION_COUNT,
        location = request.location,
        lat = request.latitude,
        lon = request.longitude,
        mood = mood,
        tone = request.mood.tone(),
        time = request.time_budget,
        budget = request.budget,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mood;

    fn request(mood: Mood) -> AdventureRequest {
        AdventureRequest {
            mood,
            time_budget: "45".to_string(),
            budget: "$5-10".to_string(),
            location: "Porto".to_string(),
            latitude: 41.1579,
            longitude: -8.6291,
        }
    }

    #[test]
    fn test_prompt_restates_request_parameters() {
        let prompt = build_prompt(&request(Mood::Active));

        assert!(prompt.contains("Porto"));
        assert!(prompt.contains("active"));
        assert!(prompt.contains("energetic, physical, movement-based activities"));
        assert!(prompt.contains("45 minutes"));
        assert!(prompt.contains("$5-10"));
        assert!(prompt.contains("41.1579"));
    }

    #[test]
    fn test_prompt_demands_exactly_five_activities() {
        for mood in [Mood::Chill, Mood::Funny, Mood::Active, Mood::Creative] {
            let prompt = build_prompt(&request(mood));
            assert!(prompt.contains("Generate 5 amazing"));
            assert!(prompt.contains("Return exactly 5 activities"));
        }
    }

    #[test]
    fn test_prompt_pins_schema_and_forbids_prose() {
        let prompt = build_prompt(&request(Mood::Funny));

        assert!(prompt.contains("no additional text, no markdown"));
        assert!(prompt.contains("\"activities\""));
        for key in [
            "\"title\"",
            "\"description\"",
            "\"emoji\"",
            "\"estimatedTime\"",
            "\"cost\"",
            "\"location\"",
            "\"tips\"",
            "\"category\"",
        ] {
            assert!(prompt.contains(key), "prompt should mention {key}");
        }
        // category is pinned to the request mood
        assert!(prompt.contains("\"category\": \"funny\""));
    }
}
