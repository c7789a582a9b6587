//! Fixed instructions sent to the language model

/// Intent classification: the model answers `1` (navigation) or `2` (discovery)
pub const INTENT_PROMPT: &str = "Determine if 1. the user wants directions to a specific place, \
or 2. suggestions for activities or locations. Type only 1 or 2 as your answer.";

/// Address extraction: the model answers with a bare physical address
pub const ADDRESS_PROMPT: &str = "Extract the address, location, or physical location from the \
query string. Only the address should be returned. You have to return something, can't be \
empty. Respond only with the address.";

/// Natural-language schema of the landmarks/events document
pub const ENTITY_SCHEMA: &str = r#"list of "landmarks" with "name" "state" "country" "address", list of "events" with "name" and "address" and "time""#;

/// Entity extraction from web search snippets
pub const ENTITY_PROMPT: &str = concat!(
    "Extract city names, location data, country names, any geographical location, landmarks, ",
    "etc. from the following text:, and format it in json (only the json object!), according ",
    "to the following specification: ",
    r#"list of "landmarks" with "name" "state" "country" "address", list of "events" with "name" and "address" and "time""#,
);

/// Route planner persona producing scenic and safety checkpoint addresses
pub const CHECKPOINT_PROMPT: &str = r#"You are a route planner AI specialized in generating physical checkpoints (addresses of real-world locations) along a route. Your goal is to provide a series of logical checkpoints that reflect the user's priority: either 'scenery' or 'safety.'

Given a start address and an end address, you will:
1. Understand the user's preference ('scenery' or 'safety').
2. Generate a detailed route that includes real physical addresses of recognizable locations (e.g., parks, cafes, rest stops, or landmarks) as checkpoints. Each checkpoint must be evenly spaced and relevant to the selected priority.
3. Return the route in JSON format as follows:
{
  "start": "Start Address",
  "scenic": ["address1", "address2", ...],
  "safety": ["address1", "address2", ...],
  "end": "End Address"
}
Ensure all addresses are full physical addresses, including the street name, city, and postal/ZIP code where possible.
Keep all responses concise and focus on accurate, relevant information. If a specific location cannot be identified, select a nearby notable address that matches the route preference. Never leave a route incomplete. Only answer in JSON."#;

/// User message for the route planner
#[must_use]
pub fn checkpoint_request(route_type: &str, start_address: &str) -> String {
    format!("User wants {route_type} route. User starts from {start_address}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_prompt_embeds_schema() {
        assert!(ENTITY_PROMPT.ends_with(ENTITY_SCHEMA));
    }

    #[test]
    fn checkpoint_request_format() {
        assert_eq!(
            checkpoint_request("scenic", "350 5th Ave, New York, NY 10118, USA"),
            "User wants scenic route. User starts from 350 5th Ave, New York, NY 10118, USA"
        );
    }

    #[test]
    fn checkpoint_prompt_describes_both_routes() {
        assert!(CHECKPOINT_PROMPT.contains("\"scenic\""));
        assert!(CHECKPOINT_PROMPT.contains("\"safety\""));
        assert!(CHECKPOINT_PROMPT.ends_with("Only answer in JSON."));
    }
}
