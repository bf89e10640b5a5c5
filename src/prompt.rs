use crate::client::ChatMessage;
use crate::trip::TripRequest;

pub const SYSTEM_PROMPT: &str =
    "You are an expert travel guide. Provide a detailed travel itinerary.";

/// The system instruction and the trip-specific request sent to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripPrompt {
    pub system: String,
    pub user: String,
}

impl TripPrompt {
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system.clone()),
            ChatMessage::user(self.user.clone()),
        ]
    }

    /// Single text block for backends without chat roles.
    pub fn as_text(&self) -> String {
        format!("{}\n\n{}", self.system, self.user)
    }
}

pub fn build_prompt(request: &TripRequest, context: &str) -> TripPrompt {
    let user = format!(
        "Create a {duration}-day travel itinerary for a traveler going from {origin} to {destination}.

### 🏷️ Traveler Information:
- Budget: {budget}
- Purpose of Travel: {purpose}
- Preferences: {preferences}

### 🚆 Day-wise Itinerary:
- 📍 Activities (morning, afternoon, evening)
- 🎭 Attractions (landmarks & hidden gems)
- 🍽️ Food recommendations
- 🏨 Accommodation options (based on budget)
- 🚗 Transportation details (from {origin} to {destination} and local travel)

### 📌 Additional Considerations:
- 🌎 Cultural experiences, festivals, or seasonal events
- 🛍️ Shopping and souvenir recommendations
- 🔹 Safety tips, best times to visit, and local customs
- 🗺️ Alternative plans for bad weather days

### ℹ️ Additional Travel Info:
{context}",
        duration = request.duration,
        origin = request.origin,
        destination = request.destination,
        budget = request.budget,
        purpose = request.purpose,
        preferences = request.preferences,
        context = context,
    );

    TripPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
