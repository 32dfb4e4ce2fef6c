//! The room selector agent: prompts, inventory, and the recommendation seam.
//!
//! `Recommender` is the seam between the trainer and the LLM so sessions can
//! run against the real deployment or an offline stub in tests.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::azure::{AzureClient, AzureConfig, AzureError, ChatMessage};

/// Sampling temperature for room selection
const SELECTION_TEMPERATURE: f32 = 0.7;
/// Token budget for a recommendation
const SELECTION_MAX_TOKENS: u32 = 1000;

/// System prompt establishing the selector persona
pub const SYSTEM_PROMPT: &str = "\
You are an expert hotel room selector with deep knowledge of hospitality and travel.
Your role is to analyze user requirements and recommend the most suitable room from available options.

Consider these factors in your analysis:
- User preferences and stated needs
- Budget constraints and value optimization
- Room features and amenities alignment
- Context (business trip, family vacation, romantic getaway, etc.)
- Practical considerations (location, size, special requirements)

Provide your recommendation with:
1. Selected room with clear rationale
2. Key reasons for the choice
3. How it addresses user priorities
4. Any relevant considerations or alternatives

Be concise but thorough in your reasoning.";

/// Demo room inventory offered with every request
pub const DEFAULT_ROOMS: &str = "\
1. Ocean View Deluxe Room - $180/night
   - King bed, ocean view, balcony
   - 400 sq ft, modern amenities
   - Free WiFi, room service, mini-bar

2. City Suite - $250/night
   - Separate living area, city skyline view
   - 600 sq ft, work desk, kitchenette
   - Executive lounge access, premium WiFi

3. Garden Standard Room - $120/night
   - Queen bed, garden view, ground floor
   - 300 sq ft, basic amenities
   - Free WiFi, coffee maker

4. Penthouse Suite - $500/night
   - Master bedroom, panoramic views
   - 1000 sq ft, luxury amenities, jacuzzi
   - Concierge service, airport transfer

5. Business Room - $200/night
   - King bed, work station, city view
   - 350 sq ft, business amenities
   - Fast WiFi, printer access, meeting room credits";

/// A completed room recommendation
#[derive(Debug, Clone)]
pub struct Selection {
    /// The assistant's recommendation text
    pub recommendation: String,
    /// Deployment that produced it
    pub model: String,
    /// Total tokens consumed by the request
    pub tokens_used: u64,
    /// When the selection completed
    pub timestamp: DateTime<Utc>,
}

/// Source of room recommendations.
///
/// Implemented by the Azure-backed selector and by test stubs; the trainer
/// only sees this trait.
pub trait Recommender {
    fn recommend(&self, user_input: &str) -> Result<Selection, AzureError>;
}

/// Azure-backed room selector
pub struct RoomSelector {
    client: AzureClient,
}

impl RoomSelector {
    pub fn new(config: AzureConfig) -> Result<Self, AzureError> {
        let client = AzureClient::new(config)?;
        Ok(Self { client })
    }

    /// Read configuration from the environment and build the selector
    pub fn from_env() -> Result<Self, AzureError> {
        Self::new(AzureConfig::from_env()?)
    }

    pub fn client(&self) -> &AzureClient {
        &self.client
    }

    fn user_prompt(user_input: &str) -> String {
        format!(
            "User Requirements: {user_input}\n\n\
             Available Rooms:\n{DEFAULT_ROOMS}\n\n\
             Please analyze the user's requirements and recommend the most \
             suitable room from the available options."
        )
    }
}

impl Recommender for RoomSelector {
    fn recommend(&self, user_input: &str) -> Result<Selection, AzureError> {
        let preview: String = user_input.chars().take(100).collect();
        info!("processing room selection request: {preview}...");

        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(Self::user_prompt(user_input)),
        ];

        let outcome = self
            .client
            .chat(&messages, SELECTION_TEMPERATURE, SELECTION_MAX_TOKENS)?;

        info!("room selection completed, tokens used: {}", outcome.total_tokens);

        Ok(Selection {
            recommendation: outcome.content,
            model: self.client.config().deployment.clone(),
            tokens_used: outcome.total_tokens,
            timestamp: Utc::now(),
        })
    }
}
