//! Shared test helpers for persistent-training integration tests

use chrono::Utc;
use concierge::azure::AzureError;
use concierge::selector::{Recommender, Selection};

/// Recommender that always answers with the same canned text
pub struct CannedRecommender {
    reply: String,
}

impl CannedRecommender {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

impl Recommender for CannedRecommender {
    fn recommend(&self, _user_input: &str) -> Result<Selection, AzureError> {
        Ok(Selection {
            recommendation: self.reply.clone(),
            model: "stub".to_string(),
            tokens_used: 42,
            timestamp: Utc::now(),
        })
    }
}

/// A reply that matches room-type, reasoning, and budget keywords but few
/// task features: a mediocre score on every fixture.
pub const MEDIOCRE_REPLY: &str = "Take the Garden Standard Room because the price is low.";

/// A reply mentioning many fixture features on top of all three keyword
/// families: a high score on most fixtures.
pub const STRONG_REPLY: &str =
    "I recommend the Business Room suite because it is ideal: WiFi, work desk, \
     quiet, space, ground floor, ocean view, privacy, luxury, concierge, \
     premium, clean, basic essentials, all within budget at a fair price.";
