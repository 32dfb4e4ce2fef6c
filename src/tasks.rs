//! Training task fixtures for room selection scenarios.
//!
//! Tasks are immutable: each one pairs a guest request with the features a
//! good recommendation should mention. The trainer iterates over the full
//! fixture list every session.

use serde::{Deserialize, Serialize};

/// A single room-selection scenario used for training and evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTask {
    /// Unique task identifier
    pub id: String,
    /// Short description of the scenario
    pub description: String,
    /// The guest's requirements, passed verbatim to the selector
    pub user_input: String,
    /// Features a good recommendation is expected to mention
    pub expected_features: Vec<String>,
}

impl RoomTask {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        user_input: impl Into<String>,
        expected_features: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            user_input: user_input.into(),
            expected_features: expected_features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// The fixed training task list, covering the main guest archetypes
pub fn training_tasks() -> Vec<RoomTask> {
    vec![
        RoomTask::new(
            "business_trip",
            "Business traveler needs efficient workspace and connectivity",
            "I need a room for a 3-day business trip. Must have fast WiFi, work desk, \
             and be quiet for video calls. Budget around $200-250 per night.",
            &["WiFi", "work desk", "quiet", "business amenities"],
        ),
        RoomTask::new(
            "romantic_getaway",
            "Couple seeking romantic accommodation with special atmosphere",
            "Planning a romantic weekend getaway for our anniversary. Want ocean view, \
             privacy, and luxury amenities. Budget flexible up to $400 per night.",
            &["ocean view", "privacy", "luxury", "romantic"],
        ),
        RoomTask::new(
            "family_vacation",
            "Family with children needs space and convenience",
            "Family of 4 with two young kids. Need extra space, ground floor preferred \
             for safety, budget-conscious under $180 per night.",
            &["space", "family-friendly", "ground floor", "budget"],
        ),
        RoomTask::new(
            "luxury_executive",
            "Executive needs premium accommodations and services",
            "Executive stay for important client meetings. Need luxury suite, concierge \
             services, and premium location. Budget not a concern.",
            &["luxury", "concierge", "premium", "executive"],
        ),
        RoomTask::new(
            "budget_conscious",
            "Traveler prioritizing cost-effectiveness",
            "Solo traveler on a tight budget. Just need clean, basic room with \
             essentials. Maximum $120 per night.",
            &["budget", "basic", "clean", "essentials"],
        ),
    ]
}
