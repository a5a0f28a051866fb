//! Client and event API models

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use atelier::{ClientProfile, GalleryEvent};

/// Client profile as rendered to the surface
#[derive(Debug, Serialize, ToSchema)]
pub struct ClientResponse {
    pub id: u32,
    pub name: String,
    pub purchase_history: String,
    pub interaction_history: String,
    pub preferred_contact_times: String,
    pub last_contact: NaiveDate,
    /// Baseline sentiment from the fixture, fixed at load time
    pub sentiment_baseline: f64,
}

impl From<&ClientProfile> for ClientResponse {
    fn from(client: &ClientProfile) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            purchase_history: client.purchase_history.clone(),
            interaction_history: client.interaction_history.clone(),
            preferred_contact_times: client.preferred_contact_times.clone(),
            last_contact: client.last_contact,
            sentiment_baseline: client.sentiment_baseline,
        }
    }
}

/// Upcoming event
#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    pub name: String,
    pub date: NaiveDate,
}

impl From<&GalleryEvent> for EventResponse {
    fn from(event: &GalleryEvent) -> Self {
        Self {
            name: event.name.clone(),
            date: event.date,
        }
    }
}

/// Simulated engagement likelihood, regenerated on every request
#[derive(Debug, Serialize, ToSchema)]
pub struct EngagementScoreResponse {
    pub client_id: u32,
    /// Percentage in [50, 100]; a demo simulation, not a model output
    pub likelihood: u32,
}
