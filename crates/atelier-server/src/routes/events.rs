//! Event Routes - Show calendar

use axum::{extract::State, routing::get, Json, Router};

use crate::models::EventResponse;
use crate::AppState;

/// List upcoming events
#[utoipa::path(
    get,
    path = "/atelier/events",
    responses(
        (status = 200, description = "Upcoming events in date order", body = Vec<EventResponse>)
    ),
    tag = "Events"
)]
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<EventResponse>> {
    let events = state
        .store
        .events()
        .iter()
        .map(EventResponse::from)
        .collect();

    Json(events)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/atelier/events", get(list_events))
}
