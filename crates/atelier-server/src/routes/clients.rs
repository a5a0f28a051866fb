//! Client Routes - Profile display
//!
//! HTTP handlers over the read-only profile store.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use rand::Rng;

use crate::models::{ClientResponse, EngagementScoreResponse};
use crate::AppState;

/// List all client profiles
#[utoipa::path(
    get,
    path = "/atelier/clients",
    responses(
        (status = 200, description = "All client profiles", body = Vec<ClientResponse>)
    ),
    tag = "Clients"
)]
pub async fn list_clients(State(state): State<AppState>) -> Json<Vec<ClientResponse>> {
    let clients = state
        .store
        .clients()
        .iter()
        .map(ClientResponse::from)
        .collect();

    Json(clients)
}

/// Get one client profile
#[utoipa::path(
    get,
    path = "/atelier/clients/{id}",
    params(("id" = u32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 404, description = "Client not found")
    ),
    tag = "Clients"
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ClientResponse>, (axum::http::StatusCode, String)> {
    let client = state.store.find_client(id).ok_or((
        axum::http::StatusCode::NOT_FOUND,
        "Client not found".to_string(),
    ))?;

    Ok(Json(ClientResponse::from(client)))
}

/// Simulated predictive engagement score
///
/// A demo stand-in for a real engagement model: uniform in [50, 100],
/// regenerated on every call.
#[utoipa::path(
    get,
    path = "/atelier/clients/{id}/engagement-score",
    params(("id" = u32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Simulated engagement likelihood", body = EngagementScoreResponse),
        (status = 404, description = "Client not found")
    ),
    tag = "Clients"
)]
pub async fn engagement_score(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<EngagementScoreResponse>, (axum::http::StatusCode, String)> {
    let client = state.store.find_client(id).ok_or((
        axum::http::StatusCode::NOT_FOUND,
        "Client not found".to_string(),
    ))?;

    let likelihood = rand::thread_rng().gen_range(50..=100);

    Ok(Json(EngagementScoreResponse {
        client_id: client.id,
        likelihood,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/atelier/clients", get(list_clients))
        .route("/atelier/clients/:id", get(get_client))
        .route(
            "/atelier/clients/:id/engagement-score",
            get(engagement_score),
        )
}
