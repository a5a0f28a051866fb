//! Engage Routes - LLM generation operations
//!
//! One query engine call per request; the handler blocks until the call
//! resolves, backoff sleeps included.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use atelier::{EngageError, PromptKind};

use crate::models::{GenerateRequest, GenerateResponse, SentimentResponse};
use crate::AppState;

/// Generate one category of text for a client
///
/// `kind` is one of: insights, outreach_message, sentiment,
/// engagement_suggestions, event_recommendation, conversation_starters,
/// summary, follow_up_plan, content_curation.
#[utoipa::path(
    post,
    path = "/atelier/clients/{id}/engage/{kind}",
    params(
        ("id" = u32, Path, description = "Client ID"),
        ("kind" = String, Path, description = "Prompt kind, e.g. insights")
    ),
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated text", body = GenerateResponse),
        (status = 400, description = "Unknown prompt kind"),
        (status = 404, description = "Client not found"),
        (status = 429, description = "Backend rate limited, try again later"),
        (status = 502, description = "Backend failure")
    ),
    tag = "Engage"
)]
pub async fn generate(
    State(state): State<AppState>,
    Path((id, kind)): Path<(u32, String)>,
    body: Option<Json<GenerateRequest>>,
) -> Result<Json<GenerateResponse>, (StatusCode, String)> {
    let kind: PromptKind = kind
        .parse()
        .map_err(|err: String| (StatusCode::BAD_REQUEST, err))?;

    let notes = body.as_ref().and_then(|b| b.notes.as_deref());

    let content = state
        .engagement
        .generate(id, kind, notes)
        .await
        .map_err(engage_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Client not found".to_string()))?;

    Ok(Json(GenerateResponse {
        client_id: id,
        kind: kind.to_string(),
        content,
    }))
}

/// Estimate relationship sentiment for a client
///
/// Runs the sentiment prompt deterministically and interprets the reply
/// into a bounded score or an explicit "undetermined".
#[utoipa::path(
    post,
    path = "/atelier/clients/{id}/sentiment",
    params(("id" = u32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Sentiment reading", body = SentimentResponse),
        (status = 404, description = "Client not found"),
        (status = 429, description = "Backend rate limited, try again later"),
        (status = 502, description = "Backend failure")
    ),
    tag = "Engage"
)]
pub async fn sentiment(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<SentimentResponse>, (StatusCode, String)> {
    let reading = state
        .engagement
        .sentiment(id)
        .await
        .map_err(engage_error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Client not found".to_string()))?;

    Ok(Json(SentimentResponse::new(id, reading)))
}

/// The single place an [`EngageError`] becomes an HTTP response
fn engage_error_response(err: EngageError) -> (StatusCode, String) {
    match err {
        EngageError::MissingField { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        EngageError::RateLimited { attempts } => (
            StatusCode::TOO_MANY_REQUESTS,
            format!(
                "The model backend is rate limited (gave up after {} attempts); try again later.",
                attempts
            ),
        ),
        EngageError::Backend(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
        EngageError::MalformedResponse => (
            StatusCode::BAD_GATEWAY,
            "The model backend returned an unusable reply.".to_string(),
        ),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/atelier/clients/:id/engage/:kind", post(generate))
        .route("/atelier/clients/:id/sentiment", post(sentiment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_error_class_maps_to_its_status() {
        let (status, _) = engage_error_response(EngageError::MissingField {
            kind: PromptKind::Insights,
            field: "name",
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, message) = engage_error_response(EngageError::RateLimited { attempts: 3 });
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert!(message.contains("3 attempts"));

        let (status, _) = engage_error_response(EngageError::Backend("auth".to_string()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = engage_error_response(EngageError::MalformedResponse);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
