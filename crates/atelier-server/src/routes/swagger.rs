//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ClientResponse, EngagementScoreResponse, EventResponse, GenerateRequest, GenerateResponse,
    SentimentResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Client endpoints
        super::clients::list_clients,
        super::clients::get_client,
        super::clients::engagement_score,
        // Event endpoints
        super::events::list_events,
        // Engage endpoints
        super::engage::generate,
        super::engage::sentiment,
    ),
    info(
        title = "Atelier API",
        version = "0.1.0",
        description = "Demo client-relationship API for an art-fair VIP desk.\n\nStatic profiles plus LLM-generated insights, outreach drafts, and sentiment estimates.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Clients", description = "Client profile display"),
        (name = "Events", description = "Upcoming show calendar"),
        (name = "Engage", description = "LLM-backed generation operations"),
    ),
    components(
        schemas(
            // Clients
            ClientResponse,
            EngagementScoreResponse,
            // Events
            EventResponse,
            // Engage
            GenerateRequest,
            GenerateResponse,
            SentimentResponse,
        )
    ),
)]
pub struct ApiDoc;
