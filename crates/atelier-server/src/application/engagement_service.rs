//! Engagement Application Service (Use Case)
//!
//! Orchestrates one user action: look up the profile, render the prompt,
//! run the query engine, interpret the reply. One backend call per action.

use std::sync::Arc;

use atelier::{
    interpret_sentiment, EngageError, GenerationOptions, ProfileStore, PromptKind, PromptRequest,
    QueryEngine, SentimentReading,
};

/// Application service for the nine generation operations
pub struct EngagementService {
    store: Arc<dyn ProfileStore>,
    engine: Arc<QueryEngine>,
}

impl EngagementService {
    pub fn new(store: Arc<dyn ProfileStore>, engine: Arc<QueryEngine>) -> Self {
        Self { store, engine }
    }

    /// Generate the requested category of text for one client.
    ///
    /// Returns `Ok(None)` when the client id is unknown. `notes` feeds the
    /// follow-up plan template and is ignored by every other kind.
    pub async fn generate(
        &self,
        client_id: u32,
        kind: PromptKind,
        notes: Option<&str>,
    ) -> Result<Option<String>, EngageError> {
        let Some(client) = self.store.find_client(client_id) else {
            return Ok(None);
        };

        tracing::info!("Generating {} for client {} ({})", kind, client.id, client.name);

        let request = match kind {
            PromptKind::Insights => PromptRequest::insights(client),
            PromptKind::OutreachMessage => PromptRequest::outreach_message(client),
            PromptKind::Sentiment => PromptRequest::sentiment(client),
            PromptKind::EngagementSuggestions => PromptRequest::engagement_suggestions(client),
            PromptKind::EventRecommendation => {
                PromptRequest::event_recommendation(client, self.store.events())
            }
            PromptKind::ConversationStarters => PromptRequest::conversation_starters(client),
            PromptKind::Summary => PromptRequest::summary(client),
            PromptKind::FollowUpPlan => {
                PromptRequest::follow_up_plan(client, notes.unwrap_or("(none)"))
            }
            PromptKind::ContentCuration => PromptRequest::content_curation(client),
        };

        // Sentiment extraction runs deterministic; everything else samples
        let options = match kind {
            PromptKind::Sentiment => GenerationOptions::sentiment(),
            _ => GenerationOptions::default(),
        };

        let prompt = request.render()?;
        let text = self.engine.query(&prompt, &options).await?;

        Ok(Some(text))
    }

    /// Run the sentiment operation end to end: generate, then interpret.
    pub async fn sentiment(
        &self,
        client_id: u32,
    ) -> Result<Option<SentimentReading>, EngageError> {
        let Some(text) = self.generate(client_id, PromptKind::Sentiment, None).await? else {
            return Ok(None);
        };

        Ok(Some(interpret_sentiment(&text)))
    }
}
