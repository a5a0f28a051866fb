//! Prompt - templated generation requests
//!
//! A closed set of nine prompt kinds, each a static text template with named
//! substitution slots. Rendering is pure: same inputs, same bytes. Missing
//! values are rejected here, at construction of the prompt text, instead of
//! surfacing later as a confusing backend error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ClientProfile, GalleryEvent};
use crate::domain::errors::EngageError;

/// The nine generation categories the tool supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    Insights,
    OutreachMessage,
    Sentiment,
    EngagementSuggestions,
    EventRecommendation,
    ConversationStarters,
    Summary,
    FollowUpPlan,
    ContentCuration,
}

impl PromptKind {
    /// All kinds, in display order
    pub const ALL: [PromptKind; 9] = [
        PromptKind::Insights,
        PromptKind::OutreachMessage,
        PromptKind::Sentiment,
        PromptKind::EngagementSuggestions,
        PromptKind::EventRecommendation,
        PromptKind::ConversationStarters,
        PromptKind::Summary,
        PromptKind::FollowUpPlan,
        PromptKind::ContentCuration,
    ];

    /// Placeholders the template cannot render without
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            PromptKind::Insights => &[
                "name",
                "purchase_history",
                "interaction_history",
                "preferred_contact_times",
                "last_contact",
                "sentiment_baseline",
            ],
            PromptKind::OutreachMessage => &[
                "name",
                "purchase_history",
                "interaction_history",
                "preferred_contact_times",
            ],
            PromptKind::Sentiment => &["name", "interaction_history", "last_contact"],
            PromptKind::EngagementSuggestions => &["name", "purchase_history", "last_contact"],
            PromptKind::EventRecommendation => &["name", "purchase_history", "events"],
            PromptKind::ConversationStarters => {
                &["name", "purchase_history", "interaction_history"]
            }
            PromptKind::Summary => &[
                "name",
                "purchase_history",
                "interaction_history",
                "last_contact",
            ],
            PromptKind::FollowUpPlan => {
                &["name", "last_contact", "notes", "preferred_contact_times"]
            }
            PromptKind::ContentCuration => &["name", "purchase_history"],
        }
    }

    fn template(&self) -> &'static str {
        match self {
            PromptKind::Insights => {
                "Analyze the following VIP client's data and provide insights:\n\n\
                 Name: {name}\n\
                 Purchase History: {purchase_history}\n\
                 Interaction History: {interaction_history}\n\
                 Preferred Contact Times: {preferred_contact_times}\n\
                 Last Contact Date: {last_contact}\n\
                 Sentiment Score: {sentiment_baseline}\n\n\
                 Provide suggestions on how to best engage with this client."
            }
            PromptKind::OutreachMessage => {
                "Compose a personalized invitation email to {name} for the upcoming art fair.\n\
                 Mention their interest in {purchase_history} and reference their previous \
                 interaction: {interaction_history}.\n\
                 Suggest scheduling a meeting during their preferred contact time: \
                 {preferred_contact_times}."
            }
            PromptKind::Sentiment => {
                "Assess the relationship sentiment for the following VIP client:\n\n\
                 Name: {name}\n\
                 Interaction History: {interaction_history}\n\
                 Last Contact Date: {last_contact}\n\n\
                 Respond with a single number between -1 and 1, where -1 is very negative \
                 and 1 is very positive."
            }
            PromptKind::EngagementSuggestions => {
                "Suggest three concrete ways to re-engage the VIP client {name}.\n\
                 Their purchase history: {purchase_history}. Their last contact was on \
                 {last_contact}.\n\
                 Keep each suggestion to one sentence."
            }
            PromptKind::EventRecommendation => {
                "Given the upcoming events:\n\
                 {events}\n\n\
                 Recommend the single best event to invite {name} to, based on their \
                 interest in {purchase_history}, and explain why in two sentences."
            }
            PromptKind::ConversationStarters => {
                "Write three conversation starters a relationship manager could use with \
                 {name}, drawing on their interest in {purchase_history} and their previous \
                 interaction: {interaction_history}."
            }
            PromptKind::Summary => {
                "Summarize the relationship with the following VIP client in three \
                 sentences:\n\n\
                 Name: {name}\n\
                 Purchase History: {purchase_history}\n\
                 Interaction History: {interaction_history}\n\
                 Last Contact Date: {last_contact}"
            }
            PromptKind::FollowUpPlan => {
                "Draft a follow-up plan for {name}, last contacted on {last_contact}.\n\
                 Account manager notes: {notes}\n\
                 Propose timing within their preferred contact window: \
                 {preferred_contact_times}."
            }
            PromptKind::ContentCuration => {
                "Curate three pieces of content (articles, artist profiles, or catalogues) \
                 to share with {name}, matched to their interest in {purchase_history}. \
                 One line each."
            }
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PromptKind::Insights => "insights",
            PromptKind::OutreachMessage => "outreach_message",
            PromptKind::Sentiment => "sentiment",
            PromptKind::EngagementSuggestions => "engagement_suggestions",
            PromptKind::EventRecommendation => "event_recommendation",
            PromptKind::ConversationStarters => "conversation_starters",
            PromptKind::Summary => "summary",
            PromptKind::FollowUpPlan => "follow_up_plan",
            PromptKind::ContentCuration => "content_curation",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for PromptKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insights" => Ok(PromptKind::Insights),
            "outreach_message" => Ok(PromptKind::OutreachMessage),
            "sentiment" => Ok(PromptKind::Sentiment),
            "engagement_suggestions" => Ok(PromptKind::EngagementSuggestions),
            "event_recommendation" => Ok(PromptKind::EventRecommendation),
            "conversation_starters" => Ok(PromptKind::ConversationStarters),
            "summary" => Ok(PromptKind::Summary),
            "follow_up_plan" => Ok(PromptKind::FollowUpPlan),
            "content_curation" => Ok(PromptKind::ContentCuration),
            _ => Err(format!("Unknown prompt kind: {}", s)),
        }
    }
}

/// A prompt kind plus the values for its substitution slots.
///
/// Built fresh per user action, rendered once, not retained. The typed
/// constructors derive the value map from entity fields so callers never
/// hand-assemble prompt text.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    kind: PromptKind,
    values: BTreeMap<String, String>,
}

impl PromptRequest {
    pub fn new(kind: PromptKind, values: BTreeMap<String, String>) -> Self {
        Self { kind, values }
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn insights(client: &ClientProfile) -> Self {
        Self::new(PromptKind::Insights, profile_fields(client))
    }

    pub fn outreach_message(client: &ClientProfile) -> Self {
        Self::new(PromptKind::OutreachMessage, profile_fields(client))
    }

    pub fn sentiment(client: &ClientProfile) -> Self {
        Self::new(PromptKind::Sentiment, profile_fields(client))
    }

    pub fn engagement_suggestions(client: &ClientProfile) -> Self {
        Self::new(PromptKind::EngagementSuggestions, profile_fields(client))
    }

    pub fn event_recommendation(client: &ClientProfile, events: &[GalleryEvent]) -> Self {
        let mut values = profile_fields(client);
        values.insert("events".to_string(), format_events(events));
        Self::new(PromptKind::EventRecommendation, values)
    }

    pub fn conversation_starters(client: &ClientProfile) -> Self {
        Self::new(PromptKind::ConversationStarters, profile_fields(client))
    }

    pub fn summary(client: &ClientProfile) -> Self {
        Self::new(PromptKind::Summary, profile_fields(client))
    }

    pub fn follow_up_plan(client: &ClientProfile, notes: &str) -> Self {
        let mut values = profile_fields(client);
        values.insert("notes".to_string(), notes.to_string());
        Self::new(PromptKind::FollowUpPlan, values)
    }

    pub fn content_curation(client: &ClientProfile) -> Self {
        Self::new(PromptKind::ContentCuration, profile_fields(client))
    }

    /// Render the template, substituting every required slot.
    ///
    /// Fails with [`EngageError::MissingField`] on the first absent value;
    /// the output of a successful render contains no unresolved slots.
    pub fn render(&self) -> Result<String, EngageError> {
        let mut text = self.kind.template().to_string();
        for &field in self.kind.required_fields() {
            let value = self.values.get(field).ok_or(EngageError::MissingField {
                kind: self.kind,
                field,
            })?;
            text = text.replace(&format!("{{{}}}", field), value);
        }
        Ok(text)
    }
}

fn profile_fields(client: &ClientProfile) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    values.insert("name".to_string(), client.name.clone());
    values.insert(
        "purchase_history".to_string(),
        client.purchase_history.clone(),
    );
    values.insert(
        "interaction_history".to_string(),
        client.interaction_history.clone(),
    );
    values.insert(
        "preferred_contact_times".to_string(),
        client.preferred_contact_times.clone(),
    );
    values.insert("last_contact".to_string(), client.last_contact.to_string());
    values.insert(
        "sentiment_baseline".to_string(),
        client.sentiment_baseline.to_string(),
    );
    values
}

fn format_events(events: &[GalleryEvent]) -> String {
    events
        .iter()
        .map(|e| format!("- {} ({})", e.name, e.date))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_client() -> ClientProfile {
        ClientProfile {
            id: 1,
            name: "Alice Smith".to_string(),
            purchase_history: "Contemporary Art, Sculptures".to_string(),
            interaction_history: "Attended Art Basel Miami 2022".to_string(),
            preferred_contact_times: "Weekdays, Afternoon".to_string(),
            last_contact: NaiveDate::from_ymd_opt(2023, 9, 15).unwrap(),
            sentiment_baseline: 0.8,
        }
    }

    fn sample_events() -> Vec<GalleryEvent> {
        vec![
            GalleryEvent {
                name: "Art Basel Miami Beach".to_string(),
                date: NaiveDate::from_ymd_opt(2023, 12, 8).unwrap(),
            },
            GalleryEvent {
                name: "Art Basel Hong Kong".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 28).unwrap(),
            },
        ]
    }

    fn request_for(kind: PromptKind) -> PromptRequest {
        let client = sample_client();
        match kind {
            PromptKind::Insights => PromptRequest::insights(&client),
            PromptKind::OutreachMessage => PromptRequest::outreach_message(&client),
            PromptKind::Sentiment => PromptRequest::sentiment(&client),
            PromptKind::EngagementSuggestions => PromptRequest::engagement_suggestions(&client),
            PromptKind::EventRecommendation => {
                PromptRequest::event_recommendation(&client, &sample_events())
            }
            PromptKind::ConversationStarters => PromptRequest::conversation_starters(&client),
            PromptKind::Summary => PromptRequest::summary(&client),
            PromptKind::FollowUpPlan => {
                PromptRequest::follow_up_plan(&client, "Wants a private preview")
            }
            PromptKind::ContentCuration => PromptRequest::content_curation(&client),
        }
    }

    #[test]
    fn all_kinds_render_without_unresolved_slots() {
        for kind in PromptKind::ALL {
            let rendered = request_for(kind).render().unwrap();
            assert!(
                !rendered.contains('{') && !rendered.contains('}'),
                "unresolved slot in {} template: {}",
                kind,
                rendered
            );
            assert!(rendered.contains("Alice Smith"), "{} lost the name", kind);
        }
    }

    #[test]
    fn rendered_output_contains_supplied_values_verbatim() {
        let rendered = request_for(PromptKind::Insights).render().unwrap();
        assert!(rendered.contains("Contemporary Art, Sculptures"));
        assert!(rendered.contains("Attended Art Basel Miami 2022"));
        assert!(rendered.contains("Weekdays, Afternoon"));
        assert!(rendered.contains("2023-09-15"));
        assert!(rendered.contains("0.8"));
    }

    #[test]
    fn event_recommendation_lists_every_event() {
        let rendered = request_for(PromptKind::EventRecommendation).render().unwrap();
        assert!(rendered.contains("Art Basel Miami Beach (2023-12-08)"));
        assert!(rendered.contains("Art Basel Hong Kong (2024-03-28)"));
    }

    #[test]
    fn follow_up_plan_includes_notes() {
        let rendered = request_for(PromptKind::FollowUpPlan).render().unwrap();
        assert!(rendered.contains("Wants a private preview"));
    }

    #[test]
    fn missing_field_is_rejected_for_every_kind() {
        for kind in PromptKind::ALL {
            let err = PromptRequest::new(kind, BTreeMap::new())
                .render()
                .unwrap_err();
            match err {
                EngageError::MissingField { kind: k, .. } => assert_eq!(k, kind),
                other => panic!("expected MissingField for {}, got {:?}", kind, other),
            }
        }
    }

    #[test]
    fn dropping_any_single_required_field_is_rejected() {
        for kind in PromptKind::ALL {
            for field in kind.required_fields() {
                let request = request_for(kind);
                let mut values = request.values.clone();
                values.remove(*field);
                let err = PromptRequest::new(kind, values).render().unwrap_err();
                match err {
                    EngageError::MissingField { field: f, .. } => assert_eq!(f, *field),
                    other => panic!("expected MissingField, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        for kind in PromptKind::ALL {
            let a = request_for(kind).render().unwrap();
            let b = request_for(kind).render().unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in PromptKind::ALL {
            let parsed: PromptKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("podcast_script".parse::<PromptKind>().is_err());
    }
}
