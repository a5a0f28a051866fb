//! Atelier API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for the Atelier server
pub struct AtelierClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct ClientResponse {
    pub id: u32,
    pub name: String,
    pub purchase_history: String,
    pub interaction_history: String,
    pub preferred_contact_times: String,
    pub last_contact: String,
    pub sentiment_baseline: f64,
}

#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub name: String,
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub client_id: u32,
    pub kind: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SentimentResponse {
    pub client_id: u32,
    pub score: Option<f64>,
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct EngagementScoreResponse {
    pub client_id: u32,
    pub likelihood: u32,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl AtelierClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all client profiles
    pub async fn list_clients(&self) -> Result<Vec<ClientResponse>> {
        let url = format!("{}/atelier/clients", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Atelier API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Get one client profile
    pub async fn get_client(&self, id: u32) -> Result<ClientResponse> {
        let url = format!("{}/atelier/clients/{}", self.base_url, id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Atelier API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// List upcoming events
    pub async fn list_events(&self) -> Result<Vec<EventResponse>> {
        let url = format!("{}/atelier/events", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Atelier API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Run one generation operation
    pub async fn generate(
        &self,
        id: u32,
        kind: &str,
        notes: Option<&str>,
    ) -> Result<GenerateResponse> {
        let url = format!("{}/atelier/clients/{}/engage/{}", self.base_url, id, kind);

        let request = GenerateRequest {
            notes: notes.map(|s| s.to_string()),
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Atelier API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Estimate relationship sentiment
    pub async fn sentiment(&self, id: u32) -> Result<SentimentResponse> {
        let url = format!("{}/atelier/clients/{}/sentiment", self.base_url, id);
        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to connect to Atelier API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Fetch the simulated engagement score
    pub async fn engagement_score(&self, id: u32) -> Result<EngagementScoreResponse> {
        let url = format!(
            "{}/atelier/clients/{}/engagement-score",
            self.base_url, id
        );
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Atelier API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }
}
