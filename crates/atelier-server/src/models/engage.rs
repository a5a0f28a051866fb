//! Generation API models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use atelier::SentimentReading;

/// Request body for the generation operations
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Free-form account manager notes; used by the follow_up_plan kind
    pub notes: Option<String>,
}

/// Generated text for one client and one prompt kind
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub client_id: u32,
    pub kind: String,
    pub content: String,
}

/// Sentiment estimate for one client.
///
/// `score` is absent when the reading is undetermined; `source` says which
/// rung of the fallback ladder produced the value ("numeric", "keyword",
/// or "undetermined"), so a keyword-neutral 0.0 stays distinguishable from
/// a parsed 0.0 and from no signal at all.
#[derive(Debug, Serialize, ToSchema)]
pub struct SentimentResponse {
    pub client_id: u32,
    pub score: Option<f64>,
    pub source: String,
}

impl SentimentResponse {
    pub fn new(client_id: u32, reading: SentimentReading) -> Self {
        let source = match reading {
            SentimentReading::Numeric(_) => "numeric",
            SentimentReading::Keyword(_) => "keyword",
            SentimentReading::Undetermined => "undetermined",
        };

        Self {
            client_id,
            score: reading.score(),
            source: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undetermined_is_not_rendered_as_zero() {
        let resp = SentimentResponse::new(1, SentimentReading::Undetermined);
        assert_eq!(resp.score, None);
        assert_eq!(resp.source, "undetermined");

        let resp = SentimentResponse::new(1, SentimentReading::Keyword(0.0));
        assert_eq!(resp.score, Some(0.0));
        assert_eq!(resp.source, "keyword");
    }
}
