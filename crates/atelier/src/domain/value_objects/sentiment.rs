//! SentimentReading - typed outcome of sentiment interpretation

use serde::{Deserialize, Serialize};

/// Outcome of interpreting a model reply as a sentiment score.
///
/// The variant records which rung of the fallback ladder produced the value:
/// a number parsed out of the reply, a keyword-derived estimate, or no signal
/// at all. `Undetermined` is distinct from a 0.0 score so that trend analysis
/// can tell "neutral" from "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum SentimentReading {
    /// A number found in the reply, already validated to lie in [-1, 1]
    Numeric(f64),
    /// Derived from a sentiment keyword in the reply text
    Keyword(f64),
    /// No number and no keyword matched
    Undetermined,
}

impl SentimentReading {
    /// The numeric score, if any rung produced one
    pub fn score(&self) -> Option<f64> {
        match self {
            SentimentReading::Numeric(v) | SentimentReading::Keyword(v) => Some(*v),
            SentimentReading::Undetermined => None,
        }
    }

    pub fn is_determined(&self) -> bool {
        !matches!(self, SentimentReading::Undetermined)
    }
}

impl std::fmt::Display for SentimentReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentReading::Numeric(v) => write!(f, "{} (scored)", v),
            SentimentReading::Keyword(v) => write!(f, "{} (keyword estimate)", v),
            SentimentReading::Undetermined => write!(f, "undetermined"),
        }
    }
}
