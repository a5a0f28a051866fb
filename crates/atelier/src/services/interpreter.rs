//! Response Interpreter
//!
//! Specializes raw engine text into typed results. Plain-text operations use
//! the engine output as-is; sentiment extraction has to survive a backend
//! that was asked for a number but may answer in prose, so it degrades
//! through a strict ladder: parsed number, keyword estimate, then an
//! explicit "undetermined" rather than a silent zero.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::domain::SentimentReading;

/// First signed decimal substring, e.g. "-0.35" in "score is -0.35 overall"
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("number pattern is valid"));

/// Interpret a free-text reply as a sentiment score in [-1, 1].
///
/// Priority order: the first number in the text wins if it is in range; an
/// out-of-range number is discarded, not clamped. The keyword scan then
/// checks "positive", "negative", "neutral" in that order. Anything else is
/// [`SentimentReading::Undetermined`].
pub fn interpret_sentiment(text: &str) -> SentimentReading {
    if let Some(found) = NUMBER.find(text) {
        if let Ok(value) = found.as_str().parse::<f64>() {
            if (-1.0..=1.0).contains(&value) {
                return SentimentReading::Numeric(value);
            }
            warn!(value, "discarding out-of-range sentiment value");
        }
    }

    let lowered = text.to_lowercase();
    if lowered.contains("positive") {
        SentimentReading::Keyword(0.5)
    } else if lowered.contains("negative") {
        SentimentReading::Keyword(-0.5)
    } else if lowered.contains("neutral") {
        SentimentReading::Keyword(0.0)
    } else {
        SentimentReading::Undetermined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_is_parsed() {
        assert_eq!(interpret_sentiment("0.7"), SentimentReading::Numeric(0.7));
    }

    #[test]
    fn number_is_found_inside_prose() {
        assert_eq!(
            interpret_sentiment("The sentiment score is -0.35 overall."),
            SentimentReading::Numeric(-0.35)
        );
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert_eq!(interpret_sentiment("1"), SentimentReading::Numeric(1.0));
        assert_eq!(interpret_sentiment("-1.0"), SentimentReading::Numeric(-1.0));
    }

    #[test]
    fn positive_keyword_fallback() {
        assert_eq!(
            interpret_sentiment("I'd say this is fairly positive."),
            SentimentReading::Keyword(0.5)
        );
    }

    #[test]
    fn negative_keyword_fallback() {
        assert_eq!(
            interpret_sentiment("A rather Negative impression."),
            SentimentReading::Keyword(-0.5)
        );
    }

    #[test]
    fn neutral_keyword_fallback() {
        assert_eq!(
            interpret_sentiment("Neutral engagement overall."),
            SentimentReading::Keyword(0.0)
        );
    }

    #[test]
    fn keyword_priority_prefers_positive() {
        assert_eq!(
            interpret_sentiment("Mixed: positive in parts, negative in others."),
            SentimentReading::Keyword(0.5)
        );
    }

    #[test]
    fn no_signal_is_undetermined() {
        assert_eq!(
            interpret_sentiment("It's complicated."),
            SentimentReading::Undetermined
        );
    }

    #[test]
    fn out_of_range_number_is_discarded_not_clamped() {
        assert_eq!(interpret_sentiment("3.5"), SentimentReading::Undetermined);
    }

    #[test]
    fn out_of_range_number_falls_through_to_keywords() {
        assert_eq!(
            interpret_sentiment("I'd rate it 7 out of 10, quite positive."),
            SentimentReading::Keyword(0.5)
        );
    }

    #[test]
    fn undetermined_carries_no_score() {
        assert_eq!(interpret_sentiment("hmm").score(), None);
        assert_eq!(interpret_sentiment("neutral").score(), Some(0.0));
    }
}
