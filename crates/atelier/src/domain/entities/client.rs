//! ClientProfile - VIP client record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A VIP client record.
///
/// Profiles are loaded once at process start from the fixture store and are
/// never mutated afterwards; the core only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Stable identifier, unique across the store
    pub id: u32,
    pub name: String,
    /// Collecting interests, e.g. "Contemporary Art, Sculptures"
    pub purchase_history: String,
    /// Most recent notable interaction with the fair
    pub interaction_history: String,
    /// Preferred outreach window, e.g. "Weekdays, Afternoon"
    pub preferred_contact_times: String,
    pub last_contact: NaiveDate,
    /// Baseline sentiment in [0, 1], fixed at load time
    pub sentiment_baseline: f64,
}
