//! GalleryEvent - upcoming show record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An upcoming fair or gallery show.
///
/// Same lifecycle as [`super::ClientProfile`]: fixed at load time, read-only
/// for the rest of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryEvent {
    pub name: String,
    pub date: NaiveDate,
}
