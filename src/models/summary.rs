use chrono::{DateTime, Utc};
use serde::Serialize;

/// A completed summary. Only produced when the article text was
/// non-empty and the completion call succeeded; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub source_url: String,
    pub summary_text: String,
    pub generated_at: DateTime<Utc>,
}
