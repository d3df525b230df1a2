//! Data models for the screening pipeline.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// The recommendation label for a strong candidate. Counted exactly
/// (case-sensitive) in the aggregate summary; all other labels are
/// passed through untouched for the caller to style.
pub const STRONG_FIT: &str = "Strong Fit";

/// The structured result of analyzing one resume against one job
/// description. This is the exact schema the model is instructed to
/// return, minus `file_name`, which the pipeline attaches afterwards.
///
/// Missing fields fail deserialization and surface as a malformed
/// response for that document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    #[serde(default)]
    pub file_name: String,
    pub overall_score: f64,
    pub skills_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub key_strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendation: String,
    pub summary: String,
}

impl AnalysisRecord {
    /// Clamps all four score fields into [0, 100].
    ///
    /// The model is instructed to stay in range but nothing enforces it on
    /// the wire; out-of-range values would poison the mean and the sort, so
    /// they are clamped rather than rejected and the occurrence is logged.
    pub fn clamp_scores(&mut self) {
        for (name, score) in [
            ("overall_score", &mut self.overall_score),
            ("skills_match", &mut self.skills_match),
            ("experience_match", &mut self.experience_match),
            ("education_match", &mut self.education_match),
        ] {
            if !(0.0..=100.0).contains(score) {
                warn!("{} out of range ({}), clamping to [0, 100]", name, score);
                *score = score.clamp(0.0, 100.0);
            }
        }
    }
}

/// The ranked outcome of one screening run: records sorted descending by
/// `overall_score` plus derived aggregates. Never persisted — discarded
/// when the run's response has been sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResultSet {
    pub records: Vec<AnalysisRecord>,
    pub count: usize,
    pub strong_fit_count: usize,
    /// Arithmetic mean of `overall_score`, rounded to one decimal place.
    /// 0.0 for an empty run.
    pub average_score: f64,
    /// The first element's score post-sort; `None` for an empty run.
    pub top_score: Option<f64>,
}
