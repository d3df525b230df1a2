//! Resume Analyzer — trait-based seam around the external scoring service.
//!
//! The trait has exactly one method so the pipeline can be exercised
//! against canned analyzers in tests without network access. The real
//! backend is `GeminiAnalyzer`, which builds the fixed prompt, makes one
//! call through `llm_client`, and validates the reply into an
//! `AnalysisRecord`.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`.

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::{LlmClient, LlmError};
use crate::screening::models::AnalysisRecord;
use crate::screening::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};

/// Why a single document's analysis failed. Per-document and local: the
/// pipeline records the reason and moves on to the next file.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The service call itself failed (network, auth, quota, server error).
    #[error("service error: {0}")]
    Service(String),

    /// The service replied but no valid analysis object could be parsed.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<LlmError> for AnalyzeError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Http(_) | LlmError::Api { .. } => AnalyzeError::Service(e.to_string()),
            LlmError::Parse(_) | LlmError::EmptyContent => {
                AnalyzeError::MalformedResponse(e.to_string())
            }
        }
    }
}

/// The analyzer seam. One method: resume text + job description +
/// per-run credential in, validated record out.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
        api_key: &str,
    ) -> Result<AnalysisRecord, AnalyzeError>;
}

/// Production analyzer backed by the Gemini API via `LlmClient`.
pub struct GeminiAnalyzer {
    llm: LlmClient,
}

impl GeminiAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeAnalyzer for GeminiAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
        api_key: &str,
    ) -> Result<AnalysisRecord, AnalyzeError> {
        let prompt = build_analysis_prompt(job_description, resume_text);

        let mut record: AnalysisRecord = self
            .llm
            .call_json(&prompt, ANALYSIS_SYSTEM, api_key)
            .await?;

        record.clamp_scores();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::recover_json;

    /// Parses a raw reply string the way GeminiAnalyzer's call path does,
    /// minus the network hop: recover JSON, deserialize, clamp.
    fn parse_reply(reply: &str) -> Result<AnalysisRecord, AnalyzeError> {
        let mut record: AnalysisRecord = serde_json::from_str(recover_json(reply))
            .map_err(|e| AnalyzeError::MalformedResponse(e.to_string()))?;
        record.clamp_scores();
        Ok(record)
    }

    const PURE_JSON: &str = r#"{
        "overall_score": 72,
        "skills_match": 70,
        "experience_match": 75,
        "education_match": 68,
        "key_strengths": ["Solid Go fundamentals"],
        "gaps": ["Only 3 years of experience"],
        "recommendation": "Good Fit",
        "summary": "Capable mid-level engineer. Slightly short of the stated experience bar."
    }"#;

    #[test]
    fn test_pure_json_reply_parses() {
        let record = parse_reply(PURE_JSON).unwrap();
        assert_eq!(record.overall_score, 72.0);
        assert_eq!(record.recommendation, "Good Fit");
    }

    #[test]
    fn test_fenced_reply_parses() {
        let fenced = format!("```json\n{PURE_JSON}\n```");
        let record = parse_reply(&fenced).unwrap();
        assert_eq!(record.overall_score, 72.0);
    }

    #[test]
    fn test_prose_wrapped_reply_parses_via_bracket_scan() {
        let wrapped = format!("Sure! Here is the analysis: {PURE_JSON} Let me know if you need more.");
        let record = parse_reply(&wrapped).unwrap();
        assert_eq!(record.recommendation, "Good Fit");
    }

    #[test]
    fn test_reply_without_json_is_malformed() {
        let result = parse_reply("I am unable to analyze this resume.");
        assert!(matches!(result, Err(AnalyzeError::MalformedResponse(_))));
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let reply = r#"{
            "overall_score": 110,
            "skills_match": 90,
            "experience_match": 85,
            "education_match": -10,
            "key_strengths": [],
            "gaps": [],
            "recommendation": "Strong Fit",
            "summary": "Over-enthusiastic scoring."
        }"#;
        let record = parse_reply(reply).unwrap();
        assert_eq!(record.overall_score, 100.0);
        assert_eq!(record.education_match, 0.0);
    }

    #[test]
    fn test_llm_error_classification() {
        let parse_err = serde_json::from_str::<AnalysisRecord>("not json").unwrap_err();
        assert!(matches!(
            AnalyzeError::from(LlmError::Parse(parse_err)),
            AnalyzeError::MalformedResponse(_)
        ));
        assert!(matches!(
            AnalyzeError::from(LlmError::Api {
                status: 403,
                message: "invalid key".into()
            }),
            AnalyzeError::Service(_)
        ));
        assert!(matches!(
            AnalyzeError::from(LlmError::EmptyContent),
            AnalyzeError::MalformedResponse(_)
        ));
    }
}
