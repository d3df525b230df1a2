//! Batch pipeline — drives extraction and analysis over the uploaded
//! documents, one at a time in upload order.
//!
//! Every per-document error is local: it is tallied with a reason and the
//! loop moves on. The batch itself never aborts. Only pre-flight
//! validation (missing credential, job description, or files) rejects a
//! run before it starts, and that happens in the handler.

use serde::Serialize;
use tracing::{info, warn};

use crate::extraction::{extract, Document, ExtractError};
use crate::screening::analyzer::{AnalyzeError, ResumeAnalyzer};
use crate::screening::models::AnalysisRecord;

/// Why one document produced no analysis record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// File suffix outside {pdf, docx, txt}.
    UnsupportedFormat,
    /// The bytes could not be decoded in their claimed format.
    ExtractionFailed,
    /// Extraction succeeded but produced no usable text.
    EmptyDocument,
    /// The external scoring call failed (network, auth, quota, server).
    ServiceError,
    /// The service replied but no valid analysis could be parsed from it.
    MalformedResponse,
}

/// One excluded document, with the reason and a human-readable detail.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailure {
    pub file_name: String,
    pub reason: FailureReason,
    pub detail: String,
}

/// The outcome of one batch run: successful records in upload order plus
/// the tally of per-document failures for diagnostic display.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<AnalysisRecord>,
    pub failures: Vec<DocumentFailure>,
}

impl BatchReport {
    /// True when no document produced a usable record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Runs the batch sequentially: each document's extraction and analysis
/// completes (or fails) before the next begins. Records are appended in
/// upload order; the final ordering is the ranking step's concern.
pub async fn run_batch(
    documents: &[Document],
    job_description: &str,
    api_key: &str,
    analyzer: &dyn ResumeAnalyzer,
) -> BatchReport {
    let mut report = BatchReport::default();
    let total = documents.len();

    for (idx, document) in documents.iter().enumerate() {
        info!(
            "Processing document {}/{}: {}",
            idx + 1,
            total,
            document.file_name
        );

        let resume_text = match extract(document) {
            Ok(text) => text,
            Err(e) => {
                warn!("{}: {}", document.file_name, e);
                report.failures.push(failure_from_extract(document, &e));
                continue;
            }
        };

        if resume_text.trim().is_empty() {
            warn!("{}: extracted no text", document.file_name);
            report.failures.push(DocumentFailure {
                file_name: document.file_name.clone(),
                reason: FailureReason::EmptyDocument,
                detail: "extraction produced no text".to_string(),
            });
            continue;
        }

        match analyzer.analyze(&resume_text, job_description, api_key).await {
            Ok(mut record) => {
                record.file_name = document.file_name.clone();
                report.records.push(record);
            }
            Err(e) => {
                warn!("{}: {}", document.file_name, e);
                report.failures.push(DocumentFailure {
                    file_name: document.file_name.clone(),
                    reason: match e {
                        AnalyzeError::Service(_) => FailureReason::ServiceError,
                        AnalyzeError::MalformedResponse(_) => FailureReason::MalformedResponse,
                    },
                    detail: e.to_string(),
                });
            }
        }
    }

    info!(
        "Batch complete: {} analyzed, {} failed",
        report.records.len(),
        report.failures.len()
    );

    report
}

fn failure_from_extract(document: &Document, e: &ExtractError) -> DocumentFailure {
    DocumentFailure {
        file_name: document.file_name.clone(),
        reason: match e {
            ExtractError::UnsupportedFormat(_) => FailureReason::UnsupportedFormat,
            _ => FailureReason::ExtractionFailed,
        },
        detail: e.to_string(),
    }
}
