//! Ranking & Aggregation — pure computation over the records the batch
//! produced. Failed analyses never reach this point.

use crate::screening::models::{AnalysisRecord, RankedResultSet, STRONG_FIT};

/// Sorts records descending by `overall_score` and computes the aggregate
/// summary. The sort is stable, so tied scores keep their upload order
/// (tie order is otherwise unspecified).
///
/// An empty input yields count 0, average 0.0, and no top score — the
/// mean is guarded, never a division by zero.
pub fn rank(mut records: Vec<AnalysisRecord>) -> RankedResultSet {
    records.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let count = records.len();
    let strong_fit_count = records
        .iter()
        .filter(|r| r.recommendation == STRONG_FIT)
        .count();

    let average_score = if count > 0 {
        let mean = records.iter().map(|r| r.overall_score).sum::<f64>() / count as f64;
        (mean * 10.0).round() / 10.0
    } else {
        0.0
    };

    let top_score = records.first().map(|r| r.overall_score);

    RankedResultSet {
        records,
        count,
        strong_fit_count,
        average_score,
        top_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file_name: &str, overall_score: f64, recommendation: &str) -> AnalysisRecord {
        AnalysisRecord {
            file_name: file_name.to_string(),
            overall_score,
            skills_match: overall_score,
            experience_match: overall_score,
            education_match: overall_score,
            key_strengths: vec![],
            gaps: vec![],
            recommendation: recommendation.to_string(),
            summary: "Test candidate.".to_string(),
        }
    }

    #[test]
    fn test_distinct_scores_sorted_strictly_descending() {
        let ranked = rank(vec![
            record("b.pdf", 60.0, "Moderate Fit"),
            record("a.pdf", 92.0, "Strong Fit"),
            record("c.pdf", 75.0, "Good Fit"),
        ]);
        let order: Vec<&str> = ranked.records.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(order, vec!["a.pdf", "c.pdf", "b.pdf"]);
        assert!(ranked
            .records
            .windows(2)
            .all(|w| w[0].overall_score > w[1].overall_score));
    }

    #[test]
    fn test_ties_keep_upload_order() {
        let ranked = rank(vec![
            record("first.pdf", 80.0, "Good Fit"),
            record("second.pdf", 80.0, "Good Fit"),
        ]);
        assert_eq!(ranked.records[0].file_name, "first.pdf");
        assert_eq!(ranked.records[1].file_name, "second.pdf");
    }

    #[test]
    fn test_empty_input_is_guarded() {
        let ranked = rank(vec![]);
        assert_eq!(ranked.count, 0);
        assert_eq!(ranked.strong_fit_count, 0);
        assert_eq!(ranked.average_score, 0.0);
        assert!(ranked.top_score.is_none());
    }

    #[test]
    fn test_strong_fit_count_is_exact_and_case_sensitive() {
        let ranked = rank(vec![
            record("a.pdf", 90.0, "Strong Fit"),
            record("b.pdf", 85.0, "strong fit"),
            record("c.pdf", 80.0, "Strong Fit indeed"),
            record("d.pdf", 75.0, "Strong Fit"),
        ]);
        assert_eq!(ranked.strong_fit_count, 2);
    }

    #[test]
    fn test_average_rounded_to_one_decimal() {
        let ranked = rank(vec![
            record("a.pdf", 80.0, "Good Fit"),
            record("b.pdf", 71.0, "Good Fit"),
            record("c.pdf", 65.0, "Moderate Fit"),
        ]);
        // (80 + 71 + 65) / 3 = 72.0
        assert_eq!(ranked.average_score, 72.0);

        let ranked = rank(vec![
            record("a.pdf", 80.0, "Good Fit"),
            record("b.pdf", 75.0, "Good Fit"),
            record("c.pdf", 70.0, "Moderate Fit"),
            record("d.pdf", 62.0, "Moderate Fit"),
        ]);
        // 287 / 4 = 71.75 → 71.8
        assert_eq!(ranked.average_score, 71.8);
    }

    #[test]
    fn test_top_score_equals_first_after_sort() {
        let ranked = rank(vec![
            record("low.pdf", 40.0, "Weak Fit"),
            record("high.pdf", 95.0, "Strong Fit"),
        ]);
        assert_eq!(ranked.top_score, Some(95.0));
        assert_eq!(ranked.records[0].overall_score, 95.0);
    }

    #[test]
    fn test_out_of_range_scores_still_sort() {
        // Ranking accepts records as-is; clamping happened upstream.
        let ranked = rank(vec![
            record("weird.pdf", 140.0, "Strong Fit"),
            record("normal.pdf", 90.0, "Strong Fit"),
        ]);
        assert_eq!(ranked.records[0].file_name, "weird.pdf");
        assert_eq!(ranked.top_score, Some(140.0));
    }
}
