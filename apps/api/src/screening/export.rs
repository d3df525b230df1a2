//! CSV export of a ranked result set.

use csv::Writer;

use crate::screening::models::RankedResultSet;

/// Fixed download name for the exported table.
pub const EXPORT_FILE_NAME: &str = "resume_screening_results.csv";

const HEADER: [&str; 8] = [
    "Rank",
    "File Name",
    "Overall Score",
    "Recommendation",
    "Skills Match",
    "Experience Match",
    "Education Match",
    "Summary",
];

/// Renders the ranked records as CSV, one row per record in ranked order,
/// header row first. Ranks are 1-based.
pub fn to_csv(ranked: &RankedResultSet) -> Result<String, csv::Error> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for (idx, record) in ranked.records.iter().enumerate() {
        writer.write_record([
            (idx + 1).to_string(),
            record.file_name.clone(),
            record.overall_score.to_string(),
            record.recommendation.clone(),
            record.skills_match.to_string(),
            record.experience_match.to_string(),
            record.education_match.to_string(),
            record.summary.clone(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    // csv::Writer only ever emits the UTF-8 we fed it
    Ok(String::from_utf8(bytes).expect("CSV output is valid UTF-8"))
}
