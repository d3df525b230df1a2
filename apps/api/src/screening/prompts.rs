// All LLM prompt constants for the Screening module.

/// System prompt for resume analysis — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert technical recruiter analyzing resumes against job descriptions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Fixed instruction block appended after the embedded job description and
/// resume text. The schema matches `AnalysisRecord` minus `file_name`.
pub const ANALYSIS_INSTRUCTIONS: &str = r#"Analyze this resume against the job description and provide a JSON response with:
1. overall_score (0-100): Overall match score
2. skills_match (0-100): How well skills match
3. experience_match (0-100): How well experience matches
4. education_match (0-100): How well education matches
5. key_strengths (array): Top 3-5 strengths
6. gaps (array): Top 3-5 gaps or concerns
7. recommendation (string): "Strong Fit", "Good Fit", "Moderate Fit", or "Weak Fit"
8. summary (string): 2-3 sentence summary of the candidate

Respond ONLY with valid JSON, no markdown formatting or extra text."#;

/// Builds the analysis prompt: job description and resume text embedded
/// verbatim, followed by the fixed instruction block. Single-pass
/// formatting — input text that happens to contain template-like braces
/// passes through untouched.
pub fn build_analysis_prompt(job_description: &str, resume_text: &str) -> String {
    format!(
        "Job Description:\n{job_description}\n\nResume:\n{resume_text}\n\n{ANALYSIS_INSTRUCTIONS}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_inputs_verbatim() {
        let prompt = build_analysis_prompt(
            "Senior backend engineer, 5 years Go experience",
            "Jane Doe — Go developer since 2018",
        );
        assert!(prompt.contains("Job Description:\nSenior backend engineer, 5 years Go experience"));
        assert!(prompt.contains("Resume:\nJane Doe — Go developer since 2018"));
        assert!(prompt.ends_with(ANALYSIS_INSTRUCTIONS));
    }

    #[test]
    fn test_placeholder_like_input_is_not_substituted() {
        // A JD that literally contains "{resume_text}" must survive as-is;
        // the resume must appear exactly once, in its own section.
        let prompt = build_analysis_prompt(
            "Template-savvy JD mentioning {resume_text} and {job_description}",
            "actual resume body",
        );
        assert!(prompt.contains("mentioning {resume_text} and {job_description}"));
        assert_eq!(prompt.matches("actual resume body").count(), 1);
    }

    #[test]
    fn test_instructions_ask_for_all_eight_fields() {
        for field in [
            "overall_score",
            "skills_match",
            "experience_match",
            "education_match",
            "key_strengths",
            "gaps",
            "recommendation",
            "summary",
        ] {
            assert!(
                ANALYSIS_INSTRUCTIONS.contains(field),
                "instructions missing {field}"
            );
        }
    }
}
