//! Case-study generation: validate → build prompt → one completion call →
//! split the reply into Problem / Solution / Results.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::build_case_study_prompt;
use crate::generation::required_field;
use crate::generation::sections::{extract_section, SectionLabel};
use crate::llm_client::prompts::CASE_STUDY_SYSTEM;
use crate::llm_client::{CompletionRequest, CompletionService};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Request body for case-study generation. Every field is required; they are
/// optional here so that absence is reported as a 400 rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyRequest {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub company_size: Option<String>,
}

/// A validated case-study request.
#[derive(Debug, Clone)]
pub struct CaseStudyInput {
    pub transcript: String,
    pub industry: String,
    pub company_size: String,
}

impl CaseStudyRequest {
    pub fn validate(self) -> Result<CaseStudyInput, AppError> {
        match (
            required_field(self.transcript),
            required_field(self.industry),
            required_field(self.company_size),
        ) {
            (Some(transcript), Some(industry), Some(company_size)) => Ok(CaseStudyInput {
                transcript,
                industry,
                company_size,
            }),
            _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// The three extracted sections. Absent sections are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseStudyResult {
    pub problem: String,
    pub solution: String,
    pub results: String,
}

impl CaseStudyResult {
    pub fn from_reply(reply: &str) -> Self {
        Self {
            problem: extract_section(reply, SectionLabel::Problem),
            solution: extract_section(reply, SectionLabel::Solution),
            results: extract_section(reply, SectionLabel::Results),
        }
    }

    pub fn section(&self, label: SectionLabel) -> &str {
        match label {
            SectionLabel::Problem => &self.problem,
            SectionLabel::Solution => &self.solution,
            SectionLabel::Results => &self.results,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.problem.is_empty() && self.solution.is_empty() && self.results.is_empty()
    }
}

/// Runs the case-study flow against the given completion backend.
pub async fn generate_case_study(
    completion: &dyn CompletionService,
    input: &CaseStudyInput,
) -> Result<CaseStudyResult, AppError> {
    let prompt = build_case_study_prompt(input);

    info!(
        "Generating case study: industry={}, company_size={}, transcript_chars={}",
        input.industry,
        input.company_size,
        input.transcript.chars().count()
    );

    let reply = completion
        .complete(CompletionRequest::new(CASE_STUDY_SYSTEM, &prompt))
        .await
        .map_err(|e| AppError::Completion(format!("Case study generation failed: {e}")))?;

    let result = CaseStudyResult::from_reply(&reply);
    if result.is_empty() {
        warn!(
            "Case study reply contained no section headers ({} chars)",
            reply.len()
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::test_support::FakeCompletion;

    fn request(transcript: &str, industry: &str, company_size: &str) -> CaseStudyRequest {
        CaseStudyRequest {
            transcript: Some(transcript.to_string()),
            industry: Some(industry.to_string()),
            company_size: Some(company_size.to_string()),
        }
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let req: CaseStudyRequest = serde_json::from_str(
            r#"{"transcript": "t", "industry": "Retail", "companySize": "Small (1-50 employees)"}"#,
        )
        .unwrap();
        assert_eq!(req.company_size.as_deref(), Some("Small (1-50 employees)"));
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        let cases = [
            CaseStudyRequest {
                transcript: None,
                ..request("t", "Retail", "Small")
            },
            CaseStudyRequest {
                industry: Some(String::new()),
                ..request("t", "Retail", "Small")
            },
            CaseStudyRequest {
                company_size: Some("   ".to_string()),
                ..request("t", "Retail", "Small")
            },
        ];
        for case in cases {
            match case.validate() {
                Err(AppError::Validation(msg)) => assert_eq!(msg, MISSING_FIELDS_MESSAGE),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_keeps_values_verbatim() {
        let input = request("  padded transcript  ", "Retail", "Small")
            .validate()
            .unwrap();
        assert_eq!(input.transcript, "  padded transcript  ");
    }

    #[test]
    fn test_from_reply_and_section_accessor() {
        let result = CaseStudyResult::from_reply("## Problem\nA\n## Solution\nB\n## Results\nC");
        assert_eq!(
            result,
            CaseStudyResult {
                problem: "A".to_string(),
                solution: "B".to_string(),
                results: "C".to_string(),
            }
        );
        assert_eq!(result.section(SectionLabel::Solution), "B");
        assert!(!result.is_empty());
        assert!(CaseStudyResult::from_reply("no headers here").is_empty());
    }

    #[tokio::test]
    async fn test_generate_case_study_sends_prompt_and_splits_reply() {
        let fake = FakeCompletion::replying("## Problem\nSlow\n## Solution\nFast\n## Results\n2x");
        let input = request("transcript text", "Finance", "Large (501-5000 employees)")
            .validate()
            .unwrap();

        let result = generate_case_study(&fake, &input).await.unwrap();
        assert_eq!(result.problem, "Slow");
        assert_eq!(result.solution, "Fast");
        assert_eq!(result.results, "2x");

        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, CASE_STUDY_SYSTEM);
        assert!(calls[0].prompt.contains("transcript text"));
        assert!((calls[0].temperature - 0.7).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_generate_case_study_tolerates_headerless_reply() {
        let fake = FakeCompletion::replying("I cannot help with that.");
        let input = request("t", "Retail", "Small").validate().unwrap();
        let result = generate_case_study(&fake, &input).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_generate_case_study_maps_upstream_failure() {
        let fake = FakeCompletion::failing();
        let input = request("t", "Retail", "Small").validate().unwrap();
        let err = generate_case_study(&fake, &input).await.unwrap_err();
        assert!(matches!(err, AppError::Completion(_)));
    }
}
