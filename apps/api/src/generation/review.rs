//! G2 review generation: validate → build prompt → one completion call →
//! return the reply unchanged.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::build_review_prompt;
use crate::generation::required_field;
use crate::llm_client::prompts::REVIEW_SYSTEM;
use crate::llm_client::{CompletionRequest, CompletionService};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields.";
pub const INVALID_RATING_MESSAGE: &str = "Rating must be a whole number from 1 to 5.";

/// A rating as sent by clients: either a JSON number or a numeric string
/// (select inputs post `"5"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Number(i64),
    Text(String),
}

impl RatingInput {
    /// `None` when the value is blank, `Some(Err)` when present but not 1–5.
    fn parse(self) -> Option<Result<u8, AppError>> {
        let value = match self {
            RatingInput::Number(n) => n,
            RatingInput::Text(s) if s.trim().is_empty() => return None,
            RatingInput::Text(s) => match s.trim().parse::<i64>() {
                Ok(n) => n,
                Err(_) => return Some(Err(invalid_rating())),
            },
        };
        Some(match u8::try_from(value) {
            Ok(rating @ 1..=5) => Ok(rating),
            _ => Err(invalid_rating()),
        })
    }
}

fn invalid_rating() -> AppError {
    AppError::Validation(INVALID_RATING_MESSAGE.to_string())
}

/// Request body for G2 review generation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[serde(default)]
    pub customer_quote: Option<String>,
    #[serde(default)]
    pub reviewer_role: Option<String>,
    #[serde(default)]
    pub rating: Option<RatingInput>,
}

/// A validated review request.
#[derive(Debug, Clone)]
pub struct ReviewInput {
    pub customer_quote: String,
    pub reviewer_role: String,
    pub rating: u8,
}

impl ReviewRequest {
    pub fn validate(self) -> Result<ReviewInput, AppError> {
        let missing = || AppError::Validation(MISSING_FIELDS_MESSAGE.to_string());

        let customer_quote = required_field(self.customer_quote).ok_or_else(missing)?;
        let reviewer_role = required_field(self.reviewer_role).ok_or_else(missing)?;
        let rating = self.rating.and_then(RatingInput::parse).ok_or_else(missing)??;

        Ok(ReviewInput {
            customer_quote,
            reviewer_role,
            rating,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    pub review: String,
}

/// Runs the review flow against the given completion backend.
pub async fn generate_review(
    completion: &dyn CompletionService,
    input: &ReviewInput,
) -> Result<ReviewResult, AppError> {
    let prompt = build_review_prompt(input);

    info!(
        "Generating G2 review: role={}, rating={}",
        input.reviewer_role, input.rating
    );

    let review = completion
        .complete(CompletionRequest::new(REVIEW_SYSTEM, &prompt))
        .await
        .map_err(|e| AppError::Completion(format!("Review generation failed: {e}")))?;

    Ok(ReviewResult { review })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::test_support::FakeCompletion;

    fn parse(json: &str) -> Result<ReviewInput, AppError> {
        serde_json::from_str::<ReviewRequest>(json).unwrap().validate()
    }

    fn validation_message(result: Result<ReviewInput, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_rating_accepts_number_and_numeric_string() {
        let a = parse(r#"{"customerQuote": "q", "reviewerRole": "CTO", "rating": 5}"#).unwrap();
        let b = parse(r#"{"customerQuote": "q", "reviewerRole": "CTO", "rating": "3"}"#).unwrap();
        assert_eq!(a.rating, 5);
        assert_eq!(b.rating, 3);
    }

    #[test]
    fn test_missing_fields_report_missing_message() {
        for body in [
            r#"{"reviewerRole": "CTO", "rating": 5}"#,
            r#"{"customerQuote": "", "reviewerRole": "CTO", "rating": 5}"#,
            r#"{"customerQuote": "q", "rating": 5}"#,
            r#"{"customerQuote": "q", "reviewerRole": "CTO"}"#,
            r#"{"customerQuote": "q", "reviewerRole": "CTO", "rating": ""}"#,
            r#"{"customerQuote": "q", "reviewerRole": "CTO", "rating": null}"#,
        ] {
            assert_eq!(validation_message(parse(body)), MISSING_FIELDS_MESSAGE, "{body}");
        }
    }

    #[test]
    fn test_out_of_range_rating_is_rejected() {
        for body in [
            r#"{"customerQuote": "q", "reviewerRole": "CTO", "rating": 0}"#,
            r#"{"customerQuote": "q", "reviewerRole": "CTO", "rating": 6}"#,
            r#"{"customerQuote": "q", "reviewerRole": "CTO", "rating": -1}"#,
            r#"{"customerQuote": "q", "reviewerRole": "CTO", "rating": "6"}"#,
            r#"{"customerQuote": "q", "reviewerRole": "CTO", "rating": "five"}"#,
        ] {
            assert_eq!(validation_message(parse(body)), INVALID_RATING_MESSAGE, "{body}");
        }
    }

    #[tokio::test]
    async fn test_generate_review_passes_reply_through_unchanged() {
        let reply = "## What do you like best?\n  Everything.  \n";
        let fake = FakeCompletion::replying(reply);
        let input = parse(r#"{"customerQuote": "Love it", "reviewerRole": "CEO", "rating": 5}"#)
            .unwrap();

        let result = generate_review(&fake, &input).await.unwrap();
        assert_eq!(result.review, reply);

        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, REVIEW_SYSTEM);
        assert!(calls[0].prompt.contains("Rating: 5/5"));
    }

    #[tokio::test]
    async fn test_generate_review_maps_upstream_failure() {
        let fake = FakeCompletion::failing();
        let input = parse(r#"{"customerQuote": "q", "reviewerRole": "CTO", "rating": 2}"#).unwrap();
        assert!(matches!(
            generate_review(&fake, &input).await,
            Err(AppError::Completion(_))
        ));
    }
}
