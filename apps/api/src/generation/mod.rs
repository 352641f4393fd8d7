// Content generation: case studies and G2 reviews.
// All completion calls go through llm_client::CompletionService.

pub mod case_study;
pub mod export;
pub mod handlers;
pub mod prompts;
pub mod review;
pub mod sections;

#[cfg(test)]
pub mod test_support;

/// Returns the value if present and not blank. Values are kept verbatim.
pub(crate) fn required_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
