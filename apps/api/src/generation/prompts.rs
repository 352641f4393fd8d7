// Prompt templates for the generation flows.
// System instructions live in llm_client::prompts.
//
// Placeholders are substituted with `str::replace`. User-supplied text is
// always substituted last so that brace-delimited text inside a transcript or
// quote is inserted verbatim and never re-expanded.

use crate::generation::case_study::CaseStudyInput;
use crate::generation::review::ReviewInput;
use crate::generation::sections::SectionLabel;

/// Case-study prompt template.
/// Replace `{company_size}`, `{industry}`, the three `{..._header}` slots and
/// finally `{transcript}` before sending.
pub const CASE_STUDY_PROMPT_TEMPLATE: &str = r#"
You're an expert B2B marketer. Write a case study in 3 sections—Problem, Solution, Results—for a {company_size} company in the {industry} industry.

Here is the interview transcript to use as context:
"""
{transcript}
"""

Structure:
{problem_header}
<Explain the customer's core pain points>

{solution_header}
<Explain how the product or service solved the problems>

{results_header}
<Include 3-4 clear metrics or outcome statements>
"#;

/// G2 review prompt template.
/// Replace `{reviewer_role}`, `{rating}` and finally `{customer_quote}` before sending.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"
You are a B2B SaaS user writing a detailed G2 review. Based on the following info, write a G2 review with the following sections:

1. What do you like best?
2. What do you dislike?
3. Recommendations to others
4. What problems were you solving? What benefits did you get?

Input:
Customer Quote: "{customer_quote}"
Reviewer Role: {reviewer_role}
Rating: {rating}/5
"#;

/// Renders the case-study prompt. Pure; no escaping or truncation.
pub fn build_case_study_prompt(input: &CaseStudyInput) -> String {
    CASE_STUDY_PROMPT_TEMPLATE
        .replace("{problem_header}", &SectionLabel::Problem.header())
        .replace("{solution_header}", &SectionLabel::Solution.header())
        .replace("{results_header}", &SectionLabel::Results.header())
        .replace("{company_size}", &input.company_size)
        .replace("{industry}", &input.industry)
        .replace("{transcript}", &input.transcript)
}

/// Renders the G2 review prompt. Pure; no escaping or truncation.
pub fn build_review_prompt(input: &ReviewInput) -> String {
    REVIEW_PROMPT_TEMPLATE
        .replace("{reviewer_role}", &input.reviewer_role)
        .replace("{rating}", &input.rating.to_string())
        .replace("{customer_quote}", &input.customer_quote)
}
