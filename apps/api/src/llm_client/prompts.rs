// Shared prompt fragments.
// Each feature that needs LLM calls defines its own templates in generation/prompts.rs.
// This file contains cross-cutting system instructions.

/// System instruction for case-study generation.
pub const CASE_STUDY_SYSTEM: &str =
    "You are a B2B SaaS marketing expert writing clear and concise case studies.";

/// System instruction for G2 review generation.
pub const REVIEW_SYSTEM: &str = "You are a B2B SaaS user writing an honest, detailed G2 review. \
    Write in the first person and keep the tone of a real customer, not a marketer.";
