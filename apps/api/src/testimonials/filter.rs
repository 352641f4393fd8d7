//! Testimonial filtering: search, industry and persona predicates combined with AND.

use serde::Deserialize;

use crate::testimonials::models::Testimonial;

/// Filter criteria. An empty field places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TestimonialFilter {
    /// Case-insensitive substring of quote, author, company or any keyword.
    pub search: String,
    /// Exact industry match.
    pub industry: String,
    /// Exact persona match.
    pub persona: String,
}

impl TestimonialFilter {
    pub fn matches(&self, t: &Testimonial) -> bool {
        self.matches_search(t)
            && (self.industry.is_empty() || t.industry == self.industry)
            && (self.persona.is_empty() || t.persona == self.persona)
    }

    fn matches_search(&self, t: &Testimonial) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(t.quote)
            || contains(t.author)
            || contains(t.company)
            || t.keywords.iter().any(|k| contains(*k))
    }

    /// Returns matching testimonials in their original order.
    pub fn apply<'a>(&self, items: &'a [Testimonial]) -> Vec<&'a Testimonial> {
        items.iter().filter(|t| self.matches(t)).collect()
    }
}
