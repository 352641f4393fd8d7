use serde::Serialize;

/// A customer testimonial from the built-in sample set. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub industry: &'static str,
    pub persona: &'static str,
    pub keywords: &'static [&'static str],
    /// 1–5 stars.
    pub rating: u8,
}

/// Distinct filter values present in a testimonial set, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub industries: Vec<&'static str>,
    pub personas: Vec<&'static str>,
}

impl Facets {
    pub fn from_testimonials(items: &[Testimonial]) -> Self {
        let mut industries = Vec::new();
        let mut personas = Vec::new();
        for t in items {
            if !industries.contains(&t.industry) {
                industries.push(t.industry);
            }
            if !personas.contains(&t.persona) {
                personas.push(t.persona);
            }
        }
        Self {
            industries,
            personas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testimonials::dataset::sample_testimonials;

    #[test]
    fn test_facets_are_distinct_in_first_appearance_order() {
        let facets = Facets::from_testimonials(sample_testimonials());
        assert_eq!(
            facets.industries,
            vec!["Technology", "Healthcare", "Finance", "Education", "Retail"]
        );
        assert_eq!(
            facets.personas,
            vec![
                "Technical Leader",
                "Operations",
                "Executive",
                "Compliance",
                "Marketing"
            ]
        );
    }

    #[test]
    fn test_testimonial_serializes_keywords_as_array() {
        let value = serde_json::to_value(&sample_testimonials()[3]).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["keywords"][2], "API");
        assert_eq!(value["rating"], 3);
    }
}
