//! Built-in sample testimonials. Read-only; there is no create/update/delete.

use crate::testimonials::models::Testimonial;

static SAMPLE_TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        id: 1,
        quote: "This product has completely transformed how our team collaborates. We've seen a 30% increase in productivity since implementation.",
        author: "Sarah Johnson",
        role: "CTO",
        company: "TechSolutions Inc.",
        industry: "Technology",
        persona: "Technical Leader",
        keywords: &["productivity", "collaboration", "implementation"],
        rating: 5,
    },
    Testimonial {
        id: 2,
        quote: "The customer support team is exceptional. They helped us solve a critical issue within hours, preventing any downtime.",
        author: "Michael Chen",
        role: "Head of Operations",
        company: "GlobalHealth",
        industry: "Healthcare",
        persona: "Operations",
        keywords: &["support", "customer service", "reliability"],
        rating: 5,
    },
    Testimonial {
        id: 3,
        quote: "We've been able to reduce our reporting time by 50% thanks to the automated dashboard features.",
        author: "Emily Rodriguez",
        role: "CFO",
        company: "Finance Plus",
        industry: "Finance",
        persona: "Executive",
        keywords: &["reporting", "automation", "dashboard"],
        rating: 4,
    },
    Testimonial {
        id: 4,
        quote: "The onboarding process was smooth, but we did encounter some challenges with the API integration.",
        author: "David Kim",
        role: "IT Director",
        company: "EduTech",
        industry: "Education",
        persona: "Technical Leader",
        keywords: &["onboarding", "integration", "API"],
        rating: 3,
    },
    Testimonial {
        id: 5,
        quote: "This solution has helped us meet compliance requirements while improving our customer experience.",
        author: "Jennifer Lee",
        role: "Compliance Officer",
        company: "SecureBank",
        industry: "Finance",
        persona: "Compliance",
        keywords: &["compliance", "security", "customer experience"],
        rating: 4,
    },
    Testimonial {
        id: 6,
        quote: "The analytics capabilities have given us insights we never had before, driving our strategic decisions.",
        author: "Robert Wilson",
        role: "Marketing Director",
        company: "RetailGiant",
        industry: "Retail",
        persona: "Marketing",
        keywords: &["analytics", "insights", "strategy"],
        rating: 5,
    },
];

pub fn sample_testimonials() -> &'static [Testimonial] {
    &SAMPLE_TESTIMONIALS
}
