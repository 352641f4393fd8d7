// Testimonial Sorter: filter, select and export the built-in sample testimonials.

pub mod dataset;
pub mod export;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod selection;
