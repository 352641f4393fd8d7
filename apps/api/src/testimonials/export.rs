use crate::errors::AppError;
use crate::generation::export::{Download, ExportFormat};
use crate::testimonials::models::Testimonial;
use crate::testimonials::selection::Selection;

pub const EXPORT_FILENAME: &str = "exported-testimonials.txt";
pub const NOTHING_SELECTED_MESSAGE: &str = "No testimonials selected";

/// Renders selected testimonials in collection order as
/// `"quote"\n- author, role at company\n\n` blocks.
pub fn render_testimonials(items: &[Testimonial], selection: &Selection) -> String {
    items
        .iter()
        .filter(|t| selection.contains(t.id))
        .map(|t| {
            format!(
                "\"{}\"\n- {}, {} at {}\n\n",
                t.quote, t.author, t.role, t.company
            )
        })
        .collect()
}

pub fn export_testimonials(
    items: &[Testimonial],
    selection: &Selection,
) -> Result<Download, AppError> {
    if selection.is_empty() {
        return Err(AppError::Validation(NOTHING_SELECTED_MESSAGE.to_string()));
    }

    // Ids that match nothing in the collection render to an empty body.
    let body = render_testimonials(items, selection);
    if body.is_empty() {
        return Err(AppError::Validation(NOTHING_SELECTED_MESSAGE.to_string()));
    }

    Ok(Download {
        filename: EXPORT_FILENAME.to_string(),
        content_type: ExportFormat::Text.content_type(),
        body,
    })
}
