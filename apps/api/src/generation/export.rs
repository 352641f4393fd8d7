//! Download rendering for generated content.

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::case_study::CaseStudyResult;
use crate::generation::required_field;
use crate::generation::sections::SectionLabel;

/// File format for a download.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Text,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }
}

/// A rendered file, returned to the client as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

impl IntoResponse for Download {
    fn into_response(self) -> Response {
        let disposition =
            match HeaderValue::try_from(format!("attachment; filename=\"{}\"", self.filename)) {
                Ok(value) => value,
                Err(e) => {
                    return AppError::Internal(anyhow::anyhow!(
                        "Invalid download filename {:?}: {e}",
                        self.filename
                    ))
                    .into_response()
                }
            };

        (
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(self.content_type)),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseStudyExportRequest {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(flatten)]
    pub sections: CaseStudyResult,
    #[serde(default)]
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewExportRequest {
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub format: ExportFormat,
}

/// Lower-cases the industry and turns every run of non-ASCII-alphanumeric
/// characters into a single `-`. Safe to place inside a quoted filename.
pub fn industry_slug(industry: &str) -> String {
    let mut slug = String::with_capacity(industry.len());
    for c in industry.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Renders the full case-study document with a title and the three sections.
pub fn render_case_study(industry: &str, sections: &CaseStudyResult) -> String {
    let mut doc = format!("# Case Study: {industry} Company Transformation\n");
    for label in SectionLabel::ALL {
        doc.push('\n');
        doc.push_str(&label.header());
        doc.push('\n');
        doc.push_str(sections.section(label));
        doc.push('\n');
    }
    doc
}

pub fn export_case_study(request: CaseStudyExportRequest) -> Result<Download, AppError> {
    let industry = required_field(request.industry)
        .ok_or_else(|| AppError::Validation("Industry is required for export".to_string()))?;

    let slug = industry_slug(&industry);
    let filename = if slug.is_empty() {
        format!("case-study.{}", request.format.extension())
    } else {
        format!("case-study-{slug}.{}", request.format.extension())
    };

    Ok(Download {
        filename,
        content_type: request.format.content_type(),
        body: render_case_study(&industry, &request.sections),
    })
}

pub fn export_review(request: ReviewExportRequest) -> Result<Download, AppError> {
    let review = required_field(request.review)
        .ok_or_else(|| AppError::Validation("No review to export".to_string()))?;

    Ok(Download {
        filename: format!("g2-review.{}", request.format.extension()),
        content_type: request.format.content_type(),
        body: review,
    })
}
