//! Report document rendering.
//!
//! Output is Markdown: the format template filled with title and generated
//! content, a generation header, then a page break and the AI generation
//! metadata block that makes every document auditable on its own.

pub mod templates;

use chrono::{DateTime, Utc};

use crate::generation::formats::ReportFormat;
use crate::quality::ValidationStatus;

pub const PRODUCT_NAME: &str = "Smart AI Report Generator";

const PAGE_BREAK: &str = "<div style=\"page-break-before: always\"></div>";

/// Audit values embedded at the end of every document.
#[derive(Debug, Clone)]
pub struct DocumentMetadata<'a> {
    pub model_used: &'a str,
    pub prompt_version: &'a str,
    /// Capped score.
    pub quality_score: u32,
    pub validation_status: ValidationStatus,
    pub ai_confidence: f64,
    pub generation_time_ms: i64,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RenderInput<'a> {
    pub format: ReportFormat,
    pub title: &'a str,
    pub content: &'a str,
    pub author_email: &'a str,
    pub metadata: DocumentMetadata<'a>,
}

pub fn render_report_document(input: &RenderInput<'_>) -> String {
    let generated_on = input.metadata.generated_at.format("%d %B %Y").to_string();

    let mut doc = templates::template_for(input.format)
        .replace("{{title}}", input.title)
        .replace("{{content}}", input.content.trim());

    doc.push('\n');
    doc.push_str(&format!("**Generated By:** {PRODUCT_NAME}  \n"));
    doc.push_str(&format!("**Author:** {}  \n", input.author_email));
    doc.push_str(&format!("**Generated On:** {generated_on}\n"));

    doc.push('\n');
    doc.push_str(PAGE_BREAK);
    doc.push_str("\n\n");
    doc.push_str(&render_metadata(&input.metadata, &generated_on));
    doc
}

fn render_metadata(meta: &DocumentMetadata<'_>, generated_on: &str) -> String {
    let mut block = String::from("## AI GENERATION METADATA\n\n");
    block.push_str(&format!("- **Model Used:** {}\n", meta.model_used));
    block.push_str(&format!("- **Prompt Version:** {}\n", meta.prompt_version));
    block.push_str(&format!("- **Quality Score:** {}\n", meta.quality_score));
    block.push_str(&format!("- **Validation Status:** {}\n", meta.validation_status));
    block.push_str(&format!("- **AI Confidence:** {:.2}\n", meta.ai_confidence));
    block.push_str(&format!(
        "- **Generation Time:** {} ms\n",
        meta.generation_time_ms
    ));
    block.push_str(&format!("- **Generated On:** {generated_on}\n"));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input<'a>(format: ReportFormat, content: &'a str) -> RenderInput<'a> {
        RenderInput {
            format,
            title: "Edge Caching",
            content,
            author_email: "ada@example.com",
            metadata: DocumentMetadata {
                model_used: "gpt-4o-mini",
                prompt_version: "business_v1",
                quality_score: 100,
                validation_status: ValidationStatus::Passed,
                ai_confidence: 1.0,
                generation_time_ms: 2345,
                generated_at: Utc.with_ymd_and_hms(2025, 6, 9, 10, 0, 0).unwrap(),
            },
        }
    }

    #[test]
    fn test_title_and_content_substituted() {
        let doc = render_report_document(&input(ReportFormat::Simple, "Introduction\nBody.\n"));
        assert!(doc.starts_with("# Edge Caching\n"));
        assert!(doc.contains("Introduction\nBody."));
        assert!(!doc.contains("{{"));
    }

    #[test]
    fn test_header_names_author_and_date() {
        let doc = render_report_document(&input(ReportFormat::College, "text"));
        assert!(doc.contains("**Generated By:** Smart AI Report Generator"));
        assert!(doc.contains("**Author:** ada@example.com"));
        assert!(doc.contains("**Generated On:** 09 June 2025"));
    }

    #[test]
    fn test_metadata_block_follows_page_break() {
        let doc = render_report_document(&input(ReportFormat::Ieee, "text"));
        let brk = doc.find(PAGE_BREAK).unwrap();
        let meta = doc.find("## AI GENERATION METADATA").unwrap();
        assert!(brk < meta);
        assert!(doc.contains("- **Model Used:** gpt-4o-mini"));
        assert!(doc.contains("- **Prompt Version:** business_v1"));
        assert!(doc.contains("- **Quality Score:** 100"));
        assert!(doc.contains("- **Validation Status:** PASSED"));
        assert!(doc.contains("- **AI Confidence:** 1.00"));
        assert!(doc.contains("- **Generation Time:** 2345 ms"));
    }

    #[test]
    fn test_each_format_has_its_own_template() {
        let college = render_report_document(&input(ReportFormat::College, "x"));
        let ieee = render_report_document(&input(ReportFormat::Ieee, "x"));
        assert!(college.contains("*Academic Report*"));
        assert!(ieee.contains("**Abstract.**"));
        assert_ne!(college, ieee);
    }
}
