//! Markdown and plain-text renderings of a built variant.
//!
//! Both views are produced from the same `VariantQuestion` slice and the same
//! [`RenderContext`], so question order, option order and answer key always
//! agree. Only the short test id changes between render calls.

use serde::{Deserialize, Serialize};

use crate::variant_engine::{
    helpers::{export_file_name, short_test_id},
    models::{ExamMetadata, VariantQuestion},
    shuffler::answer_key,
};

const PLAIN_RULE: &str = "========================================";

/// Everything a rendering needs besides the questions themselves.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub test_id: &'a str,
    pub metadata: &'a ExamMetadata,
    pub variant_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedVariant {
    pub test_id: String,
    /// Suggested download name for `markdown`.
    pub file_name: String,
    pub markdown: String,
    pub plain_text: String,
}

/// Render one variant with a freshly generated test id.
pub fn render(
    variant: &[VariantQuestion],
    metadata: &ExamMetadata,
    variant_name: &str,
) -> RenderedVariant {
    let test_id = short_test_id();
    render_with_id(variant, metadata, variant_name, &test_id)
}

/// Render with a caller-supplied test id; output is fully deterministic.
pub fn render_with_id(
    variant: &[VariantQuestion],
    metadata: &ExamMetadata,
    variant_name: &str,
    test_id: &str,
) -> RenderedVariant {
    let ctx = RenderContext { test_id, metadata, variant_name };
    RenderedVariant {
        test_id: test_id.to_string(),
        file_name: export_file_name(&metadata.subject, variant_name, "md"),
        markdown: markdown(variant, &ctx),
        plain_text: plain_text(variant, &ctx),
    }
}

pub fn markdown(variant: &[VariantQuestion], ctx: &RenderContext<'_>) -> String {
    let meta = ctx.metadata;
    let mut out = format!("# ID: {} - Variant {}\n", ctx.test_id, ctx.variant_name);
    out.push_str(&format!("**Subject:** {}\n", meta.subject));
    out.push_str(&format!("**Topics:** {}\n", meta.topics));
    out.push_str(&format!("**Difficulty:** {}\n", meta.difficulty));
    out.push_str("\n---\n\n## Questions\n\n");

    for (i, q) in variant.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n", i + 1, q.text));
        for opt in &q.options {
            out.push_str(&format!("- **{}**. {}\n", opt.label, opt.text));
        }
        out.push('\n');
    }

    out.push_str(&format!("\n---\n\n## Answer Key {}\n", ctx.variant_name));
    for entry in answer_key(variant) {
        out.push_str(&format!(
            "- Question {} (Master ID: {}): **{}**\n",
            entry.number, entry.master_reference, entry.correct_label
        ));
    }
    out
}

/// Word-processor friendly text: indentation instead of markup.
pub fn plain_text(variant: &[VariantQuestion], ctx: &RenderContext<'_>) -> String {
    let meta = ctx.metadata;
    let mut out = format!("ID: {} - Variant {}\n", ctx.test_id, ctx.variant_name);
    out.push_str(&format!("Subject: {}\n", meta.subject));
    out.push_str(&format!("Topics: {}\n", meta.topics));
    out.push_str(&format!("Difficulty: {}\n", meta.difficulty));
    out.push_str(&format!("\n{PLAIN_RULE}\n\n"));

    for (i, q) in variant.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, q.text));
        for opt in &q.options {
            out.push_str(&format!("   {}. {}\n", opt.label, opt.text));
        }
        out.push('\n');
    }

    out.push_str(&format!("\n{PLAIN_RULE}\n\nAnswer Key {}\n", ctx.variant_name));
    for entry in answer_key(variant) {
        out.push_str(&format!(
            "Question {} (Master ID: {}): {}\n",
            entry.number, entry.master_reference, entry.correct_label
        ));
    }
    out
}
