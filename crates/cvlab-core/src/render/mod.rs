//! Render orchestration.
//!
//! One entry point, [`Renderer::render`], drives the whole pipeline:
//! validation, template resolution, style analysis, optional enhancement,
//! header injection, section generation through whichever marker dialect
//! the template uses, and the final cleanup pass.
//!
//! Templates fall into two modes. A template carrying the whole-body
//! `RESUME_CONTENT` placeholder is *monolithic*: the engine composes the
//! entire document body in a fixed section order and injects it at that
//! single point. Everything else is *sectioned*: the template places its
//! own per-section markers and the engine fills each one independently.

mod header;
mod sections;

use std::sync::Arc;

use crate::enhance::Enhancer;
use crate::error::{CvlabError, Result};
use crate::model::{validate, ResumeData, SectionKind};
use crate::storage::{TemplateCache, TemplateStore};
use crate::template::conditional::{cleanup, inject_section};
use crate::template::engine::{expand_section_loops, has_section_loop};
use crate::template::error::TemplateError;
use crate::template::escape::escape_latex;
use crate::template::style::{HeaderStyle, Spacing, StyleAnalyzer, TemplateStyle, CONTACT_MACRO};

pub use header::inject_personal_info;
pub use sections::{loop_items, RenderFn, SECTION_RENDERERS};

/// Placeholder for the entire generated document body.
pub const WHOLE_BODY_TOKEN: &str = "RESUME_CONTENT";

const DEFAULT_REFERENCES_LINE: &str = "References available upon request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Monolithic,
    Sectioned,
}

impl RenderMode {
    pub fn decide(template: &str) -> Self {
        if template.contains(WHOLE_BODY_TOKEN) {
            RenderMode::Monolithic
        } else {
            RenderMode::Sectioned
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Run the configured enhancer over the data first. Failures degrade
    /// to a warning and the original data.
    pub enhance: bool,
    pub job_description: Option<String>,
    /// Inline template text that bypasses the store and the caches.
    pub custom_template: Option<String>,
}

/// The render pipeline, holding the template store and both per-process
/// caches. One instance is meant to live for the process and be shared.
pub struct Renderer {
    store: Arc<dyn TemplateStore>,
    enhancer: Option<Arc<dyn Enhancer>>,
    templates: TemplateCache,
    styles: StyleAnalyzer,
}

impl Renderer {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self {
            store,
            enhancer: None,
            templates: TemplateCache::new(),
            styles: StyleAnalyzer::new(),
        }
    }

    pub fn with_enhancer(mut self, enhancer: Arc<dyn Enhancer>) -> Self {
        self.enhancer = Some(enhancer);
        self
    }

    /// The style analyzer backing this renderer, exposed so callers can
    /// inspect analysis results and cache behavior.
    pub fn styles(&self) -> &StyleAnalyzer {
        &self.styles
    }

    /// Render one résumé against one template, producing LaTeX source.
    pub fn render(
        &self,
        data: &ResumeData,
        template_id: &str,
        options: &RenderOptions,
    ) -> Result<String> {
        validate(data)?;

        let (source, style) = match &options.custom_template {
            // Custom text is one-shot; keep it out of the keyed caches.
            Some(text) => (
                Arc::new(text.clone()),
                StyleAnalyzer::new().analyze("custom", text),
            ),
            None => {
                let source = self.templates.get_or_load(template_id, self.store.as_ref())?;
                let style = self.styles.analyze(template_id, &source);
                (source, style)
            }
        };

        let data = self.enhanced(data, options);
        tracing::debug!(template_id, mode = ?RenderMode::decide(&source), "rendering resume");
        let out = render_pipeline(&source, &data, &style)?;
        Ok(out)
    }

    fn enhanced(&self, data: &ResumeData, options: &RenderOptions) -> ResumeData {
        if !options.enhance {
            return data.clone();
        }
        let Some(enhancer) = &self.enhancer else {
            return data.clone();
        };
        match enhancer.enhance(data, options.job_description.as_deref()) {
            Ok(enhanced) => enhanced,
            Err(err) => {
                let err = CvlabError::EnhancementFailed(format!("{err:#}"));
                tracing::warn!("{err}; rendering original content");
                data.clone()
            }
        }
    }
}

fn render_pipeline(
    source: &str,
    data: &ResumeData,
    style: &TemplateStyle,
) -> std::result::Result<String, TemplateError> {
    let mut out = header::inject_personal_info(source, data, style)?;

    match RenderMode::decide(&out) {
        RenderMode::Monolithic => {
            let body = monolithic_body(data, style, source);
            out = inject_section(&out, WHOLE_BODY_TOKEN, &body);
        }
        RenderMode::Sectioned => {
            // Conditional-dialect sections first; loop regions are left
            // alone here and resolved in the second pass.
            for (kind, render) in SECTION_RENDERERS {
                if has_section_loop(&out, kind.placeholder()) {
                    continue;
                }
                let fragment = render(data, style);
                out = inject_section(&out, kind.placeholder(), &fragment);
            }
            for kind in SectionKind::ORDERED {
                if has_section_loop(&out, kind.placeholder()) {
                    let items = loop_items(data, kind);
                    out = expand_section_loops(&out, kind.placeholder(), &items);
                }
            }
        }
    }

    Ok(cleanup(&out))
}

/// Whether the template already places personal info itself, making a
/// generated header block redundant.
fn template_declares_header(source: &str) -> bool {
    source.contains("FIRST_NAME") || source.contains(&format!("\\{CONTACT_MACRO}"))
}

/// Compose the full document body for a monolithic template: header,
/// summary, the eleven sections in fixed order, then any free-form
/// additional sections.
fn monolithic_body(data: &ResumeData, style: &TemplateStyle, source: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if !template_declares_header(source) {
        blocks.push(header_block(data));
    }
    if !source.contains("PROFESSIONAL_SUMMARY") {
        blocks.push(format!(
            "{}\n{}",
            section_heading("Summary", style),
            escape_latex(data.summary_text())
        ));
    }

    for (kind, render) in SECTION_RENDERERS {
        let fragment = render(data, style);
        if fragment.trim().is_empty() {
            if *kind == SectionKind::References {
                blocks.push(format!(
                    "{}\n{}",
                    section_heading(kind.heading(), style),
                    DEFAULT_REFERENCES_LINE
                ));
            }
            continue;
        }
        blocks.push(format!(
            "{}\n{}",
            section_heading(kind.heading(), style),
            fragment
        ));
    }

    for section in &data.additional_sections {
        if section.title.trim().is_empty() || section.content.trim().is_empty() {
            continue;
        }
        blocks.push(format!(
            "{}\n{}",
            section_heading(section.title.trim(), style),
            escape_latex(&section.content)
        ));
    }

    let spacer = match style.spacing {
        Spacing::Compact => "\n\\vspace{4pt}\n",
        Spacing::Normal => "\n\\vspace{10pt}\n",
        Spacing::Spacious => "\n\\vspace{16pt}\n",
    };
    blocks.join(spacer)
}

/// Generated name-and-contact header for templates that place nothing of
/// their own.
fn header_block(data: &ResumeData) -> String {
    let info = &data.personal_info;
    let mut contact: Vec<String> = Vec::new();
    for part in [&info.email, &info.phone, &info.location] {
        if !part.trim().is_empty() {
            contact.push(escape_latex(part));
        }
    }
    let mut out = format!(
        "\\begin{{center}}\n{{\\LARGE \\textbf{{{}}}}} \\\\",
        escape_latex(&info.full_name())
    );
    if !contact.is_empty() {
        out.push('\n');
        out.push_str(&contact.join(" | "));
    }
    out.push_str("\n\\end{center}");
    out
}

/// Section heading in the template's idiom: the section macro when one is
/// defined, a bold run-in line for heavily macro-driven templates, and a
/// centered uppercase line otherwise.
fn section_heading(title: &str, style: &TemplateStyle) -> String {
    let title = escape_latex(title);
    if style.uses_sections {
        format!("\\cvsection{{{title}}}")
    } else if style.header_style == HeaderStyle::Complex {
        format!("\\noindent\\textbf{{{title}}} \\\\")
    } else {
        format!(
            "\\begin{{center}}\\textbf{{{}}}\\end{{center}}",
            title.to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ResumeData {
        let mut data = ResumeData::default();
        data.personal_info.first_name = "Jane".into();
        data.personal_info.last_name = "Doe".into();
        data.personal_info.email = "jane@example.com".into();
        data
    }

    #[test]
    fn mode_follows_whole_body_token() {
        assert_eq!(
            RenderMode::decide("\\begin{document}RESUME_CONTENT\\end{document}"),
            RenderMode::Monolithic
        );
        assert_eq!(
            RenderMode::decide("#IF_SKILLS SKILLS /IF_SKILLS"),
            RenderMode::Sectioned
        );
    }

    #[test]
    fn monolithic_body_includes_default_references_line() {
        let body = monolithic_body(&jane(), &TemplateStyle::default(), "RESUME_CONTENT");
        assert!(body.contains(DEFAULT_REFERENCES_LINE));
    }

    #[test]
    fn monolithic_body_skips_header_when_template_has_tokens() {
        let body = monolithic_body(
            &jane(),
            &TemplateStyle::default(),
            "FIRST_NAME LAST_NAME\nRESUME_CONTENT",
        );
        assert!(!body.contains("\\LARGE"));
    }

    #[test]
    fn monolithic_body_generates_header_otherwise() {
        let body = monolithic_body(&jane(), &TemplateStyle::default(), "RESUME_CONTENT");
        assert!(body.contains("{\\LARGE \\textbf{Jane Doe}}"));
        assert!(body.contains("jane@example.com"));
    }

    #[test]
    fn section_heading_uses_macro_when_available() {
        let style = TemplateStyle {
            uses_sections: true,
            ..TemplateStyle::default()
        };
        assert_eq!(section_heading("Skills", &style), "\\cvsection{Skills}");
    }

    #[test]
    fn section_heading_run_in_for_complex_headers() {
        let style = TemplateStyle {
            header_style: HeaderStyle::Complex,
            ..TemplateStyle::default()
        };
        assert_eq!(
            section_heading("Skills", &style),
            "\\noindent\\textbf{Skills} \\\\"
        );
    }

    #[test]
    fn section_heading_defaults_to_centered_uppercase() {
        assert_eq!(
            section_heading("Skills", &TemplateStyle::default()),
            "\\begin{center}\\textbf{SKILLS}\\end{center}"
        );
    }

    #[test]
    fn additional_sections_are_appended() {
        let mut data = jane();
        data.additional_sections.push(crate::model::AdditionalSection {
            title: "Security Clearance".into(),
            content: "Active TS/SCI".into(),
        });
        let body = monolithic_body(&data, &TemplateStyle::default(), "RESUME_CONTENT");
        assert!(body.contains("SECURITY CLEARANCE"));
        assert!(body.contains("Active TS/SCI"));
    }
}
