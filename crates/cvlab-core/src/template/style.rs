//! Template style detection.
//!
//! A template's formatting conventions are inferred purely from its source
//! text: which custom macros it defines, whether it provides structural
//! macros for headers/sections/skill rows, how much vertical space it
//! spends, and whether it lays bullets out with `itemize` or manual
//! glyphs. Analysis is memoized per template id for the process lifetime;
//! templates are immutable content, so there is no invalidation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Combined contact-info structural macro: `\personalinfo{name}{email}{phone}{website}{github}`.
pub const CONTACT_MACRO: &str = "personalinfo";
/// Section heading structural macro: `\cvsection{Title}`.
pub const SECTION_MACRO: &str = "cvsection";
/// Skill row structural macro: `\skillentry{Category}{a, b, c}`.
pub const SKILL_ENTRY_MACRO: &str = "skillentry";

/// Markers that indicate a tightly spaced template.
const COMPACT_MARKERS: &[&str] = &["\\itemsep0pt", "noitemsep", "\\vspace{-"];
/// Markers that indicate a generously spaced template.
const SPACIOUS_MARKERS: &[&str] = &["\\bigskip", "\\vspace{2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    #[default]
    Normal,
    Spacious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    #[default]
    Simple,
    Custom,
    Complex,
}

/// Inferred formatting conventions of one template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyle {
    pub has_custom_commands: bool,
    pub custom_commands: BTreeSet<String>,
    pub uses_sections: bool,
    pub uses_itemize: bool,
    pub spacing: Spacing,
    pub header_style: HeaderStyle,
}

impl Default for TemplateStyle {
    fn default() -> Self {
        Self {
            has_custom_commands: false,
            custom_commands: BTreeSet::new(),
            uses_sections: false,
            uses_itemize: true,
            spacing: Spacing::Normal,
            header_style: HeaderStyle::Simple,
        }
    }
}

impl TemplateStyle {
    pub fn has_command(&self, name: &str) -> bool {
        self.custom_commands.contains(name)
    }
}

/// Extract macro names from `\newcommand{\name}` / `\renewcommand{\name}`
/// definitions. The braceless form `\newcommand\name` is accepted too.
fn command_definitions(source: &str) -> Vec<String> {
    let mut names = Vec::new();
    for keyword in ["\\newcommand", "\\renewcommand"] {
        let mut rest = source;
        while let Some(at) = rest.find(keyword) {
            rest = &rest[at + keyword.len()..];
            if let Some(name) = defined_name(rest) {
                names.push(name);
            }
        }
    }
    names
}

/// Parse the defined macro name right after a definition keyword.
fn defined_name(text: &str) -> Option<String> {
    let mut chars = text.chars().peekable();
    if chars.peek() == Some(&'{') {
        chars.next();
    }
    if chars.next() != Some('\\') {
        return None;
    }
    let name: String = chars.take_while(|c| c.is_ascii_alphabetic()).collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Run the detection rules over raw template text.
///
/// Rules are evaluated independently; several may fire on one template.
fn detect(source: &str) -> TemplateStyle {
    let mut style = TemplateStyle::default();

    let defined = command_definitions(source);
    for name in &defined {
        style.custom_commands.insert(name.clone());
    }

    if source.contains("\\personalinfo") {
        style.header_style = HeaderStyle::Custom;
        style.custom_commands.insert(CONTACT_MACRO.to_string());
    }
    if source.contains("\\cvsection") {
        style.uses_sections = true;
        style.custom_commands.insert(SECTION_MACRO.to_string());
    }
    if source.contains("\\skillentry") {
        style.custom_commands.insert(SKILL_ENTRY_MACRO.to_string());
        style.uses_itemize = false;
    }

    if COMPACT_MARKERS.iter().any(|m| source.contains(m)) {
        style.spacing = Spacing::Compact;
    } else if SPACIOUS_MARKERS.iter().any(|m| source.contains(m)) {
        style.spacing = Spacing::Spacious;
    }

    if source.contains("\\textbullet") {
        style.uses_itemize = false;
    }

    // Heavily macro-driven templates without the contact macro get run-in
    // headers rather than centered ones.
    if style.header_style != HeaderStyle::Custom && defined.len() >= 3 {
        style.header_style = HeaderStyle::Complex;
    }

    style.has_custom_commands = !style.custom_commands.is_empty();
    style
}

/// Memoizing style analyzer, keyed by template id.
///
/// Owned by the render orchestrator rather than living in a global, so
/// cold/warm cache behavior is independently testable. A concurrent first
/// access to the same id may run detection twice; both runs produce the
/// same value and the first insert wins.
#[derive(Debug, Default)]
pub struct StyleAnalyzer {
    cache: Mutex<HashMap<String, TemplateStyle>>,
    detections: AtomicUsize,
}

impl StyleAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-compute the style descriptor for `template_id`.
    pub fn analyze(&self, template_id: &str, source: &str) -> TemplateStyle {
        if let Some(hit) = self.cache.lock().unwrap().get(template_id) {
            return hit.clone();
        }

        let style = detect(source);
        self.detections.fetch_add(1, Ordering::Relaxed);

        self.cache
            .lock()
            .unwrap()
            .entry(template_id.to_string())
            .or_insert(style)
            .clone()
    }

    /// How many times detection actually ran. Warm lookups do not count.
    pub fn detect_invocations(&self) -> usize {
        self.detections.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MACRO_TEMPLATE: &str = r"
\documentclass{article}
\newcommand{\personalinfo}[5]{\begin{center}#1 | #2 | #3 | #4 | #5\end{center}}
\newcommand{\cvsection}[1]{\section*{#1}}
\newcommand{\skillentry}[2]{\textbf{#1:} #2\\}
\begin{document}
\personalinfo{FIRST_NAME LAST_NAME}{EMAIL}{PHONE}{}{}
\end{document}
";

    #[test]
    fn plain_template_has_defaults() {
        let style = detect("\\documentclass{article}\\begin{document}\\end{document}");
        assert_eq!(style, TemplateStyle::default());
    }

    #[test]
    fn detects_custom_command_definitions() {
        let style = detect("\\newcommand{\\entry}[2]{#1 #2}");
        assert!(style.has_custom_commands);
        assert!(style.has_command("entry"));
    }

    #[test]
    fn detects_renewcommand() {
        let style = detect("\\renewcommand{\\labelitemi}{\\textendash}");
        assert!(style.has_command("labelitemi"));
    }

    #[test]
    fn contact_macro_sets_custom_header() {
        let style = detect(MACRO_TEMPLATE);
        assert_eq!(style.header_style, HeaderStyle::Custom);
        assert!(style.has_command(CONTACT_MACRO));
    }

    #[test]
    fn section_macro_sets_uses_sections() {
        let style = detect(MACRO_TEMPLATE);
        assert!(style.uses_sections);
        assert!(style.has_command(SECTION_MACRO));
    }

    #[test]
    fn skill_entry_macro_disables_itemize() {
        let style = detect(MACRO_TEMPLATE);
        assert!(style.has_command(SKILL_ENTRY_MACRO));
        assert!(!style.uses_itemize);
    }

    #[test]
    fn compact_markers_win_over_spacious() {
        let style = detect("\\vspace{-4pt} \\bigskip");
        assert_eq!(style.spacing, Spacing::Compact);
    }

    #[test]
    fn spacious_markers_detected() {
        let style = detect("text \\bigskip more");
        assert_eq!(style.spacing, Spacing::Spacious);
    }

    #[test]
    fn textbullet_disables_itemize() {
        let style = detect("\\textbullet{} item one");
        assert!(!style.uses_itemize);
    }

    #[test]
    fn many_definitions_without_contact_macro_are_complex() {
        let style = detect(
            "\\newcommand{\\aaa}{}\\newcommand{\\bbb}{}\\newcommand{\\ccc}{}",
        );
        assert_eq!(style.header_style, HeaderStyle::Complex);
    }

    #[test]
    fn analysis_is_memoized_per_template_id() {
        let analyzer = StyleAnalyzer::new();
        let first = analyzer.analyze("modern", MACRO_TEMPLATE);
        let second = analyzer.analyze("modern", MACRO_TEMPLATE);
        assert_eq!(first, second);
        assert_eq!(analyzer.detect_invocations(), 1);

        analyzer.analyze("other", "plain");
        assert_eq!(analyzer.detect_invocations(), 2);
        analyzer.analyze("other", "plain");
        assert_eq!(analyzer.detect_invocations(), 2);
    }
}
