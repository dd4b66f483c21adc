//! Template analysis and marker interpretation.
//!
//! Two independently-evolved marker dialects can coexist on one LaTeX
//! template:
//!
//! - **Block conditionals**: plain-text `#IF_<NAME> ... <NAME> ... /IF_<NAME>`
//!   regions that gate a fixed placeholder on data presence
//!   ([`conditional`]).
//! - **Loop templating**: handlebars-style `{{#<SECTION>}} ... {{/<SECTION>}}`
//!   regions repeated once per data item, with nested field resolution
//!   ([`engine`]).
//!
//! [`style`] infers a template's formatting conventions from its source
//! text; [`escape`] turns arbitrary user text into LaTeX-safe text. Both
//! dialects are pure text substitution: templates are valid LaTeX before
//! generation and the engine never evaluates any of it.

pub mod conditional;
pub mod engine;
pub mod error;
pub mod escape;
pub mod style;

pub use error::TemplateError;
pub use escape::escape_latex;
pub use style::{HeaderStyle, Spacing, StyleAnalyzer, TemplateStyle};
