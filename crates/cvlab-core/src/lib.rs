//! cvlab-core: résumé-to-LaTeX rendering engine.
//!
//! The engine takes structured résumé data and a LaTeX template carrying
//! lightweight text markers, and produces compilable LaTeX source. It is
//! pure text substitution end to end: no LaTeX is ever evaluated, and a
//! template is valid LaTeX both before and after generation.
//!
//! The high-level flow lives in [`render::Renderer`]; the marker dialects
//! and style detection live under [`template`]; [`storage`] and
//! [`enhance`] are the seams for the filesystem and for optional content
//! rewriting.

pub mod config;
pub mod enhance;
pub mod error;
pub mod model;
pub mod render;
pub mod storage;
pub mod template;

pub use config::Config;
pub use error::{CvlabError, Result};
pub use model::{ResumeData, SectionKind};
pub use render::{RenderMode, RenderOptions, Renderer, WHOLE_BODY_TOKEN};
pub use storage::{FsTemplateStore, TemplateStore};
pub use template::{StyleAnalyzer, TemplateStyle};
