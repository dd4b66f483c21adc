use thiserror::Error;

/// Marker-level template errors.
///
/// These never reach callers directly; the renderer logs them and collapses
/// them into the opaque render failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A structural macro invocation could not be rewritten.
    #[error("malformed '\\{name}' invocation: {reason}")]
    MalformedMacro { name: String, reason: String },
}
