use thiserror::Error;

pub type Result<T> = std::result::Result<T, CvlabError>;

#[derive(Error, Debug)]
pub enum CvlabError {
    // Input errors
    #[error("VALIDATION_ERROR: {0}")]
    Validation(String),

    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template '{0}' not found")]
    TemplateNotFound(String),

    // Enhancement errors. Never surfaced to callers: the renderer downgrades
    // enhancement failures to a warning and falls back to the original data.
    #[error("ENHANCEMENT_FAILED: {0}")]
    EnhancementFailed(String),

    // Catch-all for unexpected pipeline failures. Intentionally opaque so
    // template and markup internals never leak to the caller; the detail is
    // logged before this is constructed.
    #[error("RENDER_FAILED: resume rendering failed")]
    RenderFailed,

    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to parse cvlab.toml: {0}")]
    ConfigParse(String),

    // Build errors
    #[error("BUILD_FAILED: {0}")]
    BuildFailed(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::template::TemplateError> for CvlabError {
    fn from(err: crate::template::TemplateError) -> Self {
        tracing::error!("template processing failed: {err}");
        CvlabError::RenderFailed
    }
}
