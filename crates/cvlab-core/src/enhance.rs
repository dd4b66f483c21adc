//! Optional content enhancement hook.
//!
//! The renderer treats enhancement as best-effort: a failing enhancer is
//! logged and the original data renders unchanged, so implementations may
//! call out to slow or flaky services without taking the pipeline down.

use crate::model::ResumeData;

/// Rewrites résumé content, optionally steered by a job description.
pub trait Enhancer: Send + Sync {
    fn enhance(&self, data: &ResumeData, job_description: Option<&str>) -> anyhow::Result<ResumeData>;
}

/// Pass-through enhancer for tests and for running without a backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnhancer;

impl Enhancer for NoopEnhancer {
    fn enhance(&self, data: &ResumeData, _job_description: Option<&str>) -> anyhow::Result<ResumeData> {
        Ok(data.clone())
    }
}
