//! Template storage and the in-process template cache.
//!
//! Resolution is two-tiered: a standardized copy of a template (markers
//! already present) shadows the original upload. Lookups are by template
//! id, never by raw path.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::{CvlabError, Result};

/// Source of template text, keyed by id. Implementations must be safe to
/// share across threads; the renderer holds one behind an `Arc`.
pub trait TemplateStore: Send + Sync {
    fn load(&self, template_id: &str) -> Result<String>;
}

/// Filesystem store rooted at a templates directory with `standardized/`
/// and `originals/` tiers.
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    root: PathBuf,
}

impl FsTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn candidates(&self, template_id: &str) -> [PathBuf; 2] {
        let file = format!("{template_id}.tex");
        [
            self.root.join("standardized").join(&file),
            self.root.join("originals").join(&file),
        ]
    }
}

/// Ids are restricted to names that cannot escape the store root.
fn valid_id(template_id: &str) -> bool {
    !template_id.is_empty()
        && template_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl TemplateStore for FsTemplateStore {
    fn load(&self, template_id: &str) -> Result<String> {
        if !valid_id(template_id) {
            return Err(CvlabError::TemplateNotFound(template_id.to_string()));
        }
        for path in self.candidates(template_id) {
            if path.is_file() {
                tracing::debug!(template_id, path = %path.display(), "loading template");
                return Ok(fs::read_to_string(&path)?);
            }
        }
        Err(CvlabError::TemplateNotFound(template_id.to_string()))
    }
}

/// Process-lifetime cache of template sources. Templates are immutable
/// content, so entries are never invalidated. A concurrent first load of
/// the same id may read the file twice; the first insert wins.
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: Mutex<HashMap<String, Arc<String>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&self, template_id: &str, store: &dyn TemplateStore) -> Result<Arc<String>> {
        if let Some(hit) = self.entries.lock().unwrap().get(template_id) {
            return Ok(hit.clone());
        }
        let source = Arc::new(store.load(template_id)?);
        Ok(self
            .entries
            .lock()
            .unwrap()
            .entry(template_id.to_string())
            .or_insert(source)
            .clone())
    }
}
