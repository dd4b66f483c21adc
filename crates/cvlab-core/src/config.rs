//! Project configuration, read from `cvlab.toml` at the project root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CvlabError, Result};

pub const CONFIG_FILE: &str = "cvlab.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub templates: TemplatesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: TemplatesConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Templates directory, relative to the project root unless absolute.
    pub dir: PathBuf,
    /// Template id used when none is given on the command line.
    pub default: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("templates"),
            default: "classic".to_string(),
        }
    }
}

impl Config {
    /// Load from `<root>/cvlab.toml`. A missing file is not an error; the
    /// defaults apply.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)?;
        toml::from_str(&text).map_err(|e| CvlabError::ConfigParse(e.to_string()))
    }

    /// Templates directory resolved against the project root.
    pub fn templates_dir(&self, root: &Path) -> PathBuf {
        if self.templates.dir.is_absolute() {
            self.templates.dir.clone()
        } else {
            root.join(&self.templates.dir)
        }
    }
}
