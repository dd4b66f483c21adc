use super::ResumeData;
use crate::error::{CvlabError, Result};

/// Validate résumé data before any template work.
///
/// Only the identifying personal fields are mandatory; every other field is
/// optional and already defaulted by deserialization.
pub fn validate(data: &ResumeData) -> Result<()> {
    let personal = &data.personal_info;
    let mut missing = Vec::new();

    if personal.first_name.trim().is_empty() {
        missing.push("firstName");
    }
    if personal.last_name.trim().is_empty() {
        missing.push("lastName");
    }
    if personal.email.trim().is_empty() {
        missing.push("email");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CvlabError::Validation(format!(
            "missing required personal fields: {}",
            missing.join(", ")
        )))
    }
}
