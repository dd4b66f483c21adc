//! Résumé data model.
//!
//! All records are serde types using the camelCase wire naming of the JSON
//! payloads cvlab consumes. List fields deserialize leniently: absent or
//! `null` lists become empty exactly once, at deserialization time, so the
//! renderers never have to check for missing lists.

mod resume;
mod section;
mod validate;

pub use resume::{
    AdditionalSection, Award, Certification, Education, Hobby, LanguageSkill, PersonalInfo,
    Project, Publication, Reference, ResumeData, Skill, VolunteerExperience, WorkExperience,
    DEFAULT_SUMMARY,
};
pub use section::SectionKind;
pub use validate::validate;
