use serde::{Deserialize, Deserializer, Serialize};

/// Fallback professional summary, used both when the field is absent from
/// the input and when a template references the summary placeholder.
pub const DEFAULT_SUMMARY: &str =
    "Experienced professional with a track record of delivering results.";

/// Treat `null` the same as an absent field so list inputs always
/// deserialize to a real (possibly empty) sequence.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    /// Professional title, e.g. "Senior Software Engineer".
    pub title: Option<String>,
}

impl PersonalInfo {
    /// Full display name, single-space joined.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current_job: bool,
    #[serde(deserialize_with = "null_default")]
    pub responsibilities: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
    pub location: Option<String>,
    pub graduation_date: String,
    pub gpa: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub proficiency_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub description: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub technologies: Vec<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub expiration_date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageSkill {
    pub name: String,
    pub proficiency: String,
}

/// Shape mirrors [`WorkExperience`], with an organization in place of a
/// company.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerExperience {
    pub job_title: String,
    pub organization: String,
    pub location: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current_job: bool,
    #[serde(deserialize_with = "null_default")]
    pub responsibilities: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    pub title: String,
    pub publisher: String,
    pub publication_date: String,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Hobby {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub professional_summary: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "null_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_default")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "null_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_default")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "null_default")]
    pub languages: Vec<LanguageSkill>,
    #[serde(deserialize_with = "null_default")]
    pub volunteer_experience: Vec<VolunteerExperience>,
    #[serde(deserialize_with = "null_default")]
    pub awards: Vec<Award>,
    #[serde(deserialize_with = "null_default")]
    pub publications: Vec<Publication>,
    #[serde(deserialize_with = "null_default")]
    pub references: Vec<Reference>,
    #[serde(deserialize_with = "null_default")]
    pub hobbies: Vec<Hobby>,
    #[serde(deserialize_with = "null_default")]
    pub additional_sections: Vec<AdditionalSection>,
}

impl ResumeData {
    /// The professional summary, falling back to [`DEFAULT_SUMMARY`] when
    /// the field is absent or blank.
    pub fn summary_text(&self) -> &str {
        self.professional_summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SUMMARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_lists_deserialize_to_empty() {
        let data: ResumeData = serde_json::from_str(
            r#"{
                "personalInfo": {"firstName": "Jane", "lastName": "Doe", "email": "jane@x.com"},
                "workExperience": null,
                "skills": null
            }"#,
        )
        .unwrap();
        assert!(data.work_experience.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.education.is_empty());
    }

    #[test]
    fn absent_lists_deserialize_to_empty() {
        let data: ResumeData = serde_json::from_str(
            r#"{"personalInfo": {"firstName": "Jane", "lastName": "Doe", "email": "jane@x.com"}}"#,
        )
        .unwrap();
        assert!(data.references.is_empty());
        assert!(data.additional_sections.is_empty());
    }

    #[test]
    fn summary_falls_back_to_default() {
        let mut data = ResumeData::default();
        assert_eq!(data.summary_text(), DEFAULT_SUMMARY);

        data.professional_summary = Some("   ".to_string());
        assert_eq!(data.summary_text(), DEFAULT_SUMMARY);

        data.professional_summary = Some("Builder of things.".to_string());
        assert_eq!(data.summary_text(), "Builder of things.");
    }

    #[test]
    fn camel_case_wire_names() {
        let job: WorkExperience = serde_json::from_str(
            r#"{"jobTitle": "Engineer", "company": "Acme", "isCurrentJob": true}"#,
        )
        .unwrap();
        assert_eq!(job.job_title, "Engineer");
        assert!(job.is_current_job);
    }
}
