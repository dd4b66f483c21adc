//! Canned templates and résumé data for tests.
//!
//! Three templates cover the shapes the engine has to handle: a sectioned
//! template using the block-conditional dialect, a compact monolithic
//! template built around the whole-body placeholder, and a macro-driven
//! template using the loop dialect.

use std::fs;
use std::path::Path;

use cvlab_core::model::{
    Education, LanguageSkill, PersonalInfo, Reference, ResumeData, Skill, WorkExperience,
};

/// Write a template into the given store tier (`"standardized"` or
/// `"originals"`), creating directories as needed.
pub fn write_template(root: &Path, tier: &str, template_id: &str, source: &str) {
    let dir = root.join(tier);
    fs::create_dir_all(&dir).expect("Failed to create template tier directory");
    fs::write(dir.join(format!("{template_id}.tex")), source)
        .expect("Failed to write template fixture");
}

/// Sectioned template in the block-conditional dialect, with personal
/// tokens in the header.
pub fn sectioned_template() -> String {
    r"\documentclass{article}
\begin{document}
\begin{center}
\textbf{\LARGE FIRST_NAME LAST_NAME} \\
EMAIL | PHONE
\end{center}

PROFESSIONAL_SUMMARY

#IF_WORK_EXPERIENCE
\section*{Experience}
WORK_EXPERIENCE
/IF_WORK_EXPERIENCE

#IF_EDUCATION
\section*{Education}
EDUCATION
/IF_EDUCATION

#IF_SKILLS
\section*{Skills}
SKILLS
/IF_SKILLS

#IF_REFERENCES
\section*{References}
REFERENCES
/IF_REFERENCES
\end{document}
"
    .to_string()
}

/// Compact monolithic template: one whole-body placeholder, tight spacing.
pub fn compact_monolithic_template() -> String {
    r"\documentclass{article}
\usepackage{enumitem}
\setlist[itemize]{noitemsep}
\begin{document}
RESUME_CONTENT
\end{document}
"
    .to_string()
}

/// Macro-driven template using the loop dialect for work experience and
/// the structural contact/section/skill macros.
pub fn macro_loop_template() -> String {
    r"\documentclass{article}
\newcommand{\personalinfo}[5]{\begin{center}\textbf{#1}\\#2 | #3 | #4 | #5\end{center}}
\newcommand{\cvsection}[1]{\section*{#1}}
\newcommand{\skillentry}[2]{\textbf{#1:} #2\\}
\begin{document}
\personalinfo{Your Name}{email}{phone}{site}{github}

PROFESSIONAL_SUMMARY

\cvsection{Experience}
{{#WORK_EXPERIENCE}}
\textbf{{{jobTitle}}} at {{company}} \hfill {{startDate}} -- {{#if isCurrentJob}}Present{{/if}}{{#unless isCurrentJob}}{{endDate}}{{/unless}} \\
{{#responsibilities}}\textbullet{} {{.}} \\
{{/responsibilities}}
{{/WORK_EXPERIENCE}}

\cvsection{Skills}
#IF_SKILLS
SKILLS
/IF_SKILLS
\end{document}
"
    .to_string()
}

/// Minimal valid résumé: just the mandatory personal fields.
pub fn minimal_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Fully populated résumé exercising most sections.
pub fn sample_resume() -> ResumeData {
    let mut data = minimal_resume();
    data.personal_info.phone = "555-0100".to_string();
    data.personal_info.location = "Portland, OR".to_string();
    data.professional_summary =
        Some("Systems engineer focused on reliable text processing.".to_string());
    data.work_experience = vec![
        WorkExperience {
            job_title: "Senior Engineer".to_string(),
            company: "Acme Corp".to_string(),
            start_date: "Jan 2021".to_string(),
            is_current_job: true,
            responsibilities: vec![
                "Led the rendering pipeline rewrite".to_string(),
                "Cut build times by 40%".to_string(),
            ],
            ..Default::default()
        },
        WorkExperience {
            job_title: "Engineer".to_string(),
            company: "Initech".to_string(),
            start_date: "Jun 2018".to_string(),
            end_date: Some("Dec 2020".to_string()),
            responsibilities: vec!["Maintained billing services".to_string()],
            ..Default::default()
        },
    ];
    data.education = vec![Education {
        degree: "B.S.".to_string(),
        institution: "State University".to_string(),
        field_of_study: "Computer Science".to_string(),
        graduation_date: "2018".to_string(),
        ..Default::default()
    }];
    data.skills = vec![
        Skill {
            name: "Rust".to_string(),
            category: "Languages".to_string(),
            ..Default::default()
        },
        Skill {
            name: "LaTeX".to_string(),
            category: "Tools".to_string(),
            ..Default::default()
        },
    ];
    data.languages = vec![LanguageSkill {
        name: "Spanish".to_string(),
        proficiency: "Conversational".to_string(),
    }];
    data.references = vec![Reference {
        name: "Ann Smith".to_string(),
        title: "Director of Engineering".to_string(),
        company: "Acme Corp".to_string(),
        email: "ann@acme.example".to_string(),
        ..Default::default()
    }];
    data
}
