/// The eleven list-backed résumé section kinds.
///
/// [`SectionKind::ORDERED`] fixes the monolithic rendering order; sectioned
/// templates keep their own ordering and only use the placeholder tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Work,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Volunteer,
    Awards,
    Publications,
    Hobbies,
    References,
}

impl SectionKind {
    /// Fixed monolithic ordering: work → education → skills → projects →
    /// certifications → languages → volunteering → awards → publications →
    /// hobbies → references.
    pub const ORDERED: [SectionKind; 11] = [
        SectionKind::Work,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Languages,
        SectionKind::Volunteer,
        SectionKind::Awards,
        SectionKind::Publications,
        SectionKind::Hobbies,
        SectionKind::References,
    ];

    /// Placeholder token used by both marker dialects
    /// (`#IF_<token>`/`<token>` blocks and `{{#<token>}}` loops).
    pub fn placeholder(self) -> &'static str {
        match self {
            SectionKind::Work => "WORK_EXPERIENCE",
            SectionKind::Education => "EDUCATION",
            SectionKind::Skills => "SKILLS",
            SectionKind::Projects => "PROJECTS",
            SectionKind::Certifications => "CERTIFICATIONS",
            SectionKind::Languages => "LANGUAGES",
            SectionKind::Volunteer => "VOLUNTEER_EXPERIENCE",
            SectionKind::Awards => "AWARDS",
            SectionKind::Publications => "PUBLICATIONS",
            SectionKind::Hobbies => "HOBBIES",
            SectionKind::References => "REFERENCES",
        }
    }

    /// Human heading used when the engine has to synthesize a section
    /// header in monolithic mode.
    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Work => "Professional Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Certifications => "Certifications",
            SectionKind::Languages => "Languages",
            SectionKind::Volunteer => "Volunteer Experience",
            SectionKind::Awards => "Awards",
            SectionKind::Publications => "Publications",
            SectionKind::Hobbies => "Interests",
            SectionKind::References => "References",
        }
    }
}
