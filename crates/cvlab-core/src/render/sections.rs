//! Per-section LaTeX fragment renderers.
//!
//! Each renderer turns one backing list into a LaTeX fragment shaped by
//! the template's detected style: compact templates get single-line
//! entries with `\hfill` dates, everything else gets stacked entries;
//! bullet lists use `itemize` unless the template laid bullets out by
//! hand, in which case `\textbullet{}` lines are emitted instead. Empty
//! input always renders to an empty string; entries missing their
//! identifying fields are dropped rather than rendered half-filled.

use std::collections::BTreeMap;

use crate::model::{ResumeData, SectionKind};
use crate::template::engine::ItemContext;
use crate::template::escape::escape_latex;
use crate::template::style::{Spacing, TemplateStyle, SKILL_ENTRY_MACRO};

pub type RenderFn = fn(&ResumeData, &TemplateStyle) -> String;

/// Renderer table in monolithic order.
pub static SECTION_RENDERERS: &[(SectionKind, RenderFn)] = &[
    (SectionKind::Work, render_work),
    (SectionKind::Education, render_education),
    (SectionKind::Skills, render_skills),
    (SectionKind::Projects, render_projects),
    (SectionKind::Certifications, render_certifications),
    (SectionKind::Languages, render_languages),
    (SectionKind::Volunteer, render_volunteer),
    (SectionKind::Awards, render_awards),
    (SectionKind::Publications, render_publications),
    (SectionKind::Hobbies, render_hobbies),
    (SectionKind::References, render_references),
];

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// `start -- end`, with `Present` standing in for the end of an ongoing
/// engagement.
fn date_range(start: &str, end: Option<&str>, is_current: bool) -> String {
    let start = escape_latex(start);
    let end = if is_current {
        "Present".to_string()
    } else {
        match end.filter(|e| !blank(e)) {
            Some(e) => escape_latex(e),
            None => return start,
        }
    };
    if start.is_empty() {
        end
    } else {
        format!("{start} -- {end}")
    }
}

/// One entry headline. Compact layouts put the dates on the same line;
/// stacked layouts give the subtitle its own line with the dates pushed
/// right.
fn entry_head(title: &str, subtitle: &str, dates: &str, style: &TemplateStyle) -> String {
    let title = escape_latex(title);
    let subtitle = escape_latex(subtitle);
    match style.spacing {
        Spacing::Compact => {
            let mut line = format!("\\textbf{{{title}}}");
            if !subtitle.is_empty() {
                line.push_str(&format!(", {subtitle}"));
            }
            if !dates.is_empty() {
                line.push_str(&format!(" \\hfill {dates}"));
            }
            line.push_str(" \\\\");
            line
        }
        _ => {
            let mut out = format!("\\textbf{{{title}}} \\\\");
            if !subtitle.is_empty() || !dates.is_empty() {
                out.push('\n');
                out.push_str(&subtitle);
                if !dates.is_empty() {
                    out.push_str(&format!(" \\hfill {dates}"));
                }
                out.push_str(" \\\\");
            }
            out
        }
    }
}

/// Bullet list in the template's idiom. Items are escaped here; blank
/// items are skipped.
fn bullet_list(items: &[String], style: &TemplateStyle) -> String {
    let items: Vec<String> = items
        .iter()
        .filter(|i| !blank(i))
        .map(|i| escape_latex(i))
        .collect();
    if items.is_empty() {
        return String::new();
    }

    if style.uses_itemize {
        let opts = if style.spacing == Spacing::Compact {
            "[noitemsep]"
        } else {
            ""
        };
        let mut out = format!("\\begin{{itemize}}{opts}\n");
        for item in &items {
            out.push_str(&format!("  \\item {item}\n"));
        }
        out.push_str("\\end{itemize}");
        out
    } else {
        items
            .iter()
            .map(|i| format!("\\textbullet{{}} {i} \\\\"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn join_entries(entries: Vec<String>, style: &TemplateStyle) -> String {
    let sep = match style.spacing {
        Spacing::Compact => "\n",
        Spacing::Normal => "\n\\medskip\n",
        Spacing::Spacious => "\n\\bigskip\n",
    };
    entries.join(sep)
}

fn render_work(data: &ResumeData, style: &TemplateStyle) -> String {
    let entries: Vec<String> = data
        .work_experience
        .iter()
        .filter(|job| !blank(&job.job_title) && !blank(&job.company))
        .map(|job| {
            let dates = date_range(&job.start_date, job.end_date.as_deref(), job.is_current_job);
            let mut entry = entry_head(&job.job_title, &job.company, &dates, style);
            let mut points = job.responsibilities.clone();
            points.extend(job.achievements.iter().cloned());
            let bullets = bullet_list(&points, style);
            if !bullets.is_empty() {
                entry.push('\n');
                entry.push_str(&bullets);
            }
            entry
        })
        .collect();
    join_entries(entries, style)
}

fn render_volunteer(data: &ResumeData, style: &TemplateStyle) -> String {
    let entries: Vec<String> = data
        .volunteer_experience
        .iter()
        .filter(|v| !blank(&v.job_title) && !blank(&v.organization))
        .map(|v| {
            let dates = date_range(&v.start_date, v.end_date.as_deref(), v.is_current_job);
            let mut entry = entry_head(&v.job_title, &v.organization, &dates, style);
            let mut points = v.responsibilities.clone();
            points.extend(v.achievements.iter().cloned());
            let bullets = bullet_list(&points, style);
            if !bullets.is_empty() {
                entry.push('\n');
                entry.push_str(&bullets);
            }
            entry
        })
        .collect();
    join_entries(entries, style)
}

/// Degree line with the field of study folded in. Case-insensitive
/// containment in either direction collapses to the longer value, so
/// "B.S. in Computer Science" + "Computer Science" stays a single label.
fn merge_program(degree: &str, field_of_study: &str) -> String {
    let degree = degree.trim();
    let field = field_of_study.trim();
    let degree_lower = degree.to_lowercase();
    let field_lower = field.to_lowercase();
    if field.is_empty() || degree_lower.contains(&field_lower) {
        degree.to_string()
    } else if field_lower.contains(&degree_lower) {
        field.to_string()
    } else {
        format!("{degree}, {field}")
    }
}

fn render_education(data: &ResumeData, style: &TemplateStyle) -> String {
    let entries: Vec<String> = data
        .education
        .iter()
        .filter(|e| !blank(&e.degree) && !blank(&e.institution))
        .map(|e| {
            let program = merge_program(&e.degree, &e.field_of_study);
            let dates = escape_latex(&e.graduation_date);
            let mut entry = entry_head(&program, &e.institution, &dates, style);
            if let Some(gpa) = e.gpa.as_deref().filter(|g| !blank(g)) {
                entry.push_str(&format!("\nGPA: {} \\\\", escape_latex(gpa)));
            }
            entry
        })
        .collect();
    join_entries(entries, style)
}

/// Group skills by category into `Category: a, b, c` rows, rendered with
/// `\skillentry` when the template defines it.
fn render_skills(data: &ResumeData, style: &TemplateStyle) -> String {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for skill in data.skills.iter().filter(|s| !blank(&s.name)) {
        let category = if blank(&skill.category) {
            "Skills".to_string()
        } else {
            skill.category.trim().to_string()
        };
        groups.entry(category).or_default().push(skill.name.trim().to_string());
    }
    if groups.is_empty() {
        return String::new();
    }

    let rows: Vec<String> = groups
        .into_iter()
        .map(|(category, names)| skill_row(&category, &names.join(", "), style))
        .collect();
    rows.join("\n")
}

fn skill_row(category: &str, items: &str, style: &TemplateStyle) -> String {
    let category = escape_latex(category);
    let items = escape_latex(items);
    if style.has_command(SKILL_ENTRY_MACRO) {
        format!("\\skillentry{{{category}}}{{{items}}}")
    } else {
        format!("\\textbf{{{category}:}} {items} \\\\")
    }
}

fn render_projects(data: &ResumeData, style: &TemplateStyle) -> String {
    let entries: Vec<String> = data
        .projects
        .iter()
        .filter(|p| !blank(&p.name))
        .map(|p| {
            let subtitle = if p.technologies.is_empty() {
                String::new()
            } else {
                p.technologies.join(", ")
            };
            let mut entry = entry_head(&p.name, &subtitle, "", style);
            let bullets = bullet_list(&p.description, style);
            if !bullets.is_empty() {
                entry.push('\n');
                entry.push_str(&bullets);
            }
            entry
        })
        .collect();
    join_entries(entries, style)
}

fn render_certifications(data: &ResumeData, style: &TemplateStyle) -> String {
    let entries: Vec<String> = data
        .certifications
        .iter()
        .filter(|c| !blank(&c.name))
        .map(|c| {
            let dates = escape_latex(&c.date);
            entry_head(&c.name, &c.issuer, &dates, style)
        })
        .collect();
    join_entries(entries, style)
}

fn render_languages(data: &ResumeData, style: &TemplateStyle) -> String {
    let items: Vec<String> = data
        .languages
        .iter()
        .filter(|l| !blank(&l.name))
        .map(|l| {
            if blank(&l.proficiency) {
                l.name.trim().to_string()
            } else {
                format!("{} ({})", l.name.trim(), l.proficiency.trim())
            }
        })
        .collect();
    if items.is_empty() {
        return String::new();
    }
    skill_row("Languages", &items.join(", "), style)
}

fn render_awards(data: &ResumeData, style: &TemplateStyle) -> String {
    let entries: Vec<String> = data
        .awards
        .iter()
        .filter(|a| !blank(&a.title))
        .map(|a| {
            let dates = escape_latex(&a.date);
            let mut entry = entry_head(&a.title, &a.issuer, &dates, style);
            if let Some(desc) = a.description.as_deref().filter(|d| !blank(d)) {
                entry.push_str(&format!("\n{} \\\\", escape_latex(desc)));
            }
            entry
        })
        .collect();
    join_entries(entries, style)
}

fn render_publications(data: &ResumeData, style: &TemplateStyle) -> String {
    let entries: Vec<String> = data
        .publications
        .iter()
        .filter(|p| !blank(&p.title))
        .map(|p| {
            let dates = escape_latex(&p.publication_date);
            entry_head(&p.title, &p.publisher, &dates, style)
        })
        .collect();
    join_entries(entries, style)
}

fn render_hobbies(data: &ResumeData, style: &TemplateStyle) -> String {
    let items: Vec<String> = data
        .hobbies
        .iter()
        .filter(|h| !blank(&h.name))
        .map(|h| h.name.trim().to_string())
        .collect();
    if items.is_empty() {
        return String::new();
    }
    skill_row("Interests", &items.join(", "), style)
}

fn render_references(data: &ResumeData, style: &TemplateStyle) -> String {
    let entries: Vec<String> = data
        .references
        .iter()
        .filter(|r| !blank(&r.name))
        .map(|r| {
            let mut entry = entry_head(&r.name, &r.title, "", style);
            let mut contact = Vec::new();
            if !blank(&r.company) {
                contact.push(escape_latex(&r.company));
            }
            if !blank(&r.email) {
                contact.push(escape_latex(&r.email));
            }
            if !blank(&r.phone) {
                contact.push(escape_latex(&r.phone));
            }
            if !contact.is_empty() {
                entry.push_str(&format!("\n{} \\\\", contact.join(" | ")));
            }
            entry
        })
        .collect();
    join_entries(entries, style)
}

/// Loop-dialect contexts for one section, one per surviving entry. The
/// completeness filters match the fragment renderers so both dialects
/// agree on which records exist.
pub fn loop_items(data: &ResumeData, kind: SectionKind) -> Vec<ItemContext> {
    match kind {
        SectionKind::Work => data
            .work_experience
            .iter()
            .filter(|job| !blank(&job.job_title) && !blank(&job.company))
            .map(|job| {
                ItemContext::new()
                    .scalar("jobTitle", job.job_title.trim())
                    .scalar("company", job.company.trim())
                    .scalar("location", job.location.trim())
                    .scalar("startDate", job.start_date.trim())
                    .opt("endDate", job.end_date.as_deref())
                    .flag("isCurrentJob", job.is_current_job)
                    .list("responsibilities", &job.responsibilities)
                    .list("achievements", &job.achievements)
            })
            .collect(),
        SectionKind::Education => data
            .education
            .iter()
            .filter(|e| !blank(&e.degree) && !blank(&e.institution))
            .map(|e| {
                ItemContext::new()
                    .scalar("degree", merge_program(&e.degree, &e.field_of_study))
                    .scalar("institution", e.institution.trim())
                    .scalar("fieldOfStudy", e.field_of_study.trim())
                    .opt("location", e.location.as_deref())
                    .scalar("graduationDate", e.graduation_date.trim())
                    .opt("gpa", e.gpa.as_deref())
                    .list("coursework", &e.coursework)
            })
            .collect(),
        SectionKind::Skills => data
            .skills
            .iter()
            .filter(|s| !blank(&s.name))
            .map(|s| {
                ItemContext::new()
                    .scalar("name", s.name.trim())
                    .scalar("category", s.category.trim())
                    .opt("proficiencyLevel", s.proficiency_level.as_deref())
            })
            .collect(),
        SectionKind::Projects => data
            .projects
            .iter()
            .filter(|p| !blank(&p.name))
            .map(|p| {
                ItemContext::new()
                    .scalar("name", p.name.trim())
                    .list("description", &p.description)
                    .list("technologies", &p.technologies)
                    .opt("url", p.url.as_deref())
            })
            .collect(),
        SectionKind::Certifications => data
            .certifications
            .iter()
            .filter(|c| !blank(&c.name))
            .map(|c| {
                ItemContext::new()
                    .scalar("name", c.name.trim())
                    .scalar("issuer", c.issuer.trim())
                    .scalar("date", c.date.trim())
                    .opt("expirationDate", c.expiration_date.as_deref())
                    .opt("url", c.url.as_deref())
            })
            .collect(),
        SectionKind::Languages => data
            .languages
            .iter()
            .filter(|l| !blank(&l.name))
            .map(|l| {
                ItemContext::new()
                    .scalar("name", l.name.trim())
                    .scalar("proficiency", l.proficiency.trim())
            })
            .collect(),
        SectionKind::Volunteer => data
            .volunteer_experience
            .iter()
            .filter(|v| !blank(&v.job_title) && !blank(&v.organization))
            .map(|v| {
                ItemContext::new()
                    .scalar("jobTitle", v.job_title.trim())
                    .scalar("organization", v.organization.trim())
                    .scalar("location", v.location.trim())
                    .scalar("startDate", v.start_date.trim())
                    .opt("endDate", v.end_date.as_deref())
                    .flag("isCurrentJob", v.is_current_job)
                    .list("responsibilities", &v.responsibilities)
                    .list("achievements", &v.achievements)
            })
            .collect(),
        SectionKind::Awards => data
            .awards
            .iter()
            .filter(|a| !blank(&a.title))
            .map(|a| {
                ItemContext::new()
                    .scalar("title", a.title.trim())
                    .scalar("issuer", a.issuer.trim())
                    .scalar("date", a.date.trim())
                    .opt("description", a.description.as_deref())
            })
            .collect(),
        SectionKind::Publications => data
            .publications
            .iter()
            .filter(|p| !blank(&p.title))
            .map(|p| {
                ItemContext::new()
                    .scalar("title", p.title.trim())
                    .scalar("publisher", p.publisher.trim())
                    .scalar("publicationDate", p.publication_date.trim())
                    .opt("url", p.url.as_deref())
                    .opt("description", p.description.as_deref())
            })
            .collect(),
        SectionKind::Hobbies => data
            .hobbies
            .iter()
            .filter(|h| !blank(&h.name))
            .map(|h| {
                ItemContext::new()
                    .scalar("name", h.name.trim())
                    .scalar("category", h.category.trim())
                    .opt("description", h.description.as_deref())
            })
            .collect(),
        SectionKind::References => data
            .references
            .iter()
            .filter(|r| !blank(&r.name))
            .map(|r| {
                ItemContext::new()
                    .scalar("name", r.name.trim())
                    .scalar("title", r.title.trim())
                    .scalar("company", r.company.trim())
                    .scalar("email", r.email.trim())
                    .scalar("phone", r.phone.trim())
                    .scalar("relationship", r.relationship.trim())
            })
            .collect(),
    }
}
