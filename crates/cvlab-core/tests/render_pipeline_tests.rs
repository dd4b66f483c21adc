//! End-to-end render pipeline tests over real template files.

use std::sync::Arc;

use cvlab_core::model::{Education, WorkExperience, DEFAULT_SUMMARY};
use cvlab_core::{CvlabError, FsTemplateStore, RenderOptions, Renderer};
use cvlab_testkit::{
    compact_monolithic_template, macro_loop_template, minimal_resume, sample_resume,
    sectioned_template, temp_dir_in_workspace, write_template,
};

fn renderer_with(templates: &[(&str, String)]) -> (tempfile::TempDir, Renderer) {
    let dir = temp_dir_in_workspace();
    for (id, source) in templates {
        write_template(dir.path(), "standardized", id, source);
    }
    let renderer = Renderer::new(Arc::new(FsTemplateStore::new(dir.path())));
    (dir, renderer)
}

#[test]
fn sectioned_template_renders_populated_resume() {
    let (_dir, renderer) = renderer_with(&[("classic", sectioned_template())]);
    let out = renderer
        .render(&sample_resume(), "classic", &RenderOptions::default())
        .unwrap();

    assert!(out.contains("Jane Doe"));
    assert!(out.contains("jane.doe@example.com"));
    assert!(out.contains("Systems engineer focused on reliable text processing."));
    assert!(out.contains("\\textbf{Senior Engineer}"));
    assert!(out.contains("Acme Corp"));
    assert!(out.contains("Jan 2021 -- Present"));
    assert!(out.contains("\\textbf{Ann Smith}"));

    assert!(!out.contains("#IF_"));
    assert!(!out.contains("/IF_"));
    assert!(!out.contains("{{"));
    assert!(!out.contains("WORK_EXPERIENCE"));
}

#[test]
fn sectioned_template_drops_empty_sections() {
    let (_dir, renderer) = renderer_with(&[("classic", sectioned_template())]);
    let out = renderer
        .render(&minimal_resume(), "classic", &RenderOptions::default())
        .unwrap();

    assert!(out.contains("Jane Doe"));
    assert!(out.contains(DEFAULT_SUMMARY));
    assert!(!out.contains("\\section*{Experience}"));
    assert!(!out.contains("\\section*{References}"));
    assert!(!out.contains("#IF_"));
}

#[test]
fn monolithic_template_composes_whole_body() {
    let (_dir, renderer) = renderer_with(&[("compact", compact_monolithic_template())]);
    let out = renderer
        .render(&minimal_resume(), "compact", &RenderOptions::default())
        .unwrap();

    assert!(out.contains("{\\LARGE \\textbf{Jane Doe}}"));
    assert!(out.contains(DEFAULT_SUMMARY));
    assert!(out.contains("References available upon request."));
    assert!(!out.contains("RESUME_CONTENT"));
}

#[test]
fn monolithic_template_orders_sections() {
    let (_dir, renderer) = renderer_with(&[("compact", compact_monolithic_template())]);
    let out = renderer
        .render(&sample_resume(), "compact", &RenderOptions::default())
        .unwrap();

    let work = out.find("Senior Engineer").unwrap();
    let education = out.find("State University").unwrap();
    let skills = out.find("Rust").unwrap();
    let references = out.find("Ann Smith").unwrap();
    assert!(work < education);
    assert!(education < skills);
    assert!(skills < references);
}

#[test]
fn loop_template_expands_items_and_conditions() {
    let (_dir, renderer) = renderer_with(&[("modern", macro_loop_template())]);
    let out = renderer
        .render(&sample_resume(), "modern", &RenderOptions::default())
        .unwrap();

    // Contact macro invocation rewritten, definition untouched.
    assert!(out.contains("\\personalinfo{Jane Doe}{jane.doe@example.com}{555-0100}{}{}"));
    assert!(out.contains("\\newcommand{\\personalinfo}[5]"));

    // One instance per work item, with the current-job condition resolved
    // differently per item.
    assert!(out.contains("\\textbf{Senior Engineer} at Acme Corp"));
    assert!(out.contains("Jan 2021 -- Present"));
    assert!(out.contains("\\textbf{Engineer} at Initech"));
    assert!(out.contains("Jun 2018 -- Dec 2020"));
    assert!(out.contains("\\textbullet{} Led the rendering pipeline rewrite"));

    // Skills went through the conditional dialect with the skill macro.
    assert!(out.contains("\\skillentry{Languages}{Rust}"));
    assert!(out.contains("\\skillentry{Tools}{LaTeX}"));

    assert!(!out.contains("{{"));
    assert!(!out.contains("#IF_"));
}

#[test]
fn style_analysis_runs_once_per_template() {
    let (_dir, renderer) = renderer_with(&[("classic", sectioned_template())]);
    let data = sample_resume();
    renderer.render(&data, "classic", &RenderOptions::default()).unwrap();
    renderer.render(&data, "classic", &RenderOptions::default()).unwrap();
    renderer.render(&data, "classic", &RenderOptions::default()).unwrap();
    assert_eq!(renderer.styles().detect_invocations(), 1);
}

#[test]
fn incomplete_entries_never_reach_the_output() {
    let mut data = sample_resume();
    data.work_experience.push(WorkExperience {
        job_title: "Phantom Role".to_string(),
        ..Default::default()
    });
    let (_dir, renderer) = renderer_with(&[("classic", sectioned_template())]);
    let out = renderer.render(&data, "classic", &RenderOptions::default()).unwrap();
    assert!(!out.contains("Phantom Role"));
}

#[test]
fn degree_and_field_are_not_repeated() {
    let mut data = sample_resume();
    data.education = vec![Education {
        degree: "B.S. in Computer Science".to_string(),
        field_of_study: "Computer Science".to_string(),
        institution: "State University".to_string(),
        graduation_date: "2018".to_string(),
        ..Default::default()
    }];
    let (_dir, renderer) = renderer_with(&[("classic", sectioned_template())]);
    let out = renderer.render(&data, "classic", &RenderOptions::default()).unwrap();
    assert!(out.contains("B.S. in Computer Science"));
    assert!(!out.contains("B.S. in Computer Science, Computer Science"));
}

#[test]
fn user_text_is_latex_escaped() {
    let mut data = sample_resume();
    data.work_experience[0].company = "Smith & Jones_LLC".to_string();
    data.work_experience[0].responsibilities = vec!["Grew revenue 30% ($2M)".to_string()];
    let (_dir, renderer) = renderer_with(&[("classic", sectioned_template())]);
    let out = renderer.render(&data, "classic", &RenderOptions::default()).unwrap();
    assert!(out.contains("Smith \\& Jones\\_LLC"));
    assert!(out.contains("Grew revenue 30\\% (\\$2M)"));
}

#[test]
fn cleanup_clears_marker_soup() {
    let soup = "\\documentclass{article}\n\\begin{document}\n\
                #IF_SKILLS dangling\n{{broken\n{{#if}} {{TOKEN}}\n/IF_NOTHING\n\
                FIRST_NAME LAST_NAME\n\\end{document}\n";
    let renderer = Renderer::new(Arc::new(FsTemplateStore::new("unused")));
    let options = RenderOptions {
        custom_template: Some(soup.to_string()),
        ..Default::default()
    };
    let out = renderer.render(&minimal_resume(), "ignored", &options).unwrap();
    assert!(!out.contains("#IF_"));
    assert!(!out.contains("/IF_"));
    assert!(!out.contains("{{"));
    assert!(out.contains("Jane Doe"));
}

#[test]
fn missing_template_is_reported_as_not_found() {
    let (_dir, renderer) = renderer_with(&[]);
    let err = renderer
        .render(&minimal_resume(), "nope", &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, CvlabError::TemplateNotFound(id) if id == "nope"));
}

#[test]
fn invalid_data_fails_before_template_lookup() {
    let (_dir, renderer) = renderer_with(&[]);
    let mut data = minimal_resume();
    data.personal_info.email = String::new();
    let err = renderer
        .render(&data, "whatever", &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, CvlabError::Validation(_)));
}

#[test]
fn failing_enhancer_degrades_to_original_content() {
    use cvlab_core::enhance::Enhancer;
    use cvlab_core::model::ResumeData;

    struct Flaky;
    impl Enhancer for Flaky {
        fn enhance(&self, _: &ResumeData, _: Option<&str>) -> anyhow::Result<ResumeData> {
            anyhow::bail!("backend unavailable")
        }
    }

    let dir = temp_dir_in_workspace();
    write_template(dir.path(), "standardized", "classic", &sectioned_template());
    let renderer =
        Renderer::new(Arc::new(FsTemplateStore::new(dir.path()))).with_enhancer(Arc::new(Flaky));
    let options = RenderOptions {
        enhance: true,
        ..Default::default()
    };
    let out = renderer.render(&sample_resume(), "classic", &options).unwrap();
    assert!(out.contains("Jane Doe"));
}

#[test]
fn enhancer_output_is_rendered_when_it_succeeds() {
    use cvlab_core::enhance::Enhancer;
    use cvlab_core::model::ResumeData;

    struct Upcase;
    impl Enhancer for Upcase {
        fn enhance(&self, data: &ResumeData, _: Option<&str>) -> anyhow::Result<ResumeData> {
            let mut out = data.clone();
            out.professional_summary = Some("Enhanced summary.".to_string());
            Ok(out)
        }
    }

    let dir = temp_dir_in_workspace();
    write_template(dir.path(), "standardized", "classic", &sectioned_template());
    let renderer =
        Renderer::new(Arc::new(FsTemplateStore::new(dir.path()))).with_enhancer(Arc::new(Upcase));
    let options = RenderOptions {
        enhance: true,
        ..Default::default()
    };
    let out = renderer.render(&sample_resume(), "classic", &options).unwrap();
    assert!(out.contains("Enhanced summary."));
}
