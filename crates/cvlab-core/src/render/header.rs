//! Personal-info injection into the template header.
//!
//! Two template shapes are supported. Templates defining the contact macro
//! get their `\personalinfo{..}{..}{..}{..}{..}` invocation rewritten
//! argument by argument; everything else gets bare-token substitution of
//! the individual placeholders.

use crate::model::ResumeData;
use crate::template::error::TemplateError;
use crate::template::escape::escape_latex;
use crate::template::style::{TemplateStyle, CONTACT_MACRO};

const FIRST_NAME_TOKEN: &str = "FIRST_NAME";
const LAST_NAME_TOKEN: &str = "LAST_NAME";
const EMAIL_TOKEN: &str = "EMAIL";
const PHONE_TOKEN: &str = "PHONE";
const SUMMARY_TOKEN: &str = "PROFESSIONAL_SUMMARY";

/// Fill the template header with personal info, and substitute the
/// summary placeholder if present.
pub fn inject_personal_info(
    template: &str,
    data: &ResumeData,
    style: &TemplateStyle,
) -> Result<String, TemplateError> {
    let mut out = if style.has_command(CONTACT_MACRO) {
        rewrite_contact_macro(template, data)?
    } else {
        substitute_personal_tokens(template, data)
    };

    out = out.replace(SUMMARY_TOKEN, &escape_latex(data.summary_text()));
    Ok(out)
}

fn substitute_personal_tokens(template: &str, data: &ResumeData) -> String {
    let info = &data.personal_info;
    template
        .replace(FIRST_NAME_TOKEN, &escape_latex(&info.first_name))
        .replace(LAST_NAME_TOKEN, &escape_latex(&info.last_name))
        .replace(EMAIL_TOKEN, &escape_latex(&info.email))
        .replace(PHONE_TOKEN, &escape_latex(&info.phone))
}

/// Rewrite the first `\personalinfo` invocation carrying five brace groups.
///
/// The macro definition itself (`\newcommand{\personalinfo}[5]{...}`)
/// never matches: `{\personalinfo}` puts a `}` right after the name, so the
/// five-group check fails there and scanning moves on. When no invocation
/// exists at all, token substitution is the fallback.
fn rewrite_contact_macro(template: &str, data: &ResumeData) -> Result<String, TemplateError> {
    let needle = format!("\\{CONTACT_MACRO}");
    let info = &data.personal_info;
    let args = [
        escape_latex(&info.full_name()),
        escape_latex(&info.email),
        escape_latex(&info.phone),
        escape_latex(info.website.as_deref().unwrap_or_default()),
        escape_latex(info.github.as_deref().unwrap_or_default()),
    ];

    let mut search = 0;
    while let Some(rel) = template[search..].find(&needle) {
        let at = search + rel;
        let after_name = at + needle.len();
        // Skip longer macro names sharing the prefix.
        if template[after_name..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
        {
            search = after_name;
            continue;
        }

        match take_brace_groups(&template[after_name..], 5) {
            GroupScan::Found(len) => {
                let rewritten = format!(
                    "\\{CONTACT_MACRO}{{{}}}{{{}}}{{{}}}{{{}}}{{{}}}",
                    args[0], args[1], args[2], args[3], args[4]
                );
                let mut out = String::with_capacity(template.len());
                out.push_str(&template[..at]);
                out.push_str(&rewritten);
                out.push_str(&template[after_name + len..]);
                return Ok(out);
            }
            GroupScan::NotAnInvocation => {
                search = after_name;
            }
            GroupScan::Unbalanced => {
                return Err(TemplateError::MalformedMacro {
                    name: CONTACT_MACRO.to_string(),
                    reason: "unbalanced braces in argument list".to_string(),
                });
            }
        }
    }

    Ok(substitute_personal_tokens(template, data))
}

enum GroupScan {
    /// Byte length of `count` consecutive brace groups.
    Found(usize),
    /// The text after the macro name does not start a brace group.
    NotAnInvocation,
    /// A group opened but never closed.
    Unbalanced,
}

/// Measure `count` consecutive `{...}` groups at the start of `text`,
/// allowing nested braces inside each group.
fn take_brace_groups(text: &str, count: usize) -> GroupScan {
    let bytes = text.as_bytes();
    let mut pos = 0;
    for _ in 0..count {
        if bytes.get(pos) != Some(&b'{') {
            return GroupScan::NotAnInvocation;
        }
        let mut depth = 0usize;
        let mut closed = false;
        for (i, &b) in bytes[pos..].iter().enumerate() {
            match b {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        pos += i + 1;
                        closed = true;
                        break;
                    }
                }
                _ => {}
            }
        }
        if !closed {
            return GroupScan::Unbalanced;
        }
    }
    GroupScan::Found(pos)
}
