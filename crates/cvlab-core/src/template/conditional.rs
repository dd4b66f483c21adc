//! Block-conditional dialect and the final cleanup pass.
//!
//! The block conditional is plain text layered on the template:
//! `#IF_<NAME> ... <NAME> ... /IF_<NAME>`, read as (before, placeholder,
//! after). Non-empty data replaces the whole region with
//! `before + rendered + after`; empty data removes the region entirely.
//! Scanning is `find()`-based and forward-only; nothing in this dialect is
//! brace-wrapped, which is how it coexists with the loop dialect.

/// Hard cap on cleanup iterations. A resilience valve against pathological
/// marker soup, not a substitute for correct earlier resolution.
pub const CLEANUP_ITERATION_CAP: usize = 15;

const IF_PREFIX: &str = "#IF_";
const END_PREFIX: &str = "/IF_";

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True when `text[at..at + token.len()]` is the token with nothing
/// token-like glued to either side. Keeps bare substitution away from the
/// `#IF_<token>` / `{{#<token>}}` markers that embed the same name.
fn is_bare_token_at(text: &str, at: usize, token: &str) -> bool {
    let before_ok = match text[..at].chars().next_back() {
        Some(c) => !is_token_char(c) && c != '#' && c != '/',
        None => true,
    };
    let after_ok = match text[at + token.len()..].chars().next() {
        Some(c) => !is_token_char(c),
        None => true,
    };
    before_ok && after_ok
}

/// Replace the first bare occurrence of `token`, if any.
fn replace_bare_token(text: &str, token: &str, replacement: &str) -> Option<String> {
    let mut search = 0;
    while let Some(rel) = text[search..].find(token) {
        let at = search + rel;
        if is_bare_token_at(text, at, token) {
            let mut out = String::with_capacity(text.len() + replacement.len());
            out.push_str(&text[..at]);
            out.push_str(replacement);
            out.push_str(&text[at + token.len()..]);
            return Some(out);
        }
        search = at + token.len();
    }
    None
}

/// Inject one section's rendered fragment through the block-conditional
/// dialect.
///
/// - Block present, data non-empty: `before + rendered + after`, with the
///   bare placeholder inside the block replaced by the fragment.
/// - Block present, data empty: the entire region disappears.
/// - No block, data non-empty: a bare placeholder token is substituted if
///   one exists.
/// - No block, data empty: the text is returned unchanged.
pub fn inject_section(template: &str, placeholder: &str, rendered: &str) -> String {
    let open = format!("{IF_PREFIX}{placeholder}");
    let close = format!("{END_PREFIX}{placeholder}");
    let has_data = !rendered.trim().is_empty();

    if let Some(start) = template.find(&open) {
        if let Some(rel) = template[start + open.len()..].find(&close) {
            let body_start = start + open.len();
            let body_end = body_start + rel;
            let after_block = body_end + close.len();

            if !has_data {
                return format!("{}{}", &template[..start], &template[after_block..]);
            }

            let body = &template[body_start..body_end];
            let filled = replace_bare_token(body, placeholder, rendered)
                .unwrap_or_else(|| format!("{body}{rendered}"));
            return format!("{}{}{}", &template[..start], filled, &template[after_block..]);
        }
        // Unmatched opener: leave it for the cleanup pass.
    }

    if !has_data {
        return template.to_string();
    }
    replace_bare_token(template, placeholder, rendered).unwrap_or_else(|| template.to_string())
}

/// Strip one residual `#IF_...` block (or lone marker). Returns `None`
/// when nothing is left to strip.
fn strip_one_conditional(text: &str) -> Option<String> {
    if let Some(start) = text.find(IF_PREFIX) {
        let name: String = text[start + IF_PREFIX.len()..]
            .chars()
            .take_while(|&c| is_token_char(c))
            .collect();
        let close = format!("{END_PREFIX}{name}");
        let after_open = start + IF_PREFIX.len() + name.len();
        let end = match text[after_open..].find(&close) {
            Some(rel) => after_open + rel + close.len(),
            None => after_open,
        };
        return Some(format!("{}{}", &text[..start], &text[end..]));
    }
    if let Some(start) = text.find(END_PREFIX) {
        let name_len = text[start + END_PREFIX.len()..]
            .chars()
            .take_while(|&c| is_token_char(c))
            .count();
        let end = start + END_PREFIX.len() + name_len;
        return Some(format!("{}{}", &text[..start], &text[end..]));
    }
    None
}

fn strip_residual_conditionals(text: &str) -> String {
    let mut current = text.to_string();
    while let Some(next) = strip_one_conditional(&current) {
        current = next;
    }
    current
}

/// Remove stray `{{...}}` tokens, including unterminated `{{` runs. In a
/// run of `{` only the last two open a token; the leading braces are LaTeX
/// groups and stay in place, matching the loop tokenizer.
fn strip_stray_tokens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(found) = rest.find("{{") {
        let mut start = found;
        while rest.as_bytes().get(start + 2) == Some(&b'{') {
            start += 1;
        }
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("}}") {
            Some(rel) => rest = &rest[start + 2 + rel + 2..],
            None => rest = &rest[start + 2..],
        }
    }
    out.push_str(rest);
    out
}

/// Collapse runs of 3+ consecutive blank lines to exactly one.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            continue;
        }
        if blank_run > 0 {
            let emit = if blank_run >= 3 { 1 } else { blank_run };
            for _ in 0..emit {
                out.push('\n');
            }
            blank_run = 0;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    if blank_run > 0 {
        let emit = if blank_run >= 3 { 1 } else { blank_run };
        for _ in 0..emit {
            out.push('\n');
        }
        if text.ends_with('\n') {
            out.push('\n');
        }
    } else if text.ends_with('\n') && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Final cleanup pass: strip residual conditionals, strip stray `{{...}}`
/// tokens, and collapse blank-line runs, repeated until a fixed point or
/// the iteration cap.
pub fn cleanup(text: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..CLEANUP_ITERATION_CAP {
        let mut next = strip_residual_conditionals(&current);
        next = strip_stray_tokens(&next);
        next = collapse_blank_lines(&next);
        if next == current {
            return next;
        }
        current = next;
    }
    tracing::warn!(
        "cleanup did not reach a fixed point within {} iterations",
        CLEANUP_ITERATION_CAP
    );
    current
}
