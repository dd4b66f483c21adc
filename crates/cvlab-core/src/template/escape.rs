//! LaTeX text escaping.
//!
//! One-directional: the output is safe to embed in LaTeX source, but the
//! transformation is not reversible.

/// Punctuation allowed through the final sweep unchanged.
const ALLOWED_PUNCT: &[char] = &[
    ',', '.', '-', ':', ';', '!', '?', '(', ')', '\'', '@', '/', '+',
];

/// Escape arbitrary user text into LaTeX-safe text.
///
/// The scan is a single forward pass over the input, which is what makes
/// the ordering hold: the backslash case runs on input characters only, so
/// the escape sequences it inserts are never themselves re-escaped.
///
/// After the special characters, straight quotes become typographic
/// equivalents, en/em dashes become `--`, and an ellipsis glyph becomes
/// three periods. Anything still outside the allow-list (ASCII
/// alphanumerics, whitespace, and a fixed punctuation set) is replaced
/// with a single space, and the result is trimmed.
pub fn escape_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for ch in input.chars() {
        match ch {
            // Backslash first: inserted escapes are final output, never re-scanned.
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '$' => out.push_str("\\$"),
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '#' => out.push_str("\\#"),
            '^' => out.push_str("\\^{}"),
            '_' => out.push_str("\\_"),
            '~' => out.push_str("\\~{}"),
            '"' | '\u{201C}' | '\u{201D}' => out.push_str("''"),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{2013}' | '\u{2014}' => out.push_str("--"),
            '\u{2026}' => out.push_str("..."),
            c if c.is_ascii_alphanumeric() || c.is_whitespace() => out.push(c),
            c if ALLOWED_PUNCT.contains(&c) => out.push(c),
            _ => out.push(' '),
        }
    }

    out.trim().to_string()
}
