//! `{{...}}` token scanning and block matching.

/// Token classification.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind<'a> {
    /// `{{field}}`, `{{.}}`, `{{this}}`
    Placeholder { key: &'a str },
    /// `{{#SECTION}}`, `{{#if field}}`, `{{#unless field}}`
    BlockStart { keyword: &'a str, args: &'a str },
    /// `{{/SECTION}}`, `{{/if}}`
    BlockEnd { keyword: &'a str },
}

/// A single `{{...}}` token with its byte range in the scanned text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind<'a>,
    /// Byte position of the opening `{{`.
    pub start: usize,
    /// Byte position just past the closing `}}`.
    pub end: usize,
}

fn classify(content: &str) -> TokenKind<'_> {
    if let Some(rest) = content.strip_prefix('#') {
        let mut parts = rest.splitn(2, char::is_whitespace);
        let keyword = parts.next().unwrap_or("");
        let args = parts.next().unwrap_or("").trim();
        TokenKind::BlockStart { keyword, args }
    } else if let Some(rest) = content.strip_prefix('/') {
        TokenKind::BlockEnd {
            keyword: rest.trim(),
        }
    } else {
        TokenKind::Placeholder { key: content }
    }
}

/// Find the next `{{...}}` token at or after `from`.
///
/// LaTeX templates are full of brace runs (`\textbf{{{jobTitle}}}`), so in
/// a run of three or more `{` the *last* two are taken as the opener; the
/// leading braces stay literal text. An opener with no closing `}}` yields
/// no token; the cleanup pass deals with the leftovers.
pub(crate) fn next_token(text: &str, from: usize) -> Option<Token<'_>> {
    let rel = text[from..].find("{{")?;
    let mut start = from + rel;
    while text.as_bytes().get(start + 2) == Some(&b'{') {
        start += 1;
    }
    let close_rel = text[start + 2..].find("}}")?;
    let content = text[start + 2..start + 2 + close_rel].trim();
    Some(Token {
        kind: classify(content),
        start,
        end: start + 2 + close_rel + 2,
    })
}

/// A matched `{{#keyword ...}} body {{/keyword}}` region.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Block<'a> {
    pub start: usize,
    pub body_start: usize,
    pub body_end: usize,
    pub end: usize,
    pub args: &'a str,
}

/// Find the first block for `keyword` at or after `from`, honoring nesting
/// of the same keyword. An opener without a matching closer is treated as
/// no block at all.
pub(crate) fn find_block<'a>(text: &'a str, keyword: &str, from: usize) -> Option<Block<'a>> {
    let mut pos = from;
    let (open_start, open_end, args) = loop {
        let tok = next_token(text, pos)?;
        pos = tok.end;
        if let TokenKind::BlockStart { keyword: kw, args } = tok.kind {
            if kw == keyword {
                break (tok.start, tok.end, args);
            }
        }
    };

    let mut depth = 0usize;
    loop {
        let tok = next_token(text, pos)?;
        pos = tok.end;
        match tok.kind {
            TokenKind::BlockStart { keyword: kw, .. } if kw == keyword => depth += 1,
            TokenKind::BlockEnd { keyword: kw } if kw == keyword => {
                if depth == 0 {
                    return Some(Block {
                        start: open_start,
                        body_start: open_end,
                        body_end: tok.start,
                        end: tok.end,
                        args,
                    });
                }
                depth -= 1;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_placeholder_tokens() {
        let tok = next_token("Hello {{name}} world", 0).unwrap();
        assert_eq!(tok.start, 6);
        assert_eq!(tok.end, 14);
        assert_eq!(tok.kind, TokenKind::Placeholder { key: "name" });
    }

    #[test]
    fn trims_spaces_inside_braces() {
        let tok = next_token("{{ name }}", 0).unwrap();
        assert_eq!(tok.kind, TokenKind::Placeholder { key: "name" });
    }

    #[test]
    fn classifies_block_markers() {
        let tok = next_token("{{#if isCurrentJob}}", 0).unwrap();
        assert_eq!(
            tok.kind,
            TokenKind::BlockStart {
                keyword: "if",
                args: "isCurrentJob"
            }
        );

        let tok = next_token("{{/if}}", 0).unwrap();
        assert_eq!(tok.kind, TokenKind::BlockEnd { keyword: "if" });
    }

    #[test]
    fn latex_brace_runs_leave_leading_braces_literal() {
        // \textbf{{{jobTitle}}} is \textbf{ + {{jobTitle}} + }
        let text = "\\textbf{{{jobTitle}}}";
        let tok = next_token(text, 0).unwrap();
        assert_eq!(&text[tok.start..tok.end], "{{jobTitle}}");
        assert_eq!(tok.kind, TokenKind::Placeholder { key: "jobTitle" });
    }

    #[test]
    fn unclosed_opener_yields_no_token() {
        assert!(next_token("text {{never closed", 0).is_none());
    }

    #[test]
    fn finds_simple_block() {
        let text = "a {{#SKILLS}} body {{/SKILLS}} z";
        let block = find_block(text, "SKILLS", 0).unwrap();
        assert_eq!(&text[block.body_start..block.body_end], " body ");
        assert_eq!(&text[block.start..block.end], "{{#SKILLS}} body {{/SKILLS}}");
    }

    #[test]
    fn respects_nesting_of_same_keyword() {
        let text = "{{#if a}}x{{#if b}}y{{/if}}z{{/if}}";
        let block = find_block(text, "if", 0).unwrap();
        assert_eq!(
            &text[block.body_start..block.body_end],
            "x{{#if b}}y{{/if}}z"
        );
    }

    #[test]
    fn opener_without_closer_is_no_block() {
        assert!(find_block("{{#SKILLS}} never closed", "SKILLS", 0).is_none());
    }

    #[test]
    fn unrelated_tokens_are_skipped() {
        let text = "{{name}} {{#WORK}} {{jobTitle}} {{/WORK}}";
        let block = find_block(text, "WORK", 0).unwrap();
        assert_eq!(&text[block.body_start..block.body_end], " {{jobTitle}} ");
    }
}
