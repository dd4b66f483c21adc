//! Loop-templating dialect.
//!
//! Engaged per section, only when the template contains that section's
//! loop region `{{#<SECTION>}} ... {{/<SECTION>}}`. Each data item renders
//! a clone of the loop body with a strict, order-sensitive resolution:
//!
//! 1. array sub-loops `{{#<field>}} ... {{/<field>}}` for list attributes,
//!    substituting `{{.}}` / `{{this}}` per element;
//! 2. `{{#if <field>}}` / `{{#unless <field>}}` truthiness gates;
//! 3. generic optional blocks `{{#<field>}} ... {{/<field>}}` for non-list
//!    attributes, which both gate and substitute their own inline
//!    `{{<field>}}` tokens;
//! 4. plain `{{<field>}}` scalar substitution.
//!
//! The pass order is load-bearing: the generic optional block re-resolves
//! its own field name, so reordering changes observable output.

mod blocks;
mod context;

use crate::template::escape::escape_latex;
use blocks::{find_block, next_token, TokenKind};

pub use context::{Field, ItemContext};

/// Presence check for a section's loop region. A lone opener with no
/// closer does not count.
pub fn has_section_loop(template: &str, section_token: &str) -> bool {
    find_block(template, section_token, 0).is_some()
}

/// Expand every `{{#<section>}} ... {{/<section>}}` region, rendering the
/// body once per item and joining the instances with a line separator.
/// Zero items remove the region entirely.
pub fn expand_section_loops(template: &str, section_token: &str, items: &[ItemContext]) -> String {
    let mut out = template.to_string();
    loop {
        let Some(block) = find_block(&out, section_token, 0) else {
            break;
        };
        let (start, end) = (block.start, block.end);
        let body = out[block.body_start..block.body_end].to_string();

        let rendered: Vec<String> = items.iter().map(|ctx| render_item(&body, ctx)).collect();
        out.replace_range(start..end, &rendered.join("\n"));
    }
    out
}

/// Render one item instance of a loop body. Pass order is fixed; see the
/// module docs.
fn render_item(body: &str, ctx: &ItemContext) -> String {
    let mut out = apply_array_loops(body, ctx);
    out = apply_condition_blocks(&out, ctx);
    out = apply_optional_blocks(&out, ctx);
    substitute_scalars(&out, ctx)
}

/// Pass 1: array sub-loops for list-valued attributes.
fn apply_array_loops(body: &str, ctx: &ItemContext) -> String {
    let mut out = body.to_string();
    for (name, field) in ctx.fields() {
        let Field::List(elements) = field else {
            continue;
        };
        loop {
            let Some(block) = find_block(&out, name, 0) else {
                break;
            };
            let (start, end) = (block.start, block.end);
            let inner = out[block.body_start..block.body_end].to_string();

            let mut rendered = String::new();
            for element in elements {
                rendered.push_str(&substitute_element(&inner, element));
            }
            out.replace_range(start..end, &rendered);
        }
    }
    out
}

/// Replace `{{.}}` and `{{this}}` with the escaped element text.
fn substitute_element(body: &str, element: &str) -> String {
    rewrite_tokens(body, |kind| match kind {
        TokenKind::Placeholder { key } if *key == "." || *key == "this" => {
            Some(escape_latex(element))
        }
        _ => None,
    })
}

/// Pass 2: `#if` / `#unless` truthiness gates. An unknown field is falsy.
fn apply_condition_blocks(body: &str, ctx: &ItemContext) -> String {
    let mut out = body.to_string();
    for keyword in ["if", "unless"] {
        loop {
            let Some(block) = find_block(&out, keyword, 0) else {
                break;
            };
            let (start, end) = (block.start, block.end);
            let inner = out[block.body_start..block.body_end].to_string();
            let field = block.args.trim().to_string();

            let truthy = ctx.get(&field).map(Field::is_truthy).unwrap_or(false);
            let keep = (keyword == "if") == truthy;
            let replacement = if keep { inner } else { String::new() };
            out.replace_range(start..end, &replacement);
        }
    }
    out
}

/// Pass 3: generic optional blocks for non-list attributes. A truthy field
/// keeps the content and substitutes its own inline `{{<field>}}` tokens;
/// a falsy field drops the content.
fn apply_optional_blocks(body: &str, ctx: &ItemContext) -> String {
    let mut out = body.to_string();
    for (name, field) in ctx.fields() {
        if matches!(field, Field::List(_)) {
            continue;
        }
        loop {
            let Some(block) = find_block(&out, name, 0) else {
                break;
            };
            let (start, end) = (block.start, block.end);
            let inner = out[block.body_start..block.body_end].to_string();

            let replacement = if field.is_truthy() {
                let value = escape_latex(&field.as_text());
                rewrite_tokens(&inner, |kind| match kind {
                    TokenKind::Placeholder { key } if *key == name.as_str() => Some(value.clone()),
                    _ => None,
                })
            } else {
                String::new()
            };
            out.replace_range(start..end, &replacement);
        }
    }
    out
}

/// Pass 4: remaining `{{<field>}}` scalar substitution. Unknown tokens are
/// left in place for the cleanup pass.
fn substitute_scalars(body: &str, ctx: &ItemContext) -> String {
    rewrite_tokens(body, |kind| match kind {
        TokenKind::Placeholder { key } => ctx.get(key).map(|f| escape_latex(&f.as_text())),
        _ => None,
    })
}

/// Scan `{{...}}` tokens, replacing those the callback resolves and
/// copying everything else through verbatim.
fn rewrite_tokens<F>(body: &str, mut resolve: F) -> String
where
    F: FnMut(&TokenKind<'_>) -> Option<String>,
{
    let mut out = String::with_capacity(body.len());
    let mut pos = 0;
    while let Some(tok) = next_token(body, pos) {
        out.push_str(&body[pos..tok.start]);
        match resolve(&tok.kind) {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(&body[tok.start..tok.end]),
        }
        pos = tok.end;
    }
    out.push_str(&body[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(current: bool) -> ItemContext {
        ItemContext::new()
            .scalar("jobTitle", "Engineer")
            .scalar("company", "Acme & Co")
            .scalar("startDate", "Jan 2020")
            .opt("endDate", if current { None } else { Some("Dec 2022") })
            .flag("isCurrentJob", current)
            .list(
                "responsibilities",
                &["Built services".to_string(), "Led reviews".to_string()],
            )
            .list("achievements", &[])
    }

    #[test]
    fn presence_check_requires_closed_region() {
        assert!(has_section_loop(
            "{{#WORK_EXPERIENCE}}x{{/WORK_EXPERIENCE}}",
            "WORK_EXPERIENCE"
        ));
        assert!(!has_section_loop("{{#WORK_EXPERIENCE}}x", "WORK_EXPERIENCE"));
        assert!(!has_section_loop("no markers at all", "WORK_EXPERIENCE"));
    }

    #[test]
    fn expands_one_instance_per_item() {
        let template = "{{#WORK_EXPERIENCE}}{{jobTitle}} at {{company}}{{/WORK_EXPERIENCE}}";
        let items = vec![job(true), job(false)];
        let out = expand_section_loops(template, "WORK_EXPERIENCE", &items);
        assert_eq!(
            out,
            "Engineer at Acme \\& Co\nEngineer at Acme \\& Co"
        );
    }

    #[test]
    fn zero_items_remove_the_region() {
        let template = "before {{#AWARDS}}{{title}}{{/AWARDS}} after";
        let out = expand_section_loops(template, "AWARDS", &[]);
        assert_eq!(out, "before  after");
    }

    #[test]
    fn array_sub_loop_repeats_per_element() {
        let template =
            "{{#WORK_EXPERIENCE}}{{#responsibilities}}- {{.}}\n{{/responsibilities}}{{/WORK_EXPERIENCE}}";
        let out = expand_section_loops(template, "WORK_EXPERIENCE", &[job(true)]);
        assert_eq!(out, "- Built services\n- Led reviews\n");
    }

    #[test]
    fn this_is_an_alias_for_the_element() {
        let template = "{{#responsibilities}}[{{this}}]{{/responsibilities}}";
        let out = render_item(template, &job(true));
        assert_eq!(out, "[Built services][Led reviews]");
    }

    #[test]
    fn empty_array_removes_sub_loop_block() {
        let template = "x{{#achievements}}never{{/achievements}}y";
        assert_eq!(render_item(template, &job(true)), "xy");
    }

    #[test]
    fn if_block_keeps_content_for_truthy_flag() {
        let body = "{{#if isCurrentJob}}Present{{/if}}";
        assert_eq!(render_item(body, &job(true)), "Present");
        assert_eq!(render_item(body, &job(false)), "");
    }

    #[test]
    fn unless_block_inverts_the_gate() {
        let body = "{{#unless isCurrentJob}}{{endDate}}{{/unless}}";
        assert_eq!(render_item(body, &job(false)), "Dec 2022");
        assert_eq!(render_item(body, &job(true)), "");
    }

    #[test]
    fn unknown_field_is_falsy_in_conditionals() {
        let body = "{{#if nonexistent}}x{{/if}}ok";
        assert_eq!(render_item(body, &job(true)), "ok");
    }

    #[test]
    fn generic_optional_block_gates_and_substitutes() {
        let body = "{{#endDate}}until {{endDate}}{{/endDate}}";
        assert_eq!(render_item(body, &job(false)), "until Dec 2022");
        assert_eq!(render_item(body, &job(true)), "");
    }

    #[test]
    fn scalar_substitution_escapes_values() {
        let body = "{{company}}";
        assert_eq!(render_item(body, &job(true)), "Acme \\& Co");
    }

    #[test]
    fn unknown_scalar_tokens_are_left_for_cleanup() {
        let body = "{{jobTitle}} {{mystery}}";
        assert_eq!(render_item(body, &job(true)), "Engineer {{mystery}}");
    }

    #[test]
    fn element_and_field_tokens_resolve_in_one_body() {
        let body = "{{#responsibilities}}{{.}}|{{this}}{{/responsibilities}}{{#company}}{{company}}{{/company}}";
        assert_eq!(
            render_item(body, &job(true)),
            "Built services|Built servicesLed reviews|Led reviewsAcme \\& Co"
        );
    }

    #[test]
    fn pass_order_array_before_conditionals() {
        // The responsibilities block must be resolved as an array sub-loop,
        // not as a generic optional block, even though both use the same
        // open/close syntax.
        let body = "{{#responsibilities}}{{.}};{{/responsibilities}}";
        assert_eq!(render_item(body, &job(true)), "Built services;Led reviews;");
    }

    #[test]
    fn nested_if_inside_array_loop_survives_ordering() {
        let body = "{{#responsibilities}}{{.}}{{/responsibilities}}{{#if isCurrentJob}}!{{/if}}";
        assert_eq!(
            render_item(body, &job(true)),
            "Built servicesLed reviews!"
        );
    }
}
