//! Per-item field context for the loop dialect.

use std::collections::BTreeMap;

/// One item attribute. Lists drive array sub-loops; scalars and flags feed
/// conditionals and inline substitution.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Scalar(String),
    Bool(bool),
    List(Vec<String>),
}

impl Field {
    /// Truthiness for `#if` / `#unless` and the generic optional block:
    /// false flags, blank scalars, and empty lists are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Field::Scalar(s) => !s.trim().is_empty(),
            Field::Bool(b) => *b,
            Field::List(items) => !items.is_empty(),
        }
    }

    /// String form used for inline substitution. Raw, not yet escaped.
    pub fn as_text(&self) -> String {
        match self {
            Field::Scalar(s) => s.clone(),
            Field::Bool(b) => b.to_string(),
            Field::List(items) => items.join(", "),
        }
    }
}

/// Ordered map of camelCase attribute name to value for one loop item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemContext {
    fields: BTreeMap<String, Field>,
}

impl ItemContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_string(), Field::Scalar(value.into()));
        self
    }

    /// Optional scalar; `None` becomes an empty (falsy) scalar.
    pub fn opt(mut self, name: &str, value: Option<&str>) -> Self {
        let value = value.unwrap_or_default().to_string();
        self.fields.insert(name.to_string(), Field::Scalar(value));
        self
    }

    pub fn flag(mut self, name: &str, value: bool) -> Self {
        self.fields.insert(name.to_string(), Field::Bool(value));
        self
    }

    pub fn list(mut self, name: &str, values: &[String]) -> Self {
        self.fields
            .insert(name.to_string(), Field::List(values.to_vec()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Field)> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(Field::Scalar("x".into()).is_truthy());
        assert!(!Field::Scalar("  ".into()).is_truthy());
        assert!(Field::Bool(true).is_truthy());
        assert!(!Field::Bool(false).is_truthy());
        assert!(Field::List(vec!["a".into()]).is_truthy());
        assert!(!Field::List(vec![]).is_truthy());
    }

    #[test]
    fn builder_round_trip() {
        let ctx = ItemContext::new()
            .scalar("jobTitle", "Engineer")
            .opt("endDate", None)
            .flag("isCurrentJob", true)
            .list("responsibilities", &["a".to_string()]);

        assert_eq!(ctx.get("jobTitle"), Some(&Field::Scalar("Engineer".into())));
        assert_eq!(ctx.get("endDate"), Some(&Field::Scalar(String::new())));
        assert_eq!(ctx.get("isCurrentJob"), Some(&Field::Bool(true)));
        assert!(matches!(ctx.get("responsibilities"), Some(Field::List(v)) if v.len() == 1));
        assert_eq!(ctx.get("unknown"), None);
    }
}
