//! Recursive plain-text formatting for resume sections.

/// A uniformly-formattable view over one resume section.
///
/// `cat` renders these trees: text passes through, list elements are rendered
/// recursively and joined by blank lines, and records render as `key: value`
/// lines with nested structures indented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    /// A plain text leaf.
    Text(String),
    /// An ordered sequence of values.
    List(Vec<SectionValue>),
    /// Ordered `(key, value)` fields.
    Record(Vec<(String, SectionValue)>),
}

impl SectionValue {
    /// Text leaf from anything stringy.
    pub fn text(raw: impl Into<String>) -> Self {
        Self::Text(raw.into())
    }

    /// List of text leaves.
    pub fn text_list(items: &[String]) -> Self {
        Self::List(items.iter().map(|item| Self::text(item)).collect())
    }

    /// Renders the value as plain text.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items
                .iter()
                .map(Self::render)
                .collect::<Vec<_>>()
                .join("\n\n"),
            Self::Record(fields) => fields
                .iter()
                .map(|(key, value)| render_field(key, value))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn render_field(key: &str, value: &SectionValue) -> String {
    match value {
        SectionValue::Text(text) => format!("{key}: {text}"),
        SectionValue::List(items) => {
            let rendered = items
                .iter()
                .map(|item| match item {
                    SectionValue::Text(text) => format!("  - {text}"),
                    nested => indent(&nested.render(), "  "),
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("{key}:\n{rendered}")
        }
        SectionValue::Record(_) => format!("{key}:\n{}", indent(&value.render(), "  ")),
    }
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_passes_through() {
        assert_eq!(SectionValue::text("hello").render(), "hello");
    }

    #[test]
    fn list_elements_join_with_blank_lines() {
        let value = SectionValue::List(vec![SectionValue::text("a"), SectionValue::text("b")]);
        assert_eq!(value.render(), "a\n\nb");
    }

    #[test]
    fn record_renders_key_value_lines() {
        let value = SectionValue::Record(vec![
            ("name".to_string(), SectionValue::text("Ada")),
            ("year".to_string(), SectionValue::text("1842")),
        ]);
        assert_eq!(value.render(), "name: Ada\nyear: 1842");
    }

    #[test]
    fn nested_record_is_indented() {
        let value = SectionValue::Record(vec![(
            "contact".to_string(),
            SectionValue::Record(vec![(
                "email".to_string(),
                SectionValue::text("ada@example.com"),
            )]),
        )]);
        assert_eq!(value.render(), "contact:\n  email: ada@example.com");
    }

    #[test]
    fn list_field_renders_dash_items() {
        let value = SectionValue::Record(vec![(
            "soft".to_string(),
            SectionValue::text_list(&["Teamwork".to_string(), "Communication".to_string()]),
        )]);
        assert_eq!(value.render(), "soft:\n  - Teamwork\n  - Communication");
    }
}
