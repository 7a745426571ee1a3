//! Field-keyed validation errors.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Validation failures grouped by the offending input field.
///
/// Fields are kept in sorted order so error bodies are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether any message was recorded for `field`.
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages recorded for `field`, empty if none.
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ok(value) when nothing was recorded, Err(self) otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.fields
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_into_result_is_ok() {
        let errors = ValidationErrors::new();
        assert_eq!(errors.into_result(7).unwrap(), 7);
    }

    #[test]
    fn test_messages_grouped_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "first");
        errors.add("title", "second");
        errors.add("body", "third");

        assert!(errors.has("title"));
        assert_eq!(errors.messages("title"), ["first", "second"]);
        assert!(errors.messages("missing").is_empty());
        assert_eq!(errors.to_string(), "body: third; title: first; title: second");
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "required");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "title": ["required"] }));
    }
}
