use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::ValidationErrors;

/// Post identifiers are assigned by the store.
pub type PostId = i64;

/// Longest title accepted, matching the `posts.title` column width.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Post entity - a titled, timestamped record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Replace the title with a validated one and bump `updated_at`.
    pub fn retitle(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.updated_at = Utc::now();
    }
}

/// A validated post title.
///
/// Only [`PostDraft::validate`] builds one, so every stored title
/// has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
}

impl PostDraft {
    /// Validate raw input. Surrounding whitespace is trimmed before the
    /// checks and the trimmed value is kept.
    pub fn validate(title: Option<&str>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let title = title.map(str::trim).unwrap_or_default();

        if title.is_empty() {
            errors.add("title", "The title field is required.");
        } else if title.chars().count() > MAX_TITLE_LENGTH {
            errors.add(
                "title",
                format!("The title may not be greater than {MAX_TITLE_LENGTH} characters."),
            );
        }

        errors.into_result(Self {
            title: title.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn into_title(self) -> String {
        self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_title() {
        let draft = PostDraft::validate(Some("El post de prueba")).unwrap();
        assert_eq!(draft.title(), "El post de prueba");
    }

    #[test]
    fn test_validate_trims_whitespace() {
        let draft = PostDraft::validate(Some("  nuevo \n")).unwrap();
        assert_eq!(draft.into_title(), "nuevo");
    }

    #[test]
    fn test_validate_rejects_missing_and_blank() {
        for input in [None, Some(""), Some("   ")] {
            let errors = PostDraft::validate(input).unwrap_err();
            assert_eq!(errors.messages("title"), ["The title field is required."]);
        }
    }

    #[test]
    fn test_validate_rejects_long_title() {
        let at_limit = "a".repeat(MAX_TITLE_LENGTH);
        assert!(PostDraft::validate(Some(&at_limit)).is_ok());

        let too_long = "ñ".repeat(MAX_TITLE_LENGTH + 1);
        let errors = PostDraft::validate(Some(&too_long)).unwrap_err();
        assert!(errors.has("title"));
    }

    #[test]
    fn test_retitle_bumps_updated_at() {
        let created = Utc::now() - chrono::TimeDelta::minutes(5);
        let mut post = Post {
            id: 1,
            title: "old".to_string(),
            created_at: created,
            updated_at: created,
        };

        post.retitle(PostDraft::validate(Some("new")).unwrap());

        assert_eq!(post.title, "new");
        assert_eq!(post.created_at, created);
        assert!(post.updated_at > created);
    }
}
