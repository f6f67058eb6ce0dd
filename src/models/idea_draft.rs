use serde::{Deserialize, Serialize};

use crate::db::models::Idea;
use crate::error::{AppError, FieldErrors};
use crate::utils::{generate_id, now_timestamp};

/// The idea submission form before it becomes an [`Idea`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaDraft {
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub category: String,
    pub time_required: String,
    pub is_paid: bool,
    pub members_needed: i64,
    pub professions: Vec<String>,
}

impl Default for IdeaDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            category: String::new(),
            time_required: String::new(),
            is_paid: false,
            members_needed: 1,
            professions: Vec::new(),
        }
    }
}

impl IdeaDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trimmed profession tag. Blank and duplicate tags are ignored.
    ///
    /// Returns `true` if the tag was added.
    pub fn add_profession(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.professions.iter().any(|p| p == tag) {
            return false;
        }
        self.professions.push(tag.to_string());
        true
    }

    pub fn remove_profession(&mut self, index: usize) -> Option<String> {
        (index < self.professions.len()).then(|| self.professions.remove(index))
    }

    /// Check the form rules, collecting one message per failing field.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        let required = [
            ("title", &self.title, "Title is required"),
            (
                "shortDescription",
                &self.short_description,
                "Short description is required",
            ),
            (
                "longDescription",
                &self.long_description,
                "Long description is required",
            ),
            ("category", &self.category, "Category is required"),
            ("timeRequired", &self.time_required, "Time required is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.add(field, message);
            }
        }

        if self.professions.is_empty() {
            errors.add("professions", "At least one profession is required");
        }
        if self.members_needed < 1 {
            errors.add("membersNeeded", "At least one member is required");
        }

        errors.into_result()
    }

    /// Turn the draft into a new idea owned by `user_id`.
    pub fn into_idea(self, user_id: &str) -> Idea {
        Idea {
            id: generate_id(),
            title: self.title,
            short_description: self.short_description,
            long_description: self.long_description,
            professions: self.professions,
            category: self.category,
            time_required: self.time_required,
            is_paid: self.is_paid,
            members_needed: self.members_needed,
            user_id: user_id.to_string(),
            created_at: now_timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> IdeaDraft {
        let mut draft = IdeaDraft {
            title: "Open data map".to_string(),
            short_description: "Map city datasets".to_string(),
            long_description: "A longer pitch".to_string(),
            category: "Data Science".to_string(),
            time_required: "1-3 months".to_string(),
            is_paid: false,
            members_needed: 2,
            professions: Vec::new(),
        };
        draft.add_profession("Data Engineer");
        draft
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(complete_draft().validate().is_ok());
    }

    #[test]
    fn test_blank_draft_reports_every_field() {
        let mut draft = IdeaDraft::new();
        draft.title = "   ".to_string();
        draft.members_needed = 0;

        let Err(AppError::Validation(errors)) = draft.validate() else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(
            errors.get("professions"),
            Some("At least one profession is required")
        );
        assert!(errors.contains("membersNeeded"));
    }

    #[test]
    fn test_add_profession_trims_and_dedups() {
        let mut draft = IdeaDraft::new();
        assert!(draft.add_profession("  Designer "));
        assert!(!draft.add_profession("Designer"));
        assert!(!draft.add_profession("   "));
        assert!(draft.add_profession("Developer"));
        assert_eq!(draft.professions, vec!["Designer", "Developer"]);

        assert_eq!(draft.remove_profession(0).as_deref(), Some("Designer"));
        assert_eq!(draft.remove_profession(5), None);
        assert_eq!(draft.professions, vec!["Developer"]);
    }

    #[test]
    fn test_into_idea() {
        let idea = complete_draft().into_idea("u1");
        assert_eq!(idea.user_id, "u1");
        assert_eq!(idea.title, "Open data map");
        assert_eq!(idea.professions, vec!["Data Engineer"]);
        assert!(!idea.id.is_empty());
        assert!(!idea.created_at.is_empty());
    }
}
