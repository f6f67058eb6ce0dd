use serde::{Deserialize, Serialize};

use crate::db::models::Idea;

/// Browse criteria for the idea listing. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaQuery {
    /// Case-insensitive substring over title, short description and
    /// professions.
    #[serde(default)]
    pub term: String,
    /// Exact category, empty for all categories.
    #[serde(default)]
    pub category: String,
}

impl IdeaQuery {
    pub fn new(term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            category: category.into(),
        }
    }

    pub fn matches(&self, idea: &Idea) -> bool {
        self.matches_term(idea) && self.matches_category(idea)
    }

    fn matches_term(&self, idea: &Idea) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let term = self.term.to_lowercase();
        idea.title.to_lowercase().contains(&term)
            || idea.short_description.to_lowercase().contains(&term)
            || idea
                .professions
                .iter()
                .any(|profession| profession.to_lowercase().contains(&term))
    }

    fn matches_category(&self, idea: &Idea) -> bool {
        self.category.is_empty() || idea.category == self.category
    }
}

/// Ideas matching `query`, in their original order.
pub fn filter_ideas(ideas: &[Idea], query: &IdeaQuery) -> Vec<Idea> {
    ideas
        .iter()
        .filter(|idea| query.matches(idea))
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order, for the category picker.
pub fn categories(ideas: &[Idea]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for idea in ideas {
        if !seen.contains(&idea.category) {
            seen.push(idea.category.clone());
        }
    }
    seen
}
