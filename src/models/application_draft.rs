use serde::{Deserialize, Serialize};

use crate::auth::models::Session;
use crate::db::models::Application;
use crate::error::{AppError, FieldErrors};
use crate::utils::{generate_id, now_timestamp};

/// The application form before it becomes an [`Application`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub cover_letter: String,
    /// Reference to the attached CV, `None` until a file is picked.
    pub cv_url: Option<String>,
}

impl ApplicationDraft {
    /// A draft prefilled with the applicant's name and email.
    pub fn for_session(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            email: session.email.clone(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
        }
        if self.cover_letter.trim().is_empty() {
            errors.add("coverLetter", "Cover letter is required");
        }
        if self.cv_url.as_deref().map_or(true, str::is_empty) {
            errors.add("cvFile", "CV file is required");
        }

        errors.into_result()
    }

    pub fn into_application(self, idea_id: &str, user_id: &str) -> Application {
        Application {
            id: generate_id(),
            idea_id: idea_id.to_string(),
            name: self.name,
            email: self.email,
            cover_letter: self.cover_letter,
            cv_url: self.cv_url.unwrap_or_default(),
            user_id: user_id.to_string(),
            created_at: now_timestamp(),
        }
    }
}
