use serde::{Deserialize, Serialize};

use crate::db::collection::Record;

/// Storage key of the ideas collection.
pub const IDEAS_KEY: &str = "ideas";
/// Storage key of the applications collection.
pub const APPLICATIONS_KEY: &str = "applications";
/// Storage key of the users collection.
pub const USERS_KEY: &str = "users";
/// Storage key of the session pointer.
pub const CURRENT_USER_ID_KEY: &str = "currentUserId";
/// Storage key of the idea-detail navigation pointer.
pub const CURRENT_IDEA_ID_KEY: &str = "currentIdeaId";

/// Categories offered by the idea submission form.
///
/// The store keeps `category` as free text; this list only drives the form.
pub const CATEGORIES: &[&str] = &[
    "Web App",
    "Mobile App",
    "Data Science",
    "AI",
    "Machine Learning",
    "Blockchain",
    "IoT",
    "Game Development",
    "Virtual Reality",
    "Augmented Reality",
    "Other",
];

/// Time frames offered by the idea submission form.
pub const TIME_FRAMES: &[&str] = &[
    "Less than 1 month",
    "1-3 months",
    "3-6 months",
    "6-12 months",
    "More than 12 months",
];

/// A posted collaboration opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    /// One or two sentences, shown on cards.
    pub short_description: String,
    pub long_description: String,
    /// Skill tags the idea is looking for, in display order.
    pub professions: Vec<String>,
    pub category: String,
    pub time_required: String,
    pub is_paid: bool,
    pub members_needed: i64,
    /// Owning user. Not checked against the users collection.
    pub user_id: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

/// A request to join an idea's team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub idea_id: String,
    pub name: String,
    pub email: String,
    pub cover_letter: String,
    /// Reference to the uploaded CV. In the browser this may be a transient
    /// object URL that does not outlive the page.
    pub cv_url: String,
    /// The applicant.
    pub user_id: String,
    pub created_at: String,
}

/// An account.
///
/// The password is stored and compared in plain text. This is a known
/// weakness kept for compatibility with existing stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Login identifier.
    pub email: String,
    pub password: String,
}

impl Record for Idea {
    const KEY: &'static str = IDEAS_KEY;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Application {
    const KEY: &'static str = APPLICATIONS_KEY;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for User {
    const KEY: &'static str = USERS_KEY;

    fn id(&self) -> &str {
        &self.id
    }
}
