use serde::{Deserialize, Serialize};

use crate::auth::models::Session;
use crate::db::application_repository::ApplicationRepository;
use crate::db::models::{Application, Idea};
use crate::db::repository::IdeaRepository;
use crate::error::AppError;

/// Everything the dashboard shows for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Ideas the user posted.
    pub my_ideas: Vec<Idea>,
    /// Applications the user sent to other ideas.
    pub sent_applications: Vec<Application>,
    /// Applications received for the user's ideas, grouped by idea in
    /// idea order.
    pub received_applications: Vec<Application>,
}

pub fn load_dashboard<S>(store: &S, session: &Session) -> Result<Dashboard, AppError>
where
    S: IdeaRepository + ApplicationRepository,
{
    let my_ideas = store.ideas_by_user(&session.user_id)?;
    let sent_applications = store.applications_by_user(&session.user_id)?;

    let mut received_applications = Vec::new();
    for idea in &my_ideas {
        received_applications.extend(store.applications_by_idea(&idea.id)?);
    }

    tracing::debug!(
        "Dashboard for '{}': {} idea(s), {} sent, {} received",
        session.user_id,
        my_ideas.len(),
        sent_applications.len(),
        received_applications.len()
    );

    Ok(Dashboard {
        my_ideas,
        sent_applications,
        received_applications,
    })
}
