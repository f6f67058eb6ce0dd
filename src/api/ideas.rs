use crate::auth::models::Session;
use crate::db::models::Idea;
use crate::db::repository::IdeaRepository;
use crate::db::session_repository::SessionRepository;
use crate::error::AppError;
use crate::models::idea_draft::IdeaDraft;

/// Validate and store a new idea for the logged-in user.
///
/// Validation runs before the session check, so an anonymous user with an
/// incomplete form sees the field errors first.
pub fn submit_idea<S: IdeaRepository>(
    store: &S,
    session: Option<&Session>,
    draft: IdeaDraft,
) -> Result<Idea, AppError> {
    draft.validate()?;

    let session = session.ok_or_else(|| AppError::Auth("Login required to post an idea".into()))?;

    let idea = draft.into_idea(&session.user_id);
    tracing::info!("User '{}' posted idea '{}'", session.user_id, idea.id);
    store.save_idea(idea.clone())?;
    Ok(idea)
}

/// Remember `idea_id` as the idea the detail view should display.
pub fn open_idea<S: SessionRepository>(store: &S, idea_id: &str) -> Result<(), AppError> {
    store.set_current_idea_id(Some(idea_id.to_string()))
}

/// The idea selected by [`open_idea`], if it still exists.
pub fn current_idea<S>(store: &S) -> Result<Option<Idea>, AppError>
where
    S: IdeaRepository + SessionRepository,
{
    match store.current_idea_id()? {
        Some(idea_id) => store.find_idea(&idea_id),
        None => Ok(None),
    }
}

/// Look up an idea or fail with [`AppError::NotFound`].
pub fn get_idea<S: IdeaRepository>(store: &S, idea_id: &str) -> Result<Idea, AppError> {
    store
        .find_idea(idea_id)?
        .ok_or_else(|| AppError::NotFound(format!("Idea '{}' not found", idea_id)))
}
