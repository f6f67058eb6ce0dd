use crate::auth::models::Session;
use crate::db::application_repository::ApplicationRepository;
use crate::db::models::Application;
use crate::error::AppError;
use crate::models::application_draft::ApplicationDraft;

/// Validate and store an application to `idea_id` for the logged-in user.
///
/// The idea is not checked for existence.
pub fn submit_application<S: ApplicationRepository>(
    store: &S,
    session: Option<&Session>,
    idea_id: &str,
    draft: ApplicationDraft,
) -> Result<Application, AppError> {
    draft.validate()?;

    let session = session.ok_or_else(|| AppError::Auth("Login required to apply".into()))?;

    let application = draft.into_application(idea_id, &session.user_id);
    tracing::info!(
        "User '{}' applied to idea '{}' ({})",
        session.user_id,
        idea_id,
        application.id
    );
    store.save_application(application.clone())?;
    Ok(application)
}

/// Applications received by an idea, in submission order.
pub fn applications_for_idea<S: ApplicationRepository>(
    store: &S,
    idea_id: &str,
) -> Result<Vec<Application>, AppError> {
    store.applications_by_idea(idea_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::application_repository::MockApplicationRepository;

    fn session() -> Session {
        Session {
            user_id: "u2".to_string(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
        }
    }

    fn complete_draft() -> ApplicationDraft {
        ApplicationDraft {
            cover_letter: "Count me in".to_string(),
            cv_url: Some("blob:cv".to_string()),
            ..ApplicationDraft::for_session(&session())
        }
    }

    #[test]
    fn test_submit_application() {
        let mut store = MockApplicationRepository::new();
        store
            .expect_save_application()
            .withf(|a| a.idea_id == "x" && a.user_id == "u2" && a.name == "Grace")
            .times(1)
            .returning(|_| Ok(()));

        let application =
            submit_application(&store, Some(&session()), "x", complete_draft()).unwrap();
        assert_eq!(application.cover_letter, "Count me in");
    }

    #[test]
    fn test_anonymous_application_rejected() {
        let mut store = MockApplicationRepository::new();
        store.expect_save_application().never();

        let err = submit_application(&store, None, "x", complete_draft()).unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_missing_cv_rejected() {
        let mut store = MockApplicationRepository::new();
        store.expect_save_application().never();

        let draft = ApplicationDraft {
            cv_url: None,
            ..complete_draft()
        };
        let err = submit_application(&store, Some(&session()), "x", draft).unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.contains("cvFile"));
    }
}
