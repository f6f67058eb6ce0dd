use crate::auth::models::{AuthState, Session};
use crate::db::models::User;
use crate::db::session_repository::SessionRepository;
use crate::db::user_repository::UserRepository;
use crate::error::{AppError, FieldErrors};
use crate::utils::generate_id;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login, signup and logout over the users collection and the session
/// pointer. Every transition persists the pointer before returning.
pub struct AuthService<'a, S> {
    store: &'a S,
}

impl<'a, S> AuthService<'a, S>
where
    S: UserRepository + SessionRepository,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Authenticate with an exact email and password match.
    ///
    /// Unknown email and wrong password fail with the same error.
    pub fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let user = self
            .store
            .find_user_by_email(email)?
            .filter(|user| user.password == password);

        let Some(user) = user else {
            tracing::warn!("Failed login attempt for '{}'", email);
            return Err(AppError::Auth(INVALID_CREDENTIALS.into()));
        };

        self.store.set_current_user_id(Some(user.id.clone()))?;
        tracing::info!("User '{}' logged in", user.id);
        Ok(Session::from(&user))
    }

    /// Create an account and log it in.
    ///
    /// A blank name fails validation before the email is checked. Fails with
    /// `Conflict` if the email is taken.
    pub fn signup(&self, name: &str, email: &str, password: &str) -> Result<Session, AppError> {
        if name.trim().is_empty() {
            let mut errors = FieldErrors::new();
            errors.add("name", "Name is required");
            return Err(AppError::Validation(errors));
        }

        if self.store.find_user_by_email(email)?.is_some() {
            tracing::warn!("Signup rejected, '{}' already registered", email);
            return Err(AppError::Conflict(
                "An account with this email already exists".into(),
            ));
        }

        let user = User {
            id: generate_id(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let session = Session::from(&user);

        self.store.save_user(user)?;
        self.store.set_current_user_id(Some(session.user_id.clone()))?;
        tracing::info!("User '{}' signed up", session.user_id);
        Ok(session)
    }

    /// Clear the session pointer, whatever its current value.
    pub fn logout(&self) -> Result<(), AppError> {
        self.store.set_current_user_id(None)?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Resolve the session pointer. An empty pointer or one naming a missing
    /// user yields `None`.
    pub fn current_user(&self) -> Result<Option<User>, AppError> {
        match self.store.current_user_id()?.filter(|id| !id.is_empty()) {
            Some(user_id) => self.store.find_user(&user_id),
            None => Ok(None),
        }
    }

    /// Rebuild the session from the persisted pointer, e.g. at page load.
    pub fn restore(&self) -> Result<AuthState, AppError> {
        Ok(self.current_user()?.as_ref().map(Session::from).into())
    }
}
