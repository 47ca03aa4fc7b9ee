//! Credential flow: register, login, and bearer token resolution.

use std::sync::Arc;

use tracing::{error, info, warn};

use shopfront_auth::jwt::{IssuedToken, JwtDecoder, JwtEncoder};
use shopfront_auth::password::PasswordHasher;
use shopfront_core::error::{AppError, ErrorKind};
use shopfront_core::result::AppResult;
use shopfront_database::store::UserStore;
use shopfront_entity::user::{CreateUser, PublicUser};

use crate::context::RequestContext;

/// Hashed when the service is built and verified against when the email is
/// unknown, so both login failure paths pay for one Argon2 verification.
const DUMMY_PASSWORD: &str = "shopfront-timing-equalizer";

/// Handles registration, login, and session token resolution.
pub struct AuthService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Session token encoder.
    encoder: Arc<JwtEncoder>,
    /// Session token decoder.
    decoder: Arc<JwtDecoder>,
    /// Hash of [`DUMMY_PASSWORD`] under the current work factor.
    dummy_hash: String,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("hasher", &self.hasher)
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl AuthService {
    /// Creates a new auth service.
    ///
    /// Hashes the timing-equalizer password up front; fails if hashing does.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> AppResult<Self> {
        let dummy_hash = hasher.hash_password(DUMMY_PASSWORD)?;

        Ok(Self {
            users,
            hasher,
            encoder,
            decoder,
            dummy_hash,
        })
    }

    /// Registers a new user and returns its public projection.
    ///
    /// The plaintext is hashed before anything is persisted; a hashing
    /// failure aborts the registration.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<PublicUser> {
        let email = email.trim();
        require_present("email", email)?;
        require_present("password", password)?;

        let password_hash = self.hasher.hash(password).await?;

        let data = CreateUser {
            email: email.to_string(),
            password_hash,
        };

        let user = self.users.create(&data).await.map_err(|e| {
            if e.kind == ErrorKind::Conflict {
                warn!("Registration rejected: email already registered");
            } else {
                error!(error = %e, "Failed to persist new user");
            }
            AppError::conflict("Could not create user")
        })?;

        info!(user_id = %user.id, "User registered");

        Ok(user.to_public())
    }

    /// Verifies credentials and mints a session token.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let email = email.trim();
        require_present("email", email)?;
        require_present("password", password)?;

        let Some(user) = self.users.find_by_email(email).await? else {
            self.hasher.verify(password, &self.dummy_hash).await?;
            warn!("Login failed: invalid credentials");
            return Err(AppError::invalid_credentials());
        };

        // An unreadable stored hash counts as a mismatch.
        let valid = match self.hasher.verify(password, &user.password_hash).await {
            Ok(valid) => valid,
            Err(e) => {
                error!(user_id = %user.id, error = %e, "Password verification failed");
                false
            }
        };

        if !valid {
            warn!(user_id = %user.id, "Login failed: invalid credentials");
            return Err(AppError::invalid_credentials());
        }

        let issued = self.encoder.issue_session(user.id)?;

        info!(user_id = %user.id, expires_at = %issued.expires_at, "Session token issued");

        Ok(issued)
    }

    /// Resolves a bearer token into a request context.
    pub fn authenticate(&self, token: &str) -> AppResult<RequestContext> {
        let claims = self.decoder.validate(token)?;
        Ok(RequestContext::new(claims.user_id()))
    }

    /// Loads the user a request context refers to.
    pub async fn current_user(&self, ctx: &RequestContext) -> AppResult<PublicUser> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::authentication("Invalid or expired token"))
    }
}

fn require_present(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Duration;
    use uuid::Uuid;

    use super::*;
    use shopfront_database::memory::MemoryStore;
    use shopfront_entity::user::User;

    const SECRET: &[u8] = b"service-test-secret";

    fn service_with(users: Arc<dyn UserStore>) -> AuthService {
        AuthService::new(
            users,
            Arc::new(PasswordHasher::with_params(8, 1, 1).unwrap()),
            Arc::new(JwtEncoder::from_secret(SECRET, Duration::days(7))),
            Arc::new(JwtDecoder::from_secret(SECRET)),
        )
        .unwrap()
    }

    fn service() -> (AuthService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (service_with(Arc::clone(&store) as Arc<dyn UserStore>), store)
    }

    /// Store that fails every call.
    struct BrokenStore;

    #[async_trait]
    impl UserStore for BrokenStore {
        async fn create(&self, _data: &CreateUser) -> AppResult<User> {
            Err(AppError::database("connection reset"))
        }

        async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
            Err(AppError::database("connection reset"))
        }

        async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<User>> {
            Err(AppError::database("connection reset"))
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let (service, store) = service();
        let user = service.register("a@b.com", "secret123").await.unwrap();
        assert_eq!(user.email, "a@b.com");

        let stored = store.find_by_email("a@b.com").await.unwrap().unwrap();
        assert_eq!(stored.id, user.id);
        assert_ne!(stored.password_hash, "secret123");
        assert!(stored.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let (service, _) = service();
        let err = service.register("  ", "secret123").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let err = service.register("a@b.com", "").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_conflict() {
        let (service, _) = service();
        service.register("a@b.com", "secret123").await.unwrap();
        let err = service.register("a@b.com", "other").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "Could not create user");
    }

    #[tokio::test]
    async fn test_store_failure_on_register_is_conflict() {
        let service = service_with(Arc::new(BrokenStore));
        let err = service.register("a@b.com", "secret123").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_login_token_carries_user_id() {
        let (service, _) = service();
        let user = service.register("a@b.com", "secret123").await.unwrap();

        let issued = service.login("a@b.com", "secret123").await.unwrap();
        assert!(!issued.token.is_empty());

        let ctx = service.authenticate(&issued.token).unwrap();
        assert_eq!(ctx.user_id, user.id);

        let me = service.current_user(&ctx).await.unwrap();
        assert_eq!(me, user);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (service, _) = service();
        service.register("a@b.com", "secret123").await.unwrap();

        let wrong_password = service.login("a@b.com", "wrong").await.unwrap_err();
        let unknown_email = service.login("nobody@b.com", "secret123").await.unwrap_err();

        assert_eq!(wrong_password.kind, ErrorKind::InvalidCredentials);
        assert_eq!(wrong_password.kind, unknown_email.kind);
        assert_eq!(wrong_password.message, unknown_email.message);
    }

    #[tokio::test]
    async fn test_unreadable_stored_hash_is_invalid_credentials() {
        let store = Arc::new(MemoryStore::new());
        store
            .create(&CreateUser {
                email: "legacy@b.com".to_string(),
                password_hash: "plaintext-by-mistake".to_string(),
            })
            .await
            .unwrap();
        let service = service_with(store);

        let err = service
            .login("legacy@b.com", "plaintext-by-mistake")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_store_failure_on_login_is_not_credentials() {
        let service = service_with(Arc::new(BrokenStore));
        let err = service.login("a@b.com", "secret123").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_garbage() {
        let (service, _) = service();
        let err = service.authenticate("garbage").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_current_user_for_unknown_subject() {
        let (service, _) = service();
        let ctx = RequestContext::new(Uuid::new_v4());
        let err = service.current_user(&ctx).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_dummy_hash_ready_before_first_login() {
        let (service, _) = service();

        assert!(service.dummy_hash.starts_with("$argon2id$v=19$m=8,t=1,p=1$"));
        assert!(
            service
                .hasher
                .verify(DUMMY_PASSWORD, &service.dummy_hash)
                .await
                .unwrap()
        );
    }
}
