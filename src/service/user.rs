//! User service.

use std::sync::Arc;

use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;

use super::{ServiceError, ServiceResult, hash_password};
use crate::db::utils::{current_timestamp, generate_entity_id};
use crate::db::{Database, User, UserRepository, UserRole};

/// Shortest accepted password, in characters.
const MIN_PASSWORD_LEN: usize = 6;

/// Client-supplied registration fields.
#[derive(Clone, Deserialize, ToSchema)]
pub struct UserInput {
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Plaintext; only its Argon2 hash is stored.
    #[schema(example = "correct horse")]
    pub password: String,
    /// `user` or `admin`; defaults to `user`.
    #[schema(example = "user")]
    #[serde(default)]
    pub role: Option<String>,
}

impl std::fmt::Debug for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl UserInput {
    fn validate(&self) -> ServiceResult<UserRole> {
        if !is_valid_email(&self.email) {
            return Err(ServiceError::validation(format!(
                "invalid email address '{}'",
                self.email
            )));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ServiceError::validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        match self.role.as_deref() {
            None => Ok(UserRole::default()),
            Some(role) => role.parse::<UserRole>().map_err(ServiceError::validation),
        }
    }
}

/// `local@domain.tld` with no whitespace and a dot inside the domain.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Business operations on users.
pub struct UserService<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for UserService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> UserService<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    /// Register a user, storing an Argon2 hash of the supplied password.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: UserInput) -> ServiceResult<User> {
        let role = input.validate()?;
        let password_hash = hash_password(&input.password)?;
        let now = current_timestamp();

        let user = User {
            id: generate_entity_id(),
            email: input.email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        };

        self.db.users().create(&user).await?;
        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> ServiceResult<User> {
        Ok(self.db.users().get_by_id(id).await?)
    }
}
