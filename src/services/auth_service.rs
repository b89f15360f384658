use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

use crate::auth::{Claims, PasswordError, PasswordHasher, TokenError, TokenIssuer};
use crate::database::{NewUser, StoreError, User, UserRepository};

const MAX_EMAIL_LENGTH: usize = 255;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Field name -> messages
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Email and password as submitted to register or login.
///
/// Absent fields deserialize as empty strings and are reported by field
/// validation rather than as a malformed body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct Credentials {
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "secret-password", format = Password)]
    pub password: String,
}

/// A freshly signed access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: u64,
    pub claims: Claims,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(_) => AuthError::Validation(taken_email_error()),
            other => AuthError::Store(other),
        }
    }
}

fn taken_email_error() -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(
        "email".to_string(),
        vec!["The email has already been taken.".to_string()],
    );
    errors
}

/// Registration, login and listing over injected collaborators.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
    issuer: TokenIssuer,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: PasswordHasher, issuer: TokenIssuer) -> Self {
        Self { users, hasher, issuer }
    }

    /// Create a user with a hashed password. Does not issue a token.
    #[instrument(skip(self, input))]
    pub async fn register(&self, input: Credentials) -> Result<User, AuthError> {
        let email = normalize_email(&input.email);

        let mut errors = FieldErrors::new();
        if let Err(msg) = validate_email(&email) {
            errors.entry("email".to_string()).or_default().push(msg);
        }
        if let Err(msg) = validate_password(&input.password) {
            errors.entry("password".to_string()).or_default().push(msg);
        }
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            debug!("registration rejected, email exists: {}", email);
            return Err(AuthError::Validation(taken_email_error()));
        }

        let password_hash = self.hasher.hash(&input.password)?;
        let record = self.users.insert(NewUser { email, password_hash }).await?;

        info!(user_id = %record.id, email = %record.email, "user_registered");
        Ok(record.into())
    }

    /// Check credentials and sign a token for the user.
    #[instrument(skip(self, input))]
    pub async fn login(&self, input: Credentials) -> Result<IssuedToken, AuthError> {
        let email = normalize_email(&input.email);

        let Some(record) = self.users.find_by_email(&email).await? else {
            self.hasher.verify_dummy(&input.password);
            warn!("login failed for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(&input.password, &record.password_hash)? {
            warn!(user_id = %record.id, "login failed, wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let (access_token, claims) = self.issuer.issue(record.id)?;
        info!(user_id = %record.id, "user_logged_in");

        Ok(IssuedToken {
            access_token,
            expires_in: claims.lifetime_seconds(),
            claims,
        })
    }

    /// Verify a bearer token
    pub fn authenticate(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.issuer.verify(token)?)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        let records = self.users.list().await?;
        Ok(records.into_iter().map(User::from).collect())
    }

    pub async fn health_check(&self) -> Result<(), AuthError> {
        Ok(self.users.health_check().await?)
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("The email field is required.".to_string());
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "The email may not be greater than {} characters.",
            MAX_EMAIL_LENGTH
        ));
    }

    let invalid = || "The email must be a valid email address.".to_string();

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }

    Ok(())
}

fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("The password field is required.".to_string());
    }
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "The password must be at least {} characters.",
            MIN_PASSWORD_LENGTH
        ));
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(format!(
            "The password may not be greater than {} characters.",
            MAX_PASSWORD_LENGTH
        ));
    }
    Ok(())
}
