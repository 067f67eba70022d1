//! Authentication service.
//!
//! Registration, login and password changes go through the identity
//! store contracts rather than a repository, so anything implementing
//! those contracts can back authentication. Password hashing lives in
//! the domain Password value object.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{ApplicationUser, Password};
use crate::errors::{AppError, AppResult};
use crate::identity::{UserPasswordStore, UserSecurityStampStore};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub user_name: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, user_name: String, password: String) -> AppResult<ApplicationUser>;

    /// Login and return JWT token
    async fn login(&self, user_name: String, password: String) -> AppResult<TokenResponse>;

    /// Change a user's password, rotating the security stamp
    async fn change_password(
        &self,
        user_id: &str,
        current_password: String,
        new_password: String,
    ) -> AppResult<()>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate JWT token for a user (shared helper to avoid duplication)
fn generate_token(user: &ApplicationUser, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id.clone(),
        user_name: user.user_name.clone(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Verify JWT token and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService over an identity store.
pub struct Authenticator<S> {
    store: Arc<S>,
    config: Config,
}

impl<S> Authenticator<S>
where
    S: UserPasswordStore<ApplicationUser> + UserSecurityStampStore<ApplicationUser>,
{
    /// Create new auth service instance over an identity store
    pub fn new(store: Arc<S>, config: Config) -> Self {
        Self { store, config }
    }
}

#[async_trait]
impl<S> AuthService for Authenticator<S>
where
    S: UserPasswordStore<ApplicationUser> + UserSecurityStampStore<ApplicationUser>,
{
    async fn register(&self, user_name: String, password: String) -> AppResult<ApplicationUser> {
        // Name format is validated by the handler's ValidatedJson extractor
        if self.store.find_by_name(&user_name).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let hash = Password::new(&password)?.into_string();

        let mut user = ApplicationUser::new(user_name);
        self.store.set_password_hash(&mut user, Some(hash));
        self.store
            .set_security_stamp(&mut user, Uuid::new_v4().to_string());

        self.store.create(&user).await?;
        Ok(user)
    }

    async fn login(&self, user_name: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.store.find_by_name(&user_name).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid user names.
        // We use a dummy hash that will always fail verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let stored_hash = user_result
            .as_ref()
            .and_then(|user| self.store.password_hash(user));

        let (hash, user_has_password) = match &stored_hash {
            Some(hash) => (hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let password_valid = Password::from_hash(hash.to_string()).verify(&password);

        // Only succeed if the user exists with a password AND it matches
        if !user_has_password || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe to unwrap since a stored hash implies the user exists
        generate_token(user_result.as_ref().unwrap(), &self.config)
    }

    async fn change_password(
        &self,
        user_id: &str,
        current_password: String,
        new_password: String,
    ) -> AppResult<()> {
        let mut user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let current_hash = self
            .store
            .password_hash(&user)
            .ok_or(AppError::InvalidCredentials)?;
        if !Password::from_hash(current_hash).verify(&current_password) {
            return Err(AppError::InvalidCredentials);
        }

        let hash = Password::new(&new_password)?.into_string();
        self.store.set_password_hash(&mut user, Some(hash));

        // Rotate the stamp so anything issued against the old
        // credentials can be invalidated.
        self.store
            .set_security_stamp(&mut user, Uuid::new_v4().to_string());

        self.store.update(&user).await
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}
