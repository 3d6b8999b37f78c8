//! Password hashing and bearer tokens.
//!
//! Passwords are stored as bcrypt hashes. Tokens are HMAC-signed JWTs whose
//! subject is the username.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use common::{LoginRequest, TokenResponse, UserResponse};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use model::entities::{prelude::*, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{CrudError, Result};
use crate::users;

/// Message returned for any failed login.
pub const INVALID_LOGIN: &str = "Incorrect username or password";
/// Message returned for any rejected token.
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

pub const TOKEN_TYPE: &str = "bearer";

/// Cost range bcrypt accepts.
const HASH_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// JWT claims carried by access tokens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username of the principal
    pub sub: String,
    /// Expiry as seconds since the epoch
    pub exp: usize,
    pub iat: usize,
}

/// Secrets and cost parameters for credential handling.
#[derive(Clone)]
pub struct AuthConfig {
    secret_key: String,
    algorithm: Algorithm,
    token_ttl: Duration,
    hash_cost: u32,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_key", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("token_ttl", &self.token_ttl)
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}

impl AuthConfig {
    /// Builds a config from its textual settings. Only the HMAC family
    /// (HS256, HS384, HS512) is accepted since tokens are signed with a
    /// shared secret.
    pub fn new(
        secret_key: impl Into<String>,
        algorithm: &str,
        expire_minutes: i64,
        hash_cost: u32,
    ) -> Result<Self> {
        let secret_key = secret_key.into();
        if secret_key.is_empty() {
            return Err(CrudError::Validation("Secret key must not be empty".to_string()));
        }

        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| CrudError::Validation(format!("Unknown algorithm: {}", algorithm)))?;
        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(CrudError::Validation(format!(
                "Unsupported algorithm {:?}, expected HS256, HS384 or HS512",
                algorithm
            )));
        }

        if expire_minutes <= 0 {
            return Err(CrudError::Validation(
                "Token lifetime must be positive".to_string(),
            ));
        }

        if !HASH_COST_RANGE.contains(&hash_cost) {
            return Err(CrudError::Validation(format!(
                "Password hash cost must be between {} and {}",
                HASH_COST_RANGE.start(),
                HASH_COST_RANGE.end()
            )));
        }

        Ok(Self {
            secret_key,
            algorithm,
            token_ttl: Duration::minutes(expire_minutes),
            hash_cost,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn hash_password(&self, plain: &str) -> Result<String> {
        Ok(bcrypt::hash(plain, self.hash_cost)?)
    }

    /// Signs a token for `username` that expires after the configured TTL.
    pub fn issue_token(&self, username: &str) -> Result<(String, DateTime<Utc>)> {
        let now = Utc::now();
        let expires_at = now + self.token_ttl;
        let claims = Claims {
            sub: username.to_string(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        let token = self.sign(&claims)?;
        Ok((token, expires_at))
    }

    pub fn sign(&self, claims: &Claims) -> Result<String> {
        Ok(encode(
            &Header::new(self.algorithm),
            claims,
            &EncodingKey::from_secret(self.secret_key.as_bytes()),
        )?)
    }

    /// Checks signature and expiry. Every failure collapses into
    /// [`INVALID_CREDENTIALS`].
    pub fn decode_token(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(self.algorithm);
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_key.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|err| {
            debug!(error = %err, "Token rejected");
            CrudError::Unauthorized(INVALID_CREDENTIALS.to_string())
        })
    }
}

/// Compares a plaintext password with a stored hash. A malformed hash
/// counts as a mismatch.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    match bcrypt::verify(plain, hashed) {
        Ok(matches) => matches,
        Err(err) => {
            warn!(error = %err, "Stored password hash could not be verified");
            false
        }
    }
}

/// Looks up the user and checks the password. Unknown usernames and wrong
/// passwords fail identically.
#[instrument(skip(db, password))]
pub async fn authenticate(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<user::Model> {
    trace!("Authenticating user");
    let found = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?;

    match found {
        Some(user) if verify_password(password, &user.hashed_password) => Ok(user),
        Some(_) => {
            warn!("Password mismatch");
            Err(CrudError::Unauthorized(INVALID_LOGIN.to_string()))
        }
        None => {
            warn!("Unknown username");
            Err(CrudError::Unauthorized(INVALID_LOGIN.to_string()))
        }
    }
}

/// Authenticates the credentials and issues an access token.
#[instrument(skip(db, auth, credentials), fields(username = %credentials.username))]
pub async fn login(
    db: &DatabaseConnection,
    auth: &AuthConfig,
    credentials: &LoginRequest,
) -> Result<TokenResponse> {
    let user = authenticate(db, &credentials.username, &credentials.password).await?;
    let (access_token, exp) = auth.issue_token(&user.username)?;
    info!(user_id = user.id, %exp, "Issued access token");
    Ok(TokenResponse {
        access_token,
        exp,
        token_type: TOKEN_TYPE.to_string(),
        username: user.username,
    })
}

/// Resolves the principal behind a bearer token. Tokens for users that no
/// longer exist are rejected like invalid ones.
#[instrument(skip_all)]
pub async fn current_user(
    db: &DatabaseConnection,
    auth: &AuthConfig,
    token: &str,
) -> Result<UserResponse> {
    let claims = auth.decode_token(token)?;
    match users::get_user_by_username(db, &claims.sub).await {
        Ok(user) => Ok(user),
        Err(CrudError::NotFound(_)) => {
            warn!(subject = %claims.sub, "Token subject no longer exists");
            Err(CrudError::Unauthorized(INVALID_CREDENTIALS.to_string()))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{setup_db, test_auth};
    use common::UserCreate;

    #[test]
    fn test_rejects_asymmetric_and_unknown_algorithms() {
        assert!(AuthConfig::new("secret", "HS512", 60, 4).is_ok());
        assert!(matches!(
            AuthConfig::new("secret", "RS256", 60, 4),
            Err(CrudError::Validation(_))
        ));
        assert!(AuthConfig::new("secret", "ROT13", 60, 4).is_err());
        assert!(AuthConfig::new("", "HS256", 60, 4).is_err());
        assert!(AuthConfig::new("secret", "HS256", 60, 99).is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let auth = AuthConfig::new("super-secret-value", "HS256", 60, 4).unwrap();
        assert!(!format!("{:?}", auth).contains("super-secret-value"));
    }

    #[test]
    fn test_issued_token_round_trips() {
        let auth = test_auth();
        let (token, exp) = auth.issue_token("diver1").unwrap();
        let claims = auth.decode_token(&token).unwrap();
        assert_eq!(claims.sub, "diver1");
        assert_eq!(claims.exp, exp.timestamp() as usize);
    }

    #[test]
    fn test_expired_token_rejected() {
        let auth = test_auth();
        let past = Utc::now() - Duration::hours(2);
        let token = auth
            .sign(&Claims {
                sub: "diver1".to_string(),
                exp: past.timestamp() as usize,
                iat: (past - Duration::hours(1)).timestamp() as usize,
            })
            .unwrap();

        match auth.decode_token(&token) {
            Err(CrudError::Unauthorized(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
            other => panic!("expected unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let other = AuthConfig::new("another-secret", "HS256", 60, 4).unwrap();
        let (token, _) = other.issue_token("diver1").unwrap();
        assert!(test_auth().decode_token(&token).is_err());
        assert!(test_auth().decode_token("not.a.token").is_err());
    }

    #[test]
    fn test_password_hash_verifies() {
        let auth = test_auth();
        let hashed = auth.hash_password("reef").unwrap();
        assert_ne!(hashed, "reef");
        assert!(verify_password("reef", &hashed));
        assert!(!verify_password("wreck", &hashed));
        assert!(!verify_password("reef", "not-a-bcrypt-hash"));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() -> Result<()> {
        let db = setup_db().await?;
        let auth = test_auth();
        users::create_user(
            &db,
            &auth,
            UserCreate {
                username: "diver1".to_string(),
                email: "diver1@example.com".to_string(),
                password: "reef".to_string(),
            },
        )
        .await?;

        let wrong_password = login(
            &db,
            &auth,
            &LoginRequest {
                username: "diver1".to_string(),
                password: "wreck".to_string(),
            },
        )
        .await
        .unwrap_err();
        let unknown_user = login(
            &db,
            &auth,
            &LoginRequest {
                username: "nobody".to_string(),
                password: "reef".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(wrong_password.to_string(), INVALID_LOGIN);
        assert_eq!(unknown_user.to_string(), INVALID_LOGIN);

        let token = login(
            &db,
            &auth,
            &LoginRequest {
                username: "diver1".to_string(),
                password: "reef".to_string(),
            },
        )
        .await?;
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.username, "diver1");

        let me = current_user(&db, &auth, &token.access_token).await?;
        assert_eq!(me.username, "diver1");
        Ok(())
    }

    #[tokio::test]
    async fn test_token_for_deleted_user_rejected() -> Result<()> {
        let db = setup_db().await?;
        let auth = test_auth();
        let user = users::create_user(
            &db,
            &auth,
            UserCreate {
                username: "ghost".to_string(),
                email: "ghost@example.com".to_string(),
                password: "boo".to_string(),
            },
        )
        .await?;
        let (token, _) = auth.issue_token("ghost")?;
        users::delete_user(&db, user.id).await?;

        assert!(matches!(
            current_user(&db, &auth, &token).await,
            Err(CrudError::Unauthorized(_))
        ));
        Ok(())
    }
}
