use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{self, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::driver::{ADMIN_ROLE, Driver};

const TOKEN_TTL_MINUTES: i64 = 30;

/// The full claim set embedded in every token. There is exactly one decode
/// path; callers project the fields they need.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub(crate) struct Claims {
    pub(crate) exp: usize,
    pub(crate) iat: usize,
    pub(crate) sub: String,
    pub(crate) id: i32,
    pub(crate) role: String,
}

#[derive(Clone)]
pub(crate) struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner").finish()
    }
}

impl TokenSigner {
    pub(crate) fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub(crate) fn issue(&self, driver: &Driver) -> Result<String, Error> {
        let current_time = Utc::now();
        let expiration_time = current_time + Duration::minutes(TOKEN_TTL_MINUTES);

        let claims = Claims {
            exp: expiration_time.timestamp() as usize,
            iat: current_time.timestamp() as usize,
            sub: driver.username.to_string(),
            id: driver.id,
            role: driver.role.to_string(),
        };

        self.encode(&claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String, Error> {
        Ok(jsonwebtoken::encode(
            &Header::default(),
            claims,
            &self.encoding_key,
        )?)
    }

    /// Fails closed: anything other than a well-formed token signed with our
    /// key and still within its validity window is rejected.
    pub(crate) fn decode(&self, token: &str) -> Result<Claims, Error> {
        match jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Validation::default()) {
            Ok(token_data) => Ok(token_data.claims),
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(Error::ExpiredToken),
                _ => Err(Error::InvalidToken),
            },
        }
    }
}

pub(crate) fn ensure_admin(claims: &Claims) -> Result<(), Error> {
    if claims.role != ADMIN_ROLE {
        return Err(Error::Forbidden);
    }

    Ok(())
}

pub(crate) async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let auth_header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(Error::NoCredentials)?;

    let mut header = auth_header
        .to_str()
        .map_err(|_| Error::InvalidToken)?
        .split_whitespace();

    let (_bearer, token) = (header.next(), header.next().unwrap_or_default());

    let claims = state.signer.decode(token)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

pub(crate) async fn require_admin(request: Request, next: Next) -> Result<Response<Body>, Error> {
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or(Error::NoCredentials)?;

    ensure_admin(claims)?;

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_driver() -> Driver {
        Driver {
            id: 7,
            username: "alice".to_string(),
            password_hash: "$2b$12$unused".to_string(),
            role: "driver".to_string(),
            fav_brand: Some("Lotus".to_string()),
            phone_number: None,
        }
    }

    fn claims_at(iat: i64, exp: i64) -> Claims {
        Claims {
            exp: exp as usize,
            iat: iat as usize,
            sub: "alice".to_string(),
            id: 7,
            role: "driver".to_string(),
        }
    }

    #[test]
    fn issue_then_decode_recovers_identity() {
        let signer = TokenSigner::new("test-secret");
        let driver = test_driver();

        let token = signer.issue(&driver).unwrap();
        let claims = signer.decode(&token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.id, 7);
        assert_eq!(claims.role, "driver");
        assert!(claims.exp > Utc::now().timestamp() as usize);
    }

    #[test]
    fn token_signed_with_other_key_is_invalid() {
        let signer = TokenSigner::new("test-secret");
        let other = TokenSigner::new("other-secret");

        let token = other.issue(&test_driver()).unwrap();

        assert!(matches!(signer.decode(&token), Err(Error::InvalidToken)));
    }

    #[test]
    fn tampered_signature_is_invalid() {
        let signer = TokenSigner::new("test-secret");
        let token = signer.issue(&test_driver()).unwrap();

        let mut bytes = token.into_bytes();
        let last = bytes.last_mut().unwrap();
        *last = if *last == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(matches!(
            signer.decode(&tampered),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_invalid() {
        let signer = TokenSigner::new("test-secret");

        assert!(matches!(
            signer.decode("not.a.token"),
            Err(Error::InvalidToken)
        ));
        assert!(matches!(signer.decode(""), Err(Error::InvalidToken)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let signer = TokenSigner::new("test-secret");
        let now = Utc::now().timestamp();

        // well past the default validation leeway
        let stale = claims_at(now - 3600, now - 1800);
        let token = signer.encode(&stale).unwrap();

        assert!(matches!(signer.decode(&token), Err(Error::ExpiredToken)));
    }

    #[test]
    fn independent_issuances_are_distinct_and_both_valid() {
        let signer = TokenSigner::new("test-secret");
        let now = Utc::now().timestamp();

        let first = signer.encode(&claims_at(now - 60, now + 1740)).unwrap();
        let second = signer.encode(&claims_at(now, now + 1800)).unwrap();

        assert_ne!(first, second);
        assert!(signer.decode(&first).is_ok());
        assert!(signer.decode(&second).is_ok());
    }

    #[test]
    fn non_admin_role_is_forbidden() {
        let now = Utc::now().timestamp();
        let claims = claims_at(now, now + 1800);

        assert!(matches!(ensure_admin(&claims), Err(Error::Forbidden)));
    }

    #[test]
    fn admin_role_passes_the_gate() {
        let now = Utc::now().timestamp();
        let mut claims = claims_at(now, now + 1800);
        claims.role = ADMIN_ROLE.to_string();

        assert!(ensure_admin(&claims).is_ok());
    }
}
