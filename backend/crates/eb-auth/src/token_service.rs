use crate::{
    AuthError, Capability, Claims, IssuedToken, Result as AuthErrorResult, TokenConfig, TokenKind,
    TokenPair,
};

use eb_core::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Issues and validates HS256 tokens with a shared secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: TokenConfig,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            validation,
            config,
        }
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Mint an access token carrying `capabilities` and a capability-free refresh token
    #[track_caller]
    pub fn issue_tokens(
        &self,
        identity_id: Uuid,
        capabilities: &[Capability],
    ) -> AuthErrorResult<TokenPair> {
        let now = Utc::now();
        let access = self.sign(
            identity_id,
            TokenKind::Access,
            capabilities.to_vec(),
            now,
            self.config.access_ttl,
        )?;
        let refresh = self.sign(
            identity_id,
            TokenKind::Refresh,
            Vec::new(),
            now,
            self.config.refresh_ttl,
        )?;

        Ok(TokenPair {
            access_token: access.token,
            refresh_token: refresh.token,
            access_expires_at: access.expires_at,
            refresh_expires_at: refresh.expires_at,
        })
    }

    /// Mint the short-lived token that authorizes a single password set
    #[track_caller]
    pub fn issue_set_password_token(&self, identity_id: Uuid) -> AuthErrorResult<IssuedToken> {
        self.sign(
            identity_id,
            TokenKind::SetPassword,
            vec![Capability::SetPassword],
            Utc::now(),
            self.config.set_password_ttl,
        )
    }

    /// Verify signature, algorithm and expiry, returning the claims
    #[track_caller]
    pub fn validate(&self, raw: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(raw, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::MalformedToken {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Expiry is exclusive: a token is dead at its exp second
        if token_data.claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(token_data.claims)
    }

    /// Identity id from a validated access token
    #[track_caller]
    pub fn extract_identity_id(&self, raw: &str) -> AuthErrorResult<Uuid> {
        let claims = self.validate(raw)?;
        claims.require_kind(TokenKind::Access)?;
        claims.identity_id()
    }

    /// Validate a set-password token and check it is bound to `identity_id`
    #[track_caller]
    pub fn validate_set_password(&self, raw: &str, identity_id: Uuid) -> AuthErrorResult<Claims> {
        let claims = self.validate(raw)?;
        claims.authorize_set_password(identity_id)?;
        Ok(claims)
    }

    /// Exchange a valid refresh token for a fresh pair
    #[track_caller]
    pub fn refresh(
        &self,
        raw_refresh: &str,
        capabilities: &[Capability],
    ) -> AuthErrorResult<TokenPair> {
        let claims = self.validate(raw_refresh)?;
        claims.require_kind(TokenKind::Refresh)?;
        let identity_id = claims.identity_id()?;
        self.issue_tokens(identity_id, capabilities)
    }

    #[track_caller]
    fn sign(
        &self,
        identity_id: Uuid,
        kind: TokenKind,
        capabilities: Vec<Capability>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> AuthErrorResult<IssuedToken> {
        let expires_at = now + ttl;
        let claims = Claims {
            sub: identity_id.to_string(),
            kind,
            capabilities,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| AuthError::Encode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        log::debug!("Issued {} token for identity {}", kind, identity_id);

        Ok(IssuedToken { token, expires_at })
    }
}
