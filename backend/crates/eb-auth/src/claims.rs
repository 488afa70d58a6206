use crate::{AuthError, Capability, Result as AuthErrorResult, TokenKind};

use eb_core::ErrorLocation;

use std::panic::Location;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by every token this service issues
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id)
    pub sub: String,
    pub kind: TokenKind,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Parse the subject as an identity id
    #[track_caller]
    pub fn identity_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| AuthError::InvalidToken {
            message: "subject is not an identity id".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn require_kind(&self, kind: TokenKind) -> AuthErrorResult<()> {
        if self.kind != kind {
            return Err(AuthError::InvalidToken {
                message: format!("expected {} token, got {}", kind, self.kind),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// Check these claims authorize setting the password of `identity_id`
    #[track_caller]
    pub fn authorize_set_password(&self, identity_id: Uuid) -> AuthErrorResult<()> {
        self.require_kind(TokenKind::SetPassword)?;
        if !self.has_capability(Capability::SetPassword) {
            return Err(AuthError::MissingCapability {
                capability: Capability::SetPassword.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.identity_id()? != identity_id {
            return Err(AuthError::InvalidToken {
                message: "token is bound to a different identity".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
