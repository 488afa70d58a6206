use crate::{Result as ServiceResult, ServiceError};

use eb_auth::{Capability, Claims, TokenKind};
use eb_core::ErrorLocation;

use std::panic::Location;

use uuid::Uuid;

/// Authenticated holder of a validated access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub identity_id: Uuid,
    pub capabilities: Vec<Capability>,
}

impl Caller {
    pub fn from_claims(claims: Claims) -> ServiceResult<Self> {
        claims.require_kind(TokenKind::Access)?;
        Ok(Self {
            identity_id: claims.identity_id()?,
            capabilities: claims.capabilities,
        })
    }

    #[track_caller]
    pub fn require(&self, capability: Capability) -> ServiceResult<()> {
        if !self.capabilities.contains(&capability) {
            return Err(ServiceError::MissingCapability {
                capability: capability.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// Fail with `IdentityMismatch` unless the caller is `owner_id`
    #[track_caller]
    pub fn require_owner(&self, owner_id: Uuid) -> ServiceResult<()> {
        if self.identity_id != owner_id {
            return Err(ServiceError::identity_mismatch());
        }
        Ok(())
    }
}
