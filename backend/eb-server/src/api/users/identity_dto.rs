use eb_core::Identity;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identity as shown to its owner. Never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub status: String,
    pub line1: String,
    pub line2: Option<String>,
    pub line3: Option<String>,
    pub town: String,
    pub county: Option<String>,
    pub postcode: String,
    pub created_timestamp: DateTime<Utc>,
}

impl From<Identity> for IdentityDto {
    fn from(i: Identity) -> Self {
        Self {
            id: i.id.to_string(),
            name: i.name,
            email: i.email,
            phone_number: i.phone_number,
            status: i.status.to_string(),
            line1: i.address.line1,
            line2: i.address.line2,
            line3: i.address.line3,
            town: i.address.town,
            county: i.address.county,
            postcode: i.address.postcode,
            created_timestamp: i.created_at,
        }
    }
}
