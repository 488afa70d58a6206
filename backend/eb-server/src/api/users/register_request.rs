use eb_core::RegistrationDetails;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub line3: Option<String>,
    pub town: String,
    #[serde(default)]
    pub county: Option<String>,
    pub postcode: String,
}

impl From<RegisterRequest> for RegistrationDetails {
    fn from(r: RegisterRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            phone_number: r.phone_number,
            line1: r.line1,
            line2: r.line2,
            line3: r.line3,
            town: r.town,
            county: r.county,
            postcode: r.postcode,
        }
    }
}
