/// Raw registration input as received from a caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct RegistrationDetails {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub line1: String,
    pub line2: Option<String>,
    pub line3: Option<String>,
    pub town: String,
    pub county: Option<String>,
    pub postcode: String,
}
