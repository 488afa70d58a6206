pub const DEFAULT_ROUTING_CODE: &str = "10-10-10";
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Bank-wide constants stamped onto every new account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSettings {
    pub routing_code: String,
    pub currency: String,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            routing_code: String::from(DEFAULT_ROUTING_CODE),
            currency: String::from(DEFAULT_CURRENCY),
        }
    }
}
