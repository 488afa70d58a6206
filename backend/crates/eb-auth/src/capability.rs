use serde::{Deserialize, Serialize};

/// Operation a token holder may perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    #[serde(rename = "create_account")]
    CreateAccount,
    #[serde(rename = "deposit")]
    Deposit,
    #[serde(rename = "withdraw")]
    Withdraw,
    #[serde(rename = "set-password")]
    SetPassword,
}

/// Capabilities granted to an access token at login
pub const LOGIN_CAPABILITIES: [Capability; 3] = [
    Capability::CreateAccount,
    Capability::Deposit,
    Capability::Withdraw,
];

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateAccount => "create_account",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::SetPassword => "set-password",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
