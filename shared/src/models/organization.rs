//! Organization Model

use serde::{Deserialize, Serialize};

use crate::util::lenient_string;

/// Hard-coded organization login (static config, not a secret store)
#[derive(Clone, PartialEq, Eq)]
pub struct OrgCredential {
    pub org_id: String,
    pub password: String,
}

impl OrgCredential {
    pub fn new(org_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            password: password.into(),
        }
    }

    pub fn is_org(&self, org_id: &str) -> bool {
        self.org_id.eq_ignore_ascii_case(org_id)
    }

    /// Exact, case-sensitive comparison
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }
}

impl std::fmt::Debug for OrgCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrgCredential")
            .field("org_id", &self.org_id)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Login payload (POST /api/v1/org/login)
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgLoginRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub org_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: String,
}

impl std::fmt::Debug for OrgLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrgLoginRequest")
            .field("org_id", &self.org_id)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgLoginResponse {
    pub message: String,
    /// Echoes the org id as supplied by the caller
    pub org_id: String,
}

/// Plain `{ "message": ... }` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
