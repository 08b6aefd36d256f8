use bon::Builder;
use serde::Deserialize;
use serde_json::Value;
use serde_with::serde_as;

use crate::serde_helpers::TruthyBool;

/// A consultant as returned by the API. The schema is owned by the API and passed through
/// untouched.
pub type ConsultantRecord = Value;

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct ConsultantsResponse {
    pub promoted_consultants: Vec<ConsultantRecord>,
}

#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq, Builder)]
pub struct InviteResponse {
    /// Whether the invite was created. Missing or falsy values count as `false`.
    #[serde_as(as = "TruthyBool")]
    #[serde(default)]
    #[builder(default)]
    pub success: bool,
    pub registration_url: Option<String>,
}

impl InviteResponse {
    /// The registration URL to hand to the consultant, or an empty string if the API reported
    /// that the invite was not created.
    #[must_use]
    pub fn into_registration_url(self) -> String {
        if self.success {
            self.registration_url.unwrap_or_default()
        } else {
            String::new()
        }
    }
}
