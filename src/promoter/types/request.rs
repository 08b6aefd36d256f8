use std::collections::BTreeMap;

use bon::Builder;
use serde::Serialize;

use super::{ConsultantStatus, FilterKey, FilterValue, SortOption};
use crate::Result;
use crate::auth::BearerToken;
use crate::error::{Error, Kind};

/// Query for [`crate::promoter::Client::consultants`].
///
/// Serializes to `sort=<sort>` followed by one `<key>=<value>` pair per filter.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use promoter_client_sdk::promoter::types::{
///     ConsultantsRequest, FilterKey, FilterValue, SortOption,
/// };
///
/// let request = ConsultantsRequest::builder()
///     .sort(SortOption::Rating)
///     .filters(BTreeMap::from([(FilterKey::Premium, FilterValue::On)]))
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Builder)]
pub struct ConsultantsRequest {
    #[builder(default)]
    pub sort: SortOption,
    #[serde(flatten)]
    #[builder(default)]
    pub filters: BTreeMap<FilterKey, FilterValue>,
}

impl ConsultantsRequest {
    /// Builds a request from untyped input, e.g. query parameters forwarded from another service.
    ///
    /// Fails on the first sort or filter entry outside the known options. A key given more than
    /// once keeps its last value.
    pub fn parse<'input, I>(sort: &str, filters: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'input str, &'input str)>,
    {
        let sort = sort.parse::<SortOption>()?;

        let mut parsed = BTreeMap::new();
        for (key, value) in filters {
            parsed.insert(key.parse::<FilterKey>()?, value.parse::<FilterValue>()?);
        }

        Ok(Self {
            sort,
            filters: parsed,
        })
    }
}

/// Body of [`crate::promoter::Client::create_consultant_invite`]. Sent as-is, without validation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[builder(on(String, into))]
pub struct InviteRequest {
    /// Name shown on the consultant's public profile.
    pub profile_name: String,
    /// Rate in euro cents.
    #[serde(rename = "rate")]
    pub rate_in_euro_cents: u64,
    pub note: String,
}

/// A status change performed on behalf of a consultant, authenticated with the consultant's
/// own token.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct StatusChangeRequest {
    #[builder(into)]
    pub consultant_token: BearerToken,
    pub status: ConsultantStatus,
}

impl StatusChangeRequest {
    /// Builds a request from an untyped status code. The status must be an integer naming one
    /// of the settable statuses.
    pub fn parse<T: Into<BearerToken>>(consultant_token: T, status: &str) -> Result<Self> {
        let status = status.parse::<ConsultantStatus>()?;
        let request = Self {
            consultant_token: consultant_token.into(),
            status,
        };
        request.validate()?;

        Ok(request)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.status.is_settable() {
            Ok(())
        } else {
            Err(Error::validation(
                Kind::InvalidStatus,
                format!(
                    "consultant status {} ({}) is assigned by the platform and cannot be set",
                    self.status.code(),
                    self.status
                ),
            ))
        }
    }
}
