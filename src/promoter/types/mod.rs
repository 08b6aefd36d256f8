use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum_macros::{Display, EnumString};

use crate::error::{Error, Kind};

pub mod request;
pub mod response;

pub use request::{ConsultantsRequest, InviteRequest, StatusChangeRequest};
pub use response::{ConsultantRecord, ConsultantsResponse, InviteResponse};

/// Ordering of the consultant listing. Default is [`Status`](Self::Status).
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Default, Display, EnumString, Eq, Hash, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", parse_err_ty = Error, parse_err_fn = invalid_sort_option)]
pub enum SortOption {
    /// Current availability status
    #[default]
    Status,
    /// Customer rating
    Rating,
    /// Per-minute rate
    Rate,
}

fn invalid_sort_option(value: &str) -> Error {
    Error::validation(
        Kind::InvalidSortOption,
        format!("unknown sort option `{value}`, expected one of status, rating, rate"),
    )
}

/// Field a listing can be filtered on.
#[non_exhaustive]
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", parse_err_ty = Error, parse_err_fn = invalid_filter_key)]
pub enum FilterKey {
    /// Whether the consultant offers chat
    Chat,
    /// Whether the consultant is a premium listing
    Premium,
}

fn invalid_filter_key(value: &str) -> Error {
    Error::validation(
        Kind::InvalidFilterOption,
        format!("unknown filter `{value}`, expected one of chat, premium"),
    )
}

#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", parse_err_ty = Error, parse_err_fn = invalid_filter_value)]
pub enum FilterValue {
    On,
    Off,
}

fn invalid_filter_value(value: &str) -> Error {
    Error::validation(
        Kind::InvalidFilterOption,
        format!("unknown filter value `{value}`, expected on or off"),
    )
}

/// Availability of a consultant, as the numeric code the API uses.
///
/// [`Busy`](Self::Busy) and [`InChat`](Self::InChat) are assigned by the platform and can only
/// be observed; see [`ConsultantStatus::is_settable`].
#[non_exhaustive]
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize_repr,
    Deserialize_repr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ConsultantStatus {
    Unavailable = 0,
    Available = 1,
    Busy = 2,
    Paused = 3,
    FakeBusy = 4,
    InChat = 5,
}

impl ConsultantStatus {
    /// Returns `true` if a status change may target this status.
    #[must_use]
    pub const fn is_settable(self) -> bool {
        matches!(
            self,
            Self::Available | Self::Unavailable | Self::Paused | Self::FakeBusy
        )
    }

    /// Numeric code sent to and received from the API.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for ConsultantStatus {
    type Error = Error;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unavailable),
            1 => Ok(Self::Available),
            2 => Ok(Self::Busy),
            3 => Ok(Self::Paused),
            4 => Ok(Self::FakeBusy),
            5 => Ok(Self::InChat),
            other => Err(Error::validation(
                Kind::InvalidStatus,
                format!("unknown consultant status {other}"),
            )),
        }
    }
}

impl FromStr for ConsultantStatus {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim().parse::<i64>().map_err(|e| {
            Error::validation(
                Kind::InvalidStatus,
                format!("consultant status `{s}` is not an integer: {e}"),
            )
        })?;

        Self::try_from(code)
    }
}
