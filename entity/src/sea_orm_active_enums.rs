//! Status enums stored as natural-language strings.
//!
//! The stored label doubles as the wire representation, so `as_str` and `FromStr`
//! are the only conversions used outside of SeaORM's own column mapping.

use std::str::FromStr;

use sea_orm::entity::prelude::*;
use thiserror::Error;

/// Returned when a label does not name any variant of a status enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} value '{value}'")]
pub struct UnknownStatus {
    /// Name of the enum that failed to parse
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

/// Lifecycle of an application sent by a guardian to an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "Sent")]
    Sent,
    #[sea_orm(string_value = "Accepted")]
    Accepted,
    #[sea_orm(string_value = "Refused")]
    Refused,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Accepted => "Accepted",
            Self::Refused => "Refused",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Sent" => Ok(Self::Sent),
            "Accepted" => Ok(Self::Accepted),
            "Refused" => Ok(Self::Refused),
            other => Err(UnknownStatus {
                kind: "application status",
                value: other.to_string(),
            }),
        }
    }
}

/// Whether an announcement still accepts applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AnnouncementStatus {
    #[sea_orm(string_value = "Open")]
    Open,
    #[sea_orm(string_value = "Closed")]
    Closed,
}

impl AnnouncementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

impl FromStr for AnnouncementStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Open" => Ok(Self::Open),
            "Closed" => Ok(Self::Closed),
            other => Err(UnknownStatus {
                kind: "announcement status",
                value: other.to_string(),
            }),
        }
    }
}
