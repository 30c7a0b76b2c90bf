use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::impl_timestamped;
use crate::shared::timestamps::Timestamps;

/// Lifecycle state of catalog content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    InModeration,
    #[default]
    Active,
    Inactive,
}

impl ModerationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::InModeration => "in_moderation",
            ModerationStatus::Active => "active",
            ModerationStatus::Inactive => "inactive",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ModerationStatus::InModeration => "In moderation",
            ModerationStatus::Active => "Active",
            ModerationStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown moderation status: {0}")]
pub struct UnknownModerationStatus(pub String);

impl FromStr for ModerationStatus {
    type Err = UnknownModerationStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "in_moderation" => Ok(ModerationStatus::InModeration),
            "active" => Ok(ModerationStatus::Active),
            "inactive" => Ok(ModerationStatus::Inactive),
            other => Err(UnknownModerationStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountryCodeError {
    #[error("Country code must be exactly two ASCII letters")]
    Invalid,
}

/// Two-letter ISO 3166-1 alpha-2 code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(raw: &str) -> Result<Self, CountryCodeError> {
        let code = raw.trim();

        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CountryCodeError::Invalid);
        }

        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Rehydrates a code already validated on the way in.
    pub fn from_db(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    pub code: CountryCode,
    pub is_active: bool,
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: Uuid,
    pub name: String,
    /// Administrative code, unique across all regions.
    pub soato: String,
    pub country_id: Uuid,
    pub is_active: bool,
    pub timestamps: Timestamps,
}

impl_timestamped!(Country, Region);
