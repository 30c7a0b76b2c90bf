use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::impl_timestamped;
use crate::shared::storage::StoredFile;
use crate::shared::timestamps::Timestamps;

static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?1?\d{9,12}$").expect("phone number pattern"));

static SLUG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("slug pattern"));

/// Hashes starting with this prefix never verify.
pub const UNUSABLE_PASSWORD_PREFIX: &str = "!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

//
// ──────────────────────────────────────────────────────────
// Phone number
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneNumberError {
    #[error("Phone number is required")]
    Empty,

    #[error("Phone number must be entered in the format: '+999999999'. Up to 12 digits allowed.")]
    InvalidFormat,
}

/// Login identifier: optional `+`, optional leading `1`, then 9 to 12 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const MAX_LEN: usize = 16;

    pub fn new(raw: &str) -> Result<Self, PhoneNumberError> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        if value.len() > Self::MAX_LEN || !PHONE_NUMBER_REGEX.is_match(value) {
            return Err(PhoneNumberError::InvalidFormat);
        }

        Ok(Self(value.to_string()))
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// User
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub phone_number: PhoneNumber,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub password_set: bool,
    pub password_changed_at: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub date_joined: DateTime<Utc>,
    pub timestamps: Timestamps,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn has_usable_password(&self) -> bool {
        !self.password_hash.starts_with(UNUSABLE_PASSWORD_PREFIX)
    }
}

/// Marker stored for accounts created without a password.
///
/// Such accounts are saved with `password_set = false` instead of the usual
/// `true` default, so the flag tells whether a real password exists. The
/// marker never verifies, and `change_password` sets the flag back to `true`.
pub fn unusable_password() -> String {
    format!("{}{}", UNUSABLE_PASSWORD_PREFIX, Uuid::new_v4().simple())
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown gender: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: UserId,
    pub position_id: Option<Uuid>,
    pub region_id: Option<Uuid>,
    pub avatar: Option<StoredFile>,
    pub postal_code: Option<u32>,
    pub address: Option<String>,
    pub instagram_username: Option<String>,
    pub linkedin_username: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub work_place: Option<String>,
    pub about: Option<String>,
    pub timestamps: Timestamps,
}

//
// ──────────────────────────────────────────────────────────
// Position
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("Slug cannot be empty")]
    Empty,

    #[error("Slug too long")]
    TooLong,

    #[error("Slug may only contain lowercase letters, digits, '-' and '_'")]
    InvalidCharacters,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(raw: &str) -> Result<Self, SlugError> {
        let slug = raw.trim().to_lowercase();

        if slug.is_empty() {
            return Err(SlugError::Empty);
        }
        if slug.len() > 255 {
            return Err(SlugError::TooLong);
        }
        if !SLUG_REGEX.is_match(&slug) {
            return Err(SlugError::InvalidCharacters);
        }

        Ok(Self(slug))
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub id: Uuid,
    pub name: String,
    pub slug: Slug,
    pub timestamps: Timestamps,
}

impl_timestamped!(User, Profile, Position);
