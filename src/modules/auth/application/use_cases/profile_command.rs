use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::Gender;
use crate::auth::application::ports::outgoing::ProfileData;
use crate::shared::storage::{StoredFile, StoredFileError, UploadLocation};

const MAX_TEXT_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileCommandError {
    #[error("Invalid avatar: {0}")]
    InvalidAvatar(StoredFileError),

    #[error("{0} is too long")]
    FieldTooLong(&'static str),

    #[error("Postal code out of range")]
    PostalCodeOutOfRange,

    #[error("Birth date cannot be in the future")]
    BirthDateInFuture,
}

/// Profile fields shared by creation and update. Blank text becomes `None`.
#[derive(Debug, Clone, Default)]
pub struct ProfileCommand {
    data: ProfileData,
}

impl ProfileCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position_id: Option<Uuid>) -> Self {
        self.data.position_id = position_id;
        self
    }

    pub fn region(mut self, region_id: Option<Uuid>) -> Self {
        self.data.region_id = region_id;
        self
    }

    pub fn avatar(mut self, path: &str) -> Result<Self, ProfileCommandError> {
        let avatar = StoredFile::new(UploadLocation::ProfilePictures, path)
            .map_err(ProfileCommandError::InvalidAvatar)?;
        self.data.avatar = Some(avatar);
        Ok(self)
    }

    pub fn postal_code(mut self, postal_code: u32) -> Result<Self, ProfileCommandError> {
        if postal_code > i32::MAX as u32 {
            return Err(ProfileCommandError::PostalCodeOutOfRange);
        }
        self.data.postal_code = Some(postal_code);
        Ok(self)
    }

    pub fn address(mut self, address: &str) -> Result<Self, ProfileCommandError> {
        self.data.address = bounded_text(address, "Address")?;
        Ok(self)
    }

    pub fn instagram_username(mut self, username: &str) -> Result<Self, ProfileCommandError> {
        self.data.instagram_username = bounded_text(username, "Instagram username")?;
        Ok(self)
    }

    pub fn linkedin_username(mut self, username: &str) -> Result<Self, ProfileCommandError> {
        self.data.linkedin_username = bounded_text(username, "LinkedIn username")?;
        Ok(self)
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.data.gender = Some(gender);
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Result<Self, ProfileCommandError> {
        if birth_date > Utc::now().date_naive() {
            return Err(ProfileCommandError::BirthDateInFuture);
        }
        self.data.birth_date = Some(birth_date);
        Ok(self)
    }

    pub fn work_place(mut self, work_place: &str) -> Result<Self, ProfileCommandError> {
        self.data.work_place = bounded_text(work_place, "Work place")?;
        Ok(self)
    }

    pub fn about(mut self, about: &str) -> Self {
        let about = about.trim();
        self.data.about = (!about.is_empty()).then(|| about.to_string());
        self
    }

    pub fn into_data(self) -> ProfileData {
        self.data
    }
}

fn bounded_text(
    value: &str,
    field: &'static str,
) -> Result<Option<String>, ProfileCommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ProfileCommandError::FieldTooLong(field));
    }
    Ok(Some(value.to_string()))
}
