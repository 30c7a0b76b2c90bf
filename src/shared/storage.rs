use serde::Serialize;
use std::fmt;

/// Named locations files are written to by the external storage collaborator.
/// Only the resulting reference path is persisted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UploadLocation {
    CategoryIcons,
    Courses,
    Videos,
    Certificates,
    ProfilePictures,
}

impl UploadLocation {
    pub const fn dir(&self) -> &'static str {
        match self {
            UploadLocation::CategoryIcons => "category_icons",
            UploadLocation::Courses => "courses",
            UploadLocation::Videos => "videos",
            UploadLocation::Certificates => "certificates",
            UploadLocation::ProfilePictures => "profile/pictures",
        }
    }
}

impl fmt::Display for UploadLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoredFileError {
    #[error("File path must live under `{0}`")]
    WrongLocation(UploadLocation),

    #[error("File name cannot be empty")]
    EmptyFileName,

    #[error("File name too long")]
    FileNameTooLong,

    #[error("File path must be relative and cannot traverse directories")]
    UnsafePath,
}

/// Reference path of a file kept by external storage, e.g. `videos/intro.mp4`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StoredFile(String);

impl StoredFile {
    pub const MAX_FILE_NAME_LEN: usize = 255;

    /// Accepts either a bare file name (placed under `location`) or a path
    /// that already starts with the location's directory.
    pub fn new(location: UploadLocation, path: &str) -> Result<Self, StoredFileError> {
        let path = path.trim();

        if path.starts_with('/') || path.split('/').any(|segment| segment == "..") {
            return Err(StoredFileError::UnsafePath);
        }

        let prefix = format!("{}/", location.dir());
        let relative = if let Some(rest) = path.strip_prefix(&prefix) {
            rest
        } else if path.contains('/') {
            return Err(StoredFileError::WrongLocation(location));
        } else {
            path
        };

        if relative.is_empty() || relative.ends_with('/') {
            return Err(StoredFileError::EmptyFileName);
        }

        let file_name = relative.rsplit('/').next().unwrap_or(relative);
        if file_name.chars().count() > Self::MAX_FILE_NAME_LEN {
            return Err(StoredFileError::FileNameTooLong);
        }

        Ok(Self(format!("{prefix}{relative}")))
    }

    /// Rehydrates a path that was validated before it was persisted.
    pub fn from_db(path: String) -> Self {
        Self(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoredFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
