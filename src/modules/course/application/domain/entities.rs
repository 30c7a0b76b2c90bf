use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::common::application::domain::entities::ModerationStatus;
use crate::impl_timestamped;
use crate::shared::storage::StoredFile;
use crate::shared::timestamps::Timestamps;

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<StoredFile>,
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub main_image: StoredFile,
    /// Rich-text HTML produced by the editor collaborator.
    pub about: Option<String>,
    pub price: u32,
    pub moderation_status: ModerationStatus,
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: Uuid,
    pub name: String,
    pub course_id: Uuid,
    pub order: u32,
    pub moderation_status: ModerationStatus,
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoLesson {
    pub id: Uuid,
    pub name: String,
    pub lesson_id: Uuid,
    pub video: StoredFile,
    pub order: u32,
    pub timestamps: Timestamps,
}

/// Enrollment of a profile in a course.
#[derive(Debug, Clone, Serialize)]
pub struct UserCourse {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub course_id: Uuid,
    pub is_finished: bool,
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("User course is not finished yet")]
pub struct CourseNotFinished;

impl UserCourse {
    /// A certificate may only be attached to a finished enrollment.
    pub fn ensure_finished(&self) -> Result<(), CourseNotFinished> {
        if self.is_finished {
            Ok(())
        } else {
            Err(CourseNotFinished)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoView {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub video_lesson_id: Uuid,
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseCertificate {
    pub id: Uuid,
    pub user_course_id: Uuid,
    pub certificate: StoredFile,
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Rating must be between {min} and {max}", min = Rating::MIN, max = Rating::MAX)]
pub struct RatingOutOfRange;

/// Review score from 0 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, RatingOutOfRange> {
        if value > Self::MAX {
            return Err(RatingOutOfRange);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseReview {
    pub id: Uuid,
    pub course_id: Uuid,
    pub profile_id: Uuid,
    pub comment: String,
    pub rating: Rating,
    pub timestamps: Timestamps,
}

impl_timestamped!(
    Category,
    Course,
    Lesson,
    VideoLesson,
    UserCourse,
    VideoView,
    CourseCertificate,
    CourseReview
);
