use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::course::application::{
    domain::entities::VideoView,
    ports::{
        incoming::use_cases::{RecordVideoViewError, RecordVideoViewUseCase},
        outgoing::{EnrollmentRepository, EnrollmentRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct RecordVideoViewService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    repository: R,
}

impl<R> RecordVideoViewService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RecordVideoViewUseCase for RecordVideoViewService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        profile_id: Uuid,
        video_lesson_id: Uuid,
    ) -> Result<VideoView, RecordVideoViewError> {
        match self
            .repository
            .create_video_view(profile_id, video_lesson_id)
            .await
        {
            Ok(view) => {
                info!("Profile {} viewed video {}", profile_id, video_lesson_id);
                Ok(view)
            }
            Err(EnrollmentRepositoryError::AlreadyViewed) => Err(RecordVideoViewError::AlreadyViewed),
            Err(EnrollmentRepositoryError::ReferenceNotFound) => {
                Err(RecordVideoViewError::ReferenceNotFound)
            }
            Err(e) => {
                error!("Failed to record video view: {}", e);
                Err(RecordVideoViewError::RepositoryError(e.to_string()))
            }
        }
    }
}
