use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::VideoView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordVideoViewError {
    #[error("Video already viewed by this profile")]
    AlreadyViewed,

    #[error("Profile or video lesson not found")]
    ReferenceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RecordVideoViewUseCase: Send + Sync {
    async fn execute(
        &self,
        profile_id: Uuid,
        video_lesson_id: Uuid,
    ) -> Result<VideoView, RecordVideoViewError>;
}
