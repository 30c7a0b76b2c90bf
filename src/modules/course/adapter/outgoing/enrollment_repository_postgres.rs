use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::course::application::{
    domain::entities::{CourseCertificate, CourseReview, UserCourse, VideoView},
    ports::outgoing::{CreateReviewData, EnrollmentRepository, EnrollmentRepositoryError},
};
use crate::shared::db_error::{constraint_violation, ConstraintViolation};
use crate::shared::storage::StoredFile;

use super::sea_orm_entity::{course_certificates, course_reviews, user_courses, video_views};

#[derive(Debug, Clone)]
pub struct EnrollmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EnrollmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> EnrollmentRepositoryError {
        error!("Enrollment write failed: {}", e);
        EnrollmentRepositoryError::DatabaseError(e.to_string())
    }

    /// Unique violations become `duplicate`; dangling keys become `ReferenceNotFound`.
    fn map_insert_err(e: DbErr, duplicate: EnrollmentRepositoryError) -> EnrollmentRepositoryError {
        match constraint_violation(&e) {
            Some(ConstraintViolation::Unique) => duplicate,
            Some(ConstraintViolation::ForeignKey) => EnrollmentRepositoryError::ReferenceNotFound,
            None => Self::map_db_err(e),
        }
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryPostgres {
    async fn create_user_course(
        &self,
        profile_id: Uuid,
        course_id: Uuid,
    ) -> Result<UserCourse, EnrollmentRepositoryError> {
        let model = user_courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            profile_id: Set(profile_id),
            course_id: Set(course_id),
            is_finished: Set(false),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| Self::map_insert_err(e, EnrollmentRepositoryError::AlreadyEnrolled))?;

        Ok(model.to_domain())
    }

    async fn finish_user_course(
        &self,
        user_course_id: Uuid,
    ) -> Result<UserCourse, EnrollmentRepositoryError> {
        let mut active = user_courses::Entity::find_by_id(user_course_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(EnrollmentRepositoryError::UserCourseNotFound)?
            .into_active_model();

        active.is_finished = Set(true);

        let model = active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(model.to_domain())
    }

    async fn create_video_view(
        &self,
        profile_id: Uuid,
        video_lesson_id: Uuid,
    ) -> Result<VideoView, EnrollmentRepositoryError> {
        let model = video_views::ActiveModel {
            id: Set(Uuid::new_v4()),
            profile_id: Set(profile_id),
            video_lesson_id: Set(video_lesson_id),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| Self::map_insert_err(e, EnrollmentRepositoryError::AlreadyViewed))?;

        Ok(model.to_domain())
    }

    async fn create_certificate(
        &self,
        user_course_id: Uuid,
        certificate: StoredFile,
    ) -> Result<CourseCertificate, EnrollmentRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let user_course = match user_courses::Entity::find_by_id(user_course_id)
            .one(&txn)
            .await
        {
            Ok(Some(model)) => model.to_domain(),
            Ok(None) => {
                let _ = txn.rollback().await;
                return Err(EnrollmentRepositoryError::UserCourseNotFound);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if user_course.ensure_finished().is_err() {
            let _ = txn.rollback().await;
            return Err(EnrollmentRepositoryError::CourseNotFinished);
        }

        let inserted = course_certificates::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_course_id: Set(user_course_id),
            certificate: Set(certificate.into_inner()),
            ..Default::default()
        }
        .insert(&txn)
        .await;

        let model = match inserted {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_insert_err(
                    e,
                    EnrollmentRepositoryError::CertificateAlreadyIssued,
                ));
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(model.to_domain())
    }

    async fn replace_certificate_file(
        &self,
        certificate_id: Uuid,
        certificate: StoredFile,
    ) -> Result<CourseCertificate, EnrollmentRepositoryError> {
        let mut active = course_certificates::Entity::find_by_id(certificate_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(EnrollmentRepositoryError::CertificateNotFound)?
            .into_active_model();

        active.certificate = Set(certificate.into_inner());

        let model = active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(model.to_domain())
    }

    async fn create_review(
        &self,
        data: CreateReviewData,
    ) -> Result<CourseReview, EnrollmentRepositoryError> {
        let model = course_reviews::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(data.course_id),
            profile_id: Set(data.profile_id),
            comment: Set(data.comment),
            rating: Set(i16::from(data.rating.value())),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| Self::map_insert_err(e, EnrollmentRepositoryError::AlreadyReviewed))?;

        Ok(model.to_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::application::domain::entities::Rating;
    use crate::shared::storage::UploadLocation;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn user_course_model(id: Uuid, is_finished: bool) -> user_courses::Model {
        let now = Utc::now().fixed_offset();
        user_courses::Model {
            id,
            profile_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            is_finished,
            created_at: now,
            updated_at: now,
        }
    }

    fn certificate_model(user_course_id: Uuid, path: &str) -> course_certificates::Model {
        let now = Utc::now().fixed_offset();
        course_certificates::Model {
            id: Uuid::new_v4(),
            user_course_id,
            certificate: path.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn certificate_file() -> StoredFile {
        StoredFile::new(UploadLocation::Certificates, "cert.pdf").unwrap()
    }

    #[tokio::test]
    async fn test_create_user_course_duplicate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"uq_user_courses_profile_course\""
                    .to_string(),
            )])
            .into_connection();

        let repo = EnrollmentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.create_user_course(Uuid::new_v4(), Uuid::new_v4()).await,
            Err(EnrollmentRepositoryError::AlreadyEnrolled)
        ));
    }

    #[tokio::test]
    async fn test_create_certificate_requires_finished_course() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_course_model(id, false)]])
            .into_connection();

        let repo = EnrollmentRepositoryPostgres::new(Arc::new(db));

        let result = repo.create_certificate(id, certificate_file()).await;

        assert!(matches!(
            result,
            Err(EnrollmentRepositoryError::CourseNotFinished)
        ));
    }

    #[tokio::test]
    async fn test_create_certificate_for_finished_course() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_course_model(id, true)]])
            .append_query_results(vec![vec![certificate_model(id, "certificates/cert.pdf")]])
            .into_connection();

        let repo = EnrollmentRepositoryPostgres::new(Arc::new(db));

        let certificate = repo.create_certificate(id, certificate_file()).await.unwrap();

        assert_eq!(certificate.user_course_id, id);
        assert_eq!(certificate.certificate.as_str(), "certificates/cert.pdf");
    }

    #[tokio::test]
    async fn test_create_certificate_twice() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_course_model(id, true)]])
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"course_certificates_user_course_id_key\""
                    .to_string(),
            )])
            .into_connection();

        let repo = EnrollmentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.create_certificate(id, certificate_file()).await,
            Err(EnrollmentRepositoryError::CertificateAlreadyIssued)
        ));
    }

    #[tokio::test]
    async fn test_create_certificate_unknown_user_course() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<user_courses::Model>::new()])
            .into_connection();

        let repo = EnrollmentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.create_certificate(Uuid::new_v4(), certificate_file()).await,
            Err(EnrollmentRepositoryError::UserCourseNotFound)
        ));
    }

    #[tokio::test]
    async fn test_replace_certificate_file_skips_completion_check() {
        let user_course_id = Uuid::new_v4();
        let stored = certificate_model(user_course_id, "certificates/old.pdf");
        let certificate_id = stored.id;
        let mut updated = stored.clone();
        updated.certificate = "certificates/new.pdf".to_string();

        // no user_courses lookup is queued: the update must not load the enrollment
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored]])
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let repo = EnrollmentRepositoryPostgres::new(Arc::new(db));

        let certificate = repo
            .replace_certificate_file(
                certificate_id,
                StoredFile::new(UploadLocation::Certificates, "new.pdf").unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(certificate.certificate.as_str(), "certificates/new.pdf");
    }

    #[tokio::test]
    async fn test_create_review_maps_rating() {
        let now = Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_reviews::Model {
                id: Uuid::new_v4(),
                course_id: Uuid::new_v4(),
                profile_id: Uuid::new_v4(),
                comment: "Clear and practical".to_string(),
                rating: 4,
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();

        let repo = EnrollmentRepositoryPostgres::new(Arc::new(db));

        let review = repo
            .create_review(CreateReviewData {
                course_id: Uuid::new_v4(),
                profile_id: Uuid::new_v4(),
                comment: "Clear and practical".to_string(),
                rating: Rating::new(4).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(review.rating.value(), 4);
    }
}
