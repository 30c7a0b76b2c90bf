use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

use crate::course::adapter::outgoing::sea_orm_entity::{course_reviews, courses, user_courses};
use crate::course::adapter::outgoing::EnrollmentRepositoryPostgres;
use crate::course::application::ports::incoming::use_cases::{
    EnrollError, EnrollUseCase, FinishCourseError, FinishCourseUseCase, IssueCertificateError,
    IssueCertificateUseCase, RecordVideoViewError, RecordVideoViewUseCase,
    ReplaceCertificateFileUseCase, ReviewCourseCommand, ReviewCourseError, ReviewCourseUseCase,
};
use crate::course::application::services::{
    EnrollService, FinishCourseService, IssueCertificateService, RecordVideoViewService,
    ReplaceCertificateFileService, ReviewCourseService,
};
use crate::tests::support::fixtures::{seed_course, seed_profile, seed_video, sqlite_db};

#[tokio::test]
async fn certificate_waits_for_finished_course() {
    let db = sqlite_db().await;
    let (_, profile_id) = seed_profile(&db, "+998901234567").await;
    let course_id = seed_course(&db).await;

    let enrollment = EnrollService::new(EnrollmentRepositoryPostgres::new(db.clone()))
        .execute(profile_id, course_id)
        .await
        .unwrap();
    assert!(!enrollment.is_finished);

    let issue = IssueCertificateService::new(EnrollmentRepositoryPostgres::new(db.clone()));
    let err = issue.execute(enrollment.id, "rust.pdf").await.unwrap_err();
    assert_eq!(err, IssueCertificateError::CourseNotFinished);
    assert_eq!(err.to_string(), "User course is not finished yet");

    let finished = FinishCourseService::new(EnrollmentRepositoryPostgres::new(db.clone()))
        .execute(enrollment.id)
        .await
        .unwrap();
    assert!(finished.is_finished);

    let certificate = issue.execute(enrollment.id, "rust.pdf").await.unwrap();
    assert_eq!(certificate.user_course_id, enrollment.id);
    assert_eq!(certificate.certificate.as_str(), "certificates/rust.pdf");

    assert_eq!(
        issue.execute(enrollment.id, "again.pdf").await.unwrap_err(),
        IssueCertificateError::CertificateAlreadyIssued
    );
}

#[tokio::test]
async fn certificate_file_can_be_replaced_after_course_is_reopened() {
    let db = sqlite_db().await;
    let (_, profile_id) = seed_profile(&db, "+998901234567").await;
    let course_id = seed_course(&db).await;

    let enrollment = EnrollService::new(EnrollmentRepositoryPostgres::new(db.clone()))
        .execute(profile_id, course_id)
        .await
        .unwrap();
    FinishCourseService::new(EnrollmentRepositoryPostgres::new(db.clone()))
        .execute(enrollment.id)
        .await
        .unwrap();
    let certificate = IssueCertificateService::new(EnrollmentRepositoryPostgres::new(db.clone()))
        .execute(enrollment.id, "first.pdf")
        .await
        .unwrap();

    let mut row = user_courses::Entity::find_by_id(enrollment.id)
        .one(db.as_ref())
        .await
        .unwrap()
        .unwrap()
        .into_active_model();
    row.is_finished = Set(false);
    row.update(db.as_ref()).await.unwrap();

    let replaced = ReplaceCertificateFileService::new(EnrollmentRepositoryPostgres::new(db.clone()))
        .execute(certificate.id, "second.pdf")
        .await
        .unwrap();

    assert_eq!(replaced.id, certificate.id);
    assert_eq!(replaced.certificate.as_str(), "certificates/second.pdf");
}

#[tokio::test]
async fn enrollment_is_unique_per_profile_and_course() {
    let db = sqlite_db().await;
    let (_, profile_id) = seed_profile(&db, "+998901234567").await;
    let course_id = seed_course(&db).await;
    let enroll = EnrollService::new(EnrollmentRepositoryPostgres::new(db.clone()));

    enroll.execute(profile_id, course_id).await.unwrap();

    assert!(matches!(
        enroll.execute(profile_id, course_id).await,
        Err(EnrollError::AlreadyEnrolled)
    ));
    assert!(matches!(
        enroll.execute(profile_id, Uuid::new_v4()).await,
        Err(EnrollError::ReferenceNotFound)
    ));
}

#[tokio::test]
async fn finishing_unknown_enrollment_fails() {
    let db = sqlite_db().await;

    let result = FinishCourseService::new(EnrollmentRepositoryPostgres::new(db.clone()))
        .execute(Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(FinishCourseError::UserCourseNotFound)));
}

#[tokio::test]
async fn video_is_viewed_once_per_profile() {
    let db = sqlite_db().await;
    let (_, profile_id) = seed_profile(&db, "+998901234567").await;
    let course_id = seed_course(&db).await;
    let (_, video_id) = seed_video(&db, course_id).await;
    let record = RecordVideoViewService::new(EnrollmentRepositoryPostgres::new(db.clone()));

    let view = record.execute(profile_id, video_id).await.unwrap();
    assert_eq!(view.video_lesson_id, video_id);

    assert!(matches!(
        record.execute(profile_id, video_id).await,
        Err(RecordVideoViewError::AlreadyViewed)
    ));
}

#[tokio::test]
async fn course_is_reviewed_once_per_profile() {
    let db = sqlite_db().await;
    let (_, profile_id) = seed_profile(&db, "+998901234567").await;
    let course_id = seed_course(&db).await;
    let review = ReviewCourseService::new(EnrollmentRepositoryPostgres::new(db.clone()));

    let command =
        ReviewCourseCommand::new(profile_id, course_id, "Clear and practical".to_string(), 5)
            .unwrap();
    let saved = review.execute(command.clone()).await.unwrap();
    assert_eq!(saved.rating.value(), 5);

    assert!(matches!(
        review.execute(command).await,
        Err(ReviewCourseError::AlreadyReviewed)
    ));
}

#[tokio::test]
async fn storage_rejects_negative_price_and_out_of_range_rating() {
    let db = sqlite_db().await;
    let (_, profile_id) = seed_profile(&db, "+998901234567").await;
    let course_id = seed_course(&db).await;

    let mut course = courses::Entity::find_by_id(course_id)
        .one(db.as_ref())
        .await
        .unwrap()
        .unwrap()
        .into_active_model();
    course.price = Set(-1);
    assert!(course.update(db.as_ref()).await.is_err());

    let review = course_reviews::ActiveModel {
        id: Set(Uuid::new_v4()),
        course_id: Set(course_id),
        profile_id: Set(profile_id),
        comment: Set("Too generous".to_string()),
        rating: Set(9),
        ..Default::default()
    };
    assert!(review.insert(db.as_ref()).await.is_err());
}
