use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use uuid::Uuid;

use crate::auth::application::domain::entities::{PhoneNumber, User, UserId};
use crate::common::application::domain::entities::ModerationStatus;
use crate::course::application::domain::entities::{
    Category, Course, CourseCertificate, CourseReview, Lesson, UserCourse, VideoLesson, VideoView,
};
use crate::course::application::ports::outgoing::{
    CatalogRepository, CatalogRepositoryError, CreateCategoryData, CreateCourseData,
    CreateLessonData, CreateReviewData, CreateVideoLessonData, EnrollmentRepository,
    EnrollmentRepositoryError,
};
use crate::shared::storage::{StoredFile, UploadLocation};
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, UpdateUserData, UserQuery, UserQueryError,
    UserRepository, UserRepositoryError,
};
use crate::shared::timestamps::Timestamps;

pub const SAMPLE_PASSWORD: &str = "secret123";

pub fn sample_user(phone_number: &str) -> User {
    let now = Utc::now();
    User {
        id: UserId::new(),
        phone_number: PhoneNumber::new(phone_number).expect("valid sample phone number"),
        email: None,
        first_name: "Aziz".to_string(),
        last_name: "Karimov".to_string(),
        password_hash: format!("plain${}", SAMPLE_PASSWORD),
        is_staff: false,
        is_active: true,
        is_superuser: false,
        password_set: true,
        password_changed_at: None,
        last_login: None,
        date_joined: now,
        timestamps: Timestamps::now(),
    }
}

// ──────────────────────────────────────────────────────────
// Users: one store backing both the query and the repository port
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
    failure: Option<String>,
    blind_query: bool,
}

impl InMemoryUsers {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            ..Default::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            failure: Some(msg.to_string()),
            ..Default::default()
        }
    }

    /// Lookups never see stored rows, as when a concurrent insert lands
    /// between the pre-save check and the write.
    pub fn racing(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            failure: None,
            blind_query: true,
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), UserRepositoryError> {
        match &self.failure {
            Some(msg) => Err(UserRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        if let Some(msg) = &self.failure {
            return Err(UserQueryError::DatabaseError(msg.clone()));
        }
        if self.blind_query {
            return Ok(None);
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn find_by_phone_number(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Option<User>, UserQueryError> {
        if let Some(msg) = &self.failure {
            return Err(UserQueryError::DatabaseError(msg.clone()));
        }
        if self.blind_query {
            return Ok(None);
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.phone_number == phone_number)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.phone_number == data.phone_number) {
            return Err(UserRepositoryError::PhoneNumberTaken);
        }

        let user = User {
            id: UserId::new(),
            phone_number: data.phone_number,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            password_hash: data.password_hash,
            is_staff: data.is_staff,
            is_active: data.is_active,
            is_superuser: data.is_superuser,
            password_set: data.password_set,
            password_changed_at: None,
            last_login: None,
            date_joined: Utc::now(),
            timestamps: Timestamps::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();

        if users
            .iter()
            .any(|u| u.id != user_id && u.phone_number == data.phone_number)
        {
            return Err(UserRepositoryError::PhoneNumberTaken);
        }

        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        user.phone_number = data.phone_number;
        user.email = data.email;
        user.first_name = data.first_name;
        user.last_name = data.last_name;
        user.is_staff = data.is_staff;
        user.is_active = data.is_active;
        user.is_superuser = data.is_superuser;
        user.timestamps.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<User, UserRepositoryError> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        user.password_hash = new_password_hash;
        user.password_set = true;
        user.password_changed_at = Some(Utc::now());
        Ok(user.clone())
    }

    async fn record_login(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        user.last_login = Some(Utc::now());
        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);

        if users.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Hasher that keeps the password readable
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("plain${}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match hash.strip_prefix("plain$") {
            Some(stored) => Ok(stored == password),
            None => Err(HashError::VerifyFailed),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Catalog: echoes the written data back, or a configured error
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct StubCatalog {
    error: Option<CatalogRepositoryError>,
}

impl StubCatalog {
    pub fn rejecting(error: CatalogRepositoryError) -> Self {
        Self { error: Some(error) }
    }

    pub fn failing(msg: &str) -> Self {
        Self::rejecting(CatalogRepositoryError::DatabaseError(msg.to_string()))
    }

    fn check(&self) -> Result<(), CatalogRepositoryError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogRepository for StubCatalog {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CatalogRepositoryError> {
        self.check()?;
        Ok(Category {
            id: Uuid::new_v4(),
            name: data.name,
            icon: data.icon,
            timestamps: Timestamps::now(),
        })
    }

    async fn create_course(&self, data: CreateCourseData) -> Result<Course, CatalogRepositoryError> {
        self.check()?;
        Ok(Course {
            id: Uuid::new_v4(),
            name: data.name,
            category_id: data.category_id,
            main_image: data.main_image,
            about: data.about,
            price: data.price,
            moderation_status: data.moderation_status,
            timestamps: Timestamps::now(),
        })
    }

    async fn set_course_status(
        &self,
        course_id: Uuid,
        status: ModerationStatus,
    ) -> Result<Course, CatalogRepositoryError> {
        self.check()?;
        Ok(Course {
            id: course_id,
            name: "Rust basics".to_string(),
            category_id: Uuid::new_v4(),
            main_image: StoredFile::new(UploadLocation::Courses, "rust.png")
                .expect("valid sample image"),
            about: None,
            price: 0,
            moderation_status: status,
            timestamps: Timestamps::now(),
        })
    }

    async fn delete_course(&self, _course_id: Uuid) -> Result<(), CatalogRepositoryError> {
        self.check()
    }

    async fn create_lesson(&self, data: CreateLessonData) -> Result<Lesson, CatalogRepositoryError> {
        self.check()?;
        Ok(Lesson {
            id: Uuid::new_v4(),
            name: data.name,
            course_id: data.course_id,
            order: data.order,
            moderation_status: data.moderation_status,
            timestamps: Timestamps::now(),
        })
    }

    async fn create_video_lesson(
        &self,
        data: CreateVideoLessonData,
    ) -> Result<VideoLesson, CatalogRepositoryError> {
        self.check()?;
        Ok(VideoLesson {
            id: Uuid::new_v4(),
            name: data.name,
            lesson_id: data.lesson_id,
            video: data.video,
            order: data.order,
            timestamps: Timestamps::now(),
        })
    }
}

// ──────────────────────────────────────────────────────────
// Enrollments: in-memory rows with the same uniqueness rules as the schema
// ──────────────────────────────────────────────────────────

#[derive(Default)]
struct EnrollmentRows {
    user_courses: Vec<UserCourse>,
    views: Vec<VideoView>,
    certificates: Vec<CourseCertificate>,
    reviews: Vec<CourseReview>,
}

#[derive(Clone, Default)]
pub struct StubEnrollments {
    rows: Arc<Mutex<EnrollmentRows>>,
}

impl StubEnrollments {
    /// Flips a finished enrollment back to unfinished.
    pub fn reopen(&self, user_course_id: Uuid) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(uc) = rows
            .user_courses
            .iter_mut()
            .find(|uc| uc.id == user_course_id)
        {
            uc.is_finished = false;
        }
    }
}

#[async_trait]
impl EnrollmentRepository for StubEnrollments {
    async fn create_user_course(
        &self,
        profile_id: Uuid,
        course_id: Uuid,
    ) -> Result<UserCourse, EnrollmentRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .user_courses
            .iter()
            .any(|uc| uc.profile_id == profile_id && uc.course_id == course_id)
        {
            return Err(EnrollmentRepositoryError::AlreadyEnrolled);
        }

        let user_course = UserCourse {
            id: Uuid::new_v4(),
            profile_id,
            course_id,
            is_finished: false,
            timestamps: Timestamps::now(),
        };
        rows.user_courses.push(user_course.clone());
        Ok(user_course)
    }

    async fn finish_user_course(
        &self,
        user_course_id: Uuid,
    ) -> Result<UserCourse, EnrollmentRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let uc = rows
            .user_courses
            .iter_mut()
            .find(|uc| uc.id == user_course_id)
            .ok_or(EnrollmentRepositoryError::UserCourseNotFound)?;
        uc.is_finished = true;
        Ok(uc.clone())
    }

    async fn create_video_view(
        &self,
        profile_id: Uuid,
        video_lesson_id: Uuid,
    ) -> Result<VideoView, EnrollmentRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .views
            .iter()
            .any(|v| v.profile_id == profile_id && v.video_lesson_id == video_lesson_id)
        {
            return Err(EnrollmentRepositoryError::AlreadyViewed);
        }

        let view = VideoView {
            id: Uuid::new_v4(),
            profile_id,
            video_lesson_id,
            timestamps: Timestamps::now(),
        };
        rows.views.push(view.clone());
        Ok(view)
    }

    async fn create_certificate(
        &self,
        user_course_id: Uuid,
        certificate: StoredFile,
    ) -> Result<CourseCertificate, EnrollmentRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let uc = rows
            .user_courses
            .iter()
            .find(|uc| uc.id == user_course_id)
            .ok_or(EnrollmentRepositoryError::UserCourseNotFound)?;
        uc.ensure_finished()
            .map_err(|_| EnrollmentRepositoryError::CourseNotFinished)?;
        if rows
            .certificates
            .iter()
            .any(|c| c.user_course_id == user_course_id)
        {
            return Err(EnrollmentRepositoryError::CertificateAlreadyIssued);
        }

        let certificate = CourseCertificate {
            id: Uuid::new_v4(),
            user_course_id,
            certificate,
            timestamps: Timestamps::now(),
        };
        rows.certificates.push(certificate.clone());
        Ok(certificate)
    }

    async fn replace_certificate_file(
        &self,
        certificate_id: Uuid,
        certificate: StoredFile,
    ) -> Result<CourseCertificate, EnrollmentRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .certificates
            .iter_mut()
            .find(|c| c.id == certificate_id)
            .ok_or(EnrollmentRepositoryError::CertificateNotFound)?;
        existing.certificate = certificate;
        Ok(existing.clone())
    }

    async fn create_review(
        &self,
        data: CreateReviewData,
    ) -> Result<CourseReview, EnrollmentRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .reviews
            .iter()
            .any(|r| r.profile_id == data.profile_id && r.course_id == data.course_id)
        {
            return Err(EnrollmentRepositoryError::AlreadyReviewed);
        }

        let review = CourseReview {
            id: Uuid::new_v4(),
            course_id: data.course_id,
            profile_id: data.profile_id,
            comment: data.comment,
            rating: data.rating,
            timestamps: Timestamps::now(),
        };
        rows.reviews.push(review.clone());
        Ok(review)
    }
}
