use std::sync::Arc;

use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::{profiles, users};
use crate::common::adapter::outgoing::sea_orm_entity::moderation_status::ModerationStatusColumn;
use crate::course::adapter::outgoing::sea_orm_entity::{categories, courses, lessons, video_lessons};
use crate::shared::config::DatabaseConfig;
use crate::shared::database::connect_and_migrate;

/// Fresh in-memory SQLite database with every migration applied.
pub async fn sqlite_db() -> Arc<DatabaseConnection> {
    let db = connect_and_migrate(&DatabaseConfig::in_memory_sqlite())
        .await
        .expect("in-memory database should migrate");
    Arc::new(db)
}

pub async fn seed_user(db: &DatabaseConnection, phone_number: &str) -> Uuid {
    users::ActiveModel {
        id: Set(Uuid::new_v4()),
        phone_number: Set(phone_number.to_string()),
        email: Set(None),
        first_name: Set("Aziz".to_string()),
        last_name: Set("Karimov".to_string()),
        password_hash: Set("plain$secret123".to_string()),
        is_staff: Set(false),
        is_active: Set(true),
        is_superuser: Set(false),
        password_set: Set(true),
        password_changed_at: Set(None),
        last_login: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed user")
    .id
}

/// Returns `(user_id, profile_id)`.
pub async fn seed_profile(db: &DatabaseConnection, phone_number: &str) -> (Uuid, Uuid) {
    let user_id = seed_user(db, phone_number).await;
    let profile_id = profiles::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        position_id: Set(None),
        region_id: Set(None),
        avatar: Set(None),
        postal_code: Set(None),
        address: Set(None),
        instagram_username: Set(None),
        linkedin_username: Set(None),
        gender: Set(None),
        birth_date: Set(None),
        work_place: Set(None),
        about: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed profile")
    .id;

    (user_id, profile_id)
}

pub async fn seed_course(db: &DatabaseConnection) -> Uuid {
    let category_id = categories::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Programming".to_string()),
        icon: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed category")
    .id;

    courses::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Rust basics".to_string()),
        category_id: Set(category_id),
        main_image: Set("courses/rust.png".to_string()),
        about: Set(None),
        price: Set(0),
        moderation_status: Set(ModerationStatusColumn::Active),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed course")
    .id
}

/// Returns `(lesson_id, video_lesson_id)`.
pub async fn seed_video(db: &DatabaseConnection, course_id: Uuid) -> (Uuid, Uuid) {
    let lesson_id = lessons::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Intro".to_string()),
        course_id: Set(course_id),
        order: Set(0),
        moderation_status: Set(ModerationStatusColumn::Active),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed lesson")
    .id;

    let video_id = video_lessons::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Welcome".to_string()),
        lesson_id: Set(lesson_id),
        video: Set("videos/welcome.mp4".to_string()),
        order: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed video lesson")
    .id;

    (lesson_id, video_id)
}
