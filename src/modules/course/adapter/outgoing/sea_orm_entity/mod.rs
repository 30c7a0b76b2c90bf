pub mod categories;
pub mod course_certificates;
pub mod course_reviews;
pub mod courses;
pub mod lessons;
pub mod user_courses;
pub mod video_lessons;
pub mod video_views;
