mod add_lesson_service;
mod add_video_lesson_service;
mod create_category_service;
mod create_course_service;
mod delete_course_service;
mod enroll_service;
mod finish_course_service;
mod issue_certificate_service;
mod list_course_lessons_service;
mod list_lesson_videos_service;
mod record_video_view_service;
mod replace_certificate_file_service;
mod review_course_service;
mod set_course_status_service;

pub use add_lesson_service::AddLessonService;
pub use add_video_lesson_service::AddVideoLessonService;
pub use create_category_service::CreateCategoryService;
pub use create_course_service::CreateCourseService;
pub use delete_course_service::DeleteCourseService;
pub use enroll_service::EnrollService;
pub use finish_course_service::FinishCourseService;
pub use issue_certificate_service::IssueCertificateService;
pub use list_course_lessons_service::ListCourseLessonsService;
pub use list_lesson_videos_service::ListLessonVideosService;
pub use record_video_view_service::RecordVideoViewService;
pub use replace_certificate_file_service::ReplaceCertificateFileService;
pub use review_course_service::ReviewCourseService;
pub use set_course_status_service::SetCourseStatusService;
