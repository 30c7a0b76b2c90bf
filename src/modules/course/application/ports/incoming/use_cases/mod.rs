mod add_lesson_use_case;
mod add_video_lesson_use_case;
mod create_category_use_case;
mod create_course_use_case;
mod delete_course_use_case;
mod enroll_use_case;
mod finish_course_use_case;
mod issue_certificate_use_case;
mod list_course_lessons_use_case;
mod list_lesson_videos_use_case;
mod record_video_view_use_case;
mod replace_certificate_file_use_case;
mod review_course_use_case;
mod set_course_status_use_case;

pub use add_lesson_use_case::{AddLessonCommand, AddLessonCommandError, AddLessonError, AddLessonUseCase};
pub use add_video_lesson_use_case::{
    AddVideoLessonCommand, AddVideoLessonCommandError, AddVideoLessonError, AddVideoLessonUseCase,
};
pub use create_category_use_case::{
    CreateCategoryCommand, CreateCategoryCommandError, CreateCategoryError, CreateCategoryUseCase,
};
pub use create_course_use_case::{
    CreateCourseCommand, CreateCourseCommandError, CreateCourseError, CreateCourseUseCase,
};
pub use delete_course_use_case::{DeleteCourseError, DeleteCourseUseCase};
pub use enroll_use_case::{EnrollError, EnrollUseCase};
pub use finish_course_use_case::{FinishCourseError, FinishCourseUseCase};
pub use issue_certificate_use_case::{IssueCertificateError, IssueCertificateUseCase};
pub use list_course_lessons_use_case::{ListCourseLessonsError, ListCourseLessonsUseCase};
pub use list_lesson_videos_use_case::{ListLessonVideosError, ListLessonVideosUseCase};
pub use record_video_view_use_case::{RecordVideoViewError, RecordVideoViewUseCase};
pub use replace_certificate_file_use_case::{
    ReplaceCertificateFileError, ReplaceCertificateFileUseCase,
};
pub use review_course_use_case::{
    ReviewCourseCommand, ReviewCourseCommandError, ReviewCourseError, ReviewCourseUseCase,
};
pub use set_course_status_use_case::{SetCourseStatusError, SetCourseStatusUseCase};
