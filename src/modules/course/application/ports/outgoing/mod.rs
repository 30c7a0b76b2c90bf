mod catalog_query;
mod catalog_repository;
mod enrollment_repository;

pub use catalog_query::{CatalogQuery, CatalogQueryError};
pub use catalog_repository::{
    CatalogRepository, CatalogRepositoryError, CreateCategoryData, CreateCourseData,
    CreateLessonData, CreateVideoLessonData,
};
pub use enrollment_repository::{CreateReviewData, EnrollmentRepository, EnrollmentRepositoryError};
