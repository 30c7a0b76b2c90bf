pub mod catalog_query_postgres;
pub mod catalog_repository_postgres;
pub mod enrollment_repository_postgres;
pub mod sea_orm_entity;

pub use catalog_query_postgres::CatalogQueryPostgres;
pub use catalog_repository_postgres::CatalogRepositoryPostgres;
pub use enrollment_repository_postgres::EnrollmentRepositoryPostgres;
