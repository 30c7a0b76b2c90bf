pub mod position_repository_postgres;
pub mod profile_query_postgres;
pub mod profile_repository_postgres;
pub mod sea_orm_entity;
pub mod security;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use position_repository_postgres::PositionRepositoryPostgres;
pub use profile_query_postgres::ProfileQueryPostgres;
pub use profile_repository_postgres::ProfileRepositoryPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
