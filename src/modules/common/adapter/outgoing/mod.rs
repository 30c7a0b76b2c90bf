pub mod geo_query_postgres;
pub mod geo_repository_postgres;
pub mod sea_orm_entity;

pub use geo_query_postgres::GeoQueryPostgres;
pub use geo_repository_postgres::GeoRepositoryPostgres;
