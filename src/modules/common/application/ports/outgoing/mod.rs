mod geo_query;
mod geo_repository;

pub use geo_query::{GeoQuery, GeoQueryError};
pub use geo_repository::{CreateCountryData, CreateRegionData, GeoRepository, GeoRepositoryError};
