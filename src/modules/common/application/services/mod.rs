mod create_country_service;
mod create_region_service;
mod delete_country_service;
mod list_active_regions_service;

pub use create_country_service::CreateCountryService;
pub use create_region_service::CreateRegionService;
pub use delete_country_service::DeleteCountryService;
pub use list_active_regions_service::ListActiveRegionsService;
