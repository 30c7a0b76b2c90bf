mod create_country_use_case;
mod create_region_use_case;
mod delete_country_use_case;
mod list_active_regions_use_case;

pub use create_country_use_case::{
    CreateCountryCommand, CreateCountryCommandError, CreateCountryError, CreateCountryUseCase,
};
pub use create_region_use_case::{
    CreateRegionCommand, CreateRegionCommandError, CreateRegionError, CreateRegionUseCase,
};
pub use delete_country_use_case::{DeleteCountryError, DeleteCountryUseCase};
pub use list_active_regions_use_case::{ListActiveRegionsError, ListActiveRegionsUseCase};
