pub use sea_orm_migration::prelude::*;

mod m20230812_140501_create_table_countries_regions;
mod m20230812_140502_create_table_users_profiles;
mod m20230812_140503_create_table_catalog;
mod m20230812_140504_create_table_engagement;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230812_140501_create_table_countries_regions::Migration),
            Box::new(m20230812_140502_create_table_users_profiles::Migration),
            Box::new(m20230812_140503_create_table_catalog::Migration),
            Box::new(m20230812_140504_create_table_engagement::Migration),
        ]
    }
}
