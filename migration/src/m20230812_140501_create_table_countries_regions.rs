use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // countries
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Countries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Countries::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Countries::Code).string_len(2).not_null())
                    .col(
                        ColumnDef::new(Countries::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Countries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Countries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // regions
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Regions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Regions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Regions::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Regions::Soato)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Regions::CountryId).uuid().not_null())
                    .col(
                        ColumnDef::new(Regions::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Regions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Regions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // FK → countries
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_regions_country_id")
                            .from(Regions::Table, Regions::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // All regions of a country
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_regions_country_id")
                    .table(Regions::Table)
                    .col(Regions::CountryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Regions::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Countries::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Id,
    Name,
    Code,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Regions {
    Table,
    Id,
    Name,
    Soato,
    CountryId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
