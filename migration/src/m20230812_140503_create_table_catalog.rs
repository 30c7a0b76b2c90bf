use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // categories
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Categories::Icon).string_len(255).null())
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Categories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // courses
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Courses::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(Courses::MainImage).string_len(255).not_null())
                    .col(ColumnDef::new(Courses::About).text().null())
                    .col(
                        ColumnDef::new(Courses::Price)
                            .integer()
                            .not_null()
                            .check(Expr::col(Courses::Price).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Courses::ModerationStatus)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // FK → categories
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_category_id")
                            .from(Courses::Table, Courses::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_category_id")
                    .table(Courses::Table)
                    .col(Courses::CategoryId)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // lessons
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Lessons::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Lessons::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Lessons::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Lessons::Order)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Lessons::Order).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Lessons::ModerationStatus)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Lessons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Lessons::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // FK → courses
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lessons_course_id")
                            .from(Lessons::Table, Lessons::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Ordered lesson listing per course
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lessons_course_id_order")
                    .table(Lessons::Table)
                    .col(Lessons::CourseId)
                    .col(Lessons::Order)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // video_lessons
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(VideoLessons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VideoLessons::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VideoLessons::Name).string_len(255).not_null())
                    .col(ColumnDef::new(VideoLessons::LessonId).uuid().not_null())
                    .col(ColumnDef::new(VideoLessons::Video).string_len(255).not_null())
                    .col(
                        ColumnDef::new(VideoLessons::Order)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(VideoLessons::Order).gte(0)),
                    )
                    .col(
                        ColumnDef::new(VideoLessons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VideoLessons::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // FK → lessons
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_lessons_lesson_id")
                            .from(VideoLessons::Table, VideoLessons::LessonId)
                            .to(Lessons::Table, Lessons::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_video_lessons_lesson_id_order")
                    .table(VideoLessons::Table)
                    .col(VideoLessons::LessonId)
                    .col(VideoLessons::Order)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VideoLessons::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Lessons::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Categories::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Icon,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Name,
    CategoryId,
    MainImage,
    About,
    Price,
    ModerationStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Lessons {
    Table,
    Id,
    Name,
    CourseId,
    Order,
    ModerationStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum VideoLessons {
    Table,
    Id,
    Name,
    LessonId,
    Video,
    Order,
    CreatedAt,
    UpdatedAt,
}
