use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // user_courses (enrollments)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(UserCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserCourses::ProfileId).uuid().not_null())
                    .col(ColumnDef::new(UserCourses::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserCourses::IsFinished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserCourses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserCourses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // FK → profiles
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_courses_profile_id")
                            .from(UserCourses::Table, UserCourses::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → courses
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_courses_course_id")
                            .from(UserCourses::Table, UserCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One enrollment per (profile, course)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_user_courses_profile_course")
                    .table(UserCourses::Table)
                    .col(UserCourses::ProfileId)
                    .col(UserCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // video_views
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(VideoViews::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VideoViews::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(VideoViews::ProfileId).uuid().not_null())
                    .col(ColumnDef::new(VideoViews::VideoLessonId).uuid().not_null())
                    .col(
                        ColumnDef::new(VideoViews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VideoViews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_views_profile_id")
                            .from(VideoViews::Table, VideoViews::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_views_video_lesson_id")
                            .from(VideoViews::Table, VideoViews::VideoLessonId)
                            .to(VideoLessons::Table, VideoLessons::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One view per (profile, video lesson)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_video_views_profile_video_lesson")
                    .table(VideoViews::Table)
                    .col(VideoViews::ProfileId)
                    .col(VideoViews::VideoLessonId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // course_certificates (1:1 with user_courses)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CourseCertificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseCertificates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseCertificates::UserCourseId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CourseCertificates::Certificate)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseCertificates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseCertificates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_certificates_user_course_id")
                            .from(CourseCertificates::Table, CourseCertificates::UserCourseId)
                            .to(UserCourses::Table, UserCourses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // course_reviews
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CourseReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseReviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseReviews::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseReviews::ProfileId).uuid().not_null())
                    .col(ColumnDef::new(CourseReviews::Comment).text().not_null())
                    .col(
                        ColumnDef::new(CourseReviews::Rating)
                            .small_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(CourseReviews::Rating).between(0, 5)),
                    )
                    .col(
                        ColumnDef::new(CourseReviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseReviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_reviews_course_id")
                            .from(CourseReviews::Table, CourseReviews::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_reviews_profile_id")
                            .from(CourseReviews::Table, CourseReviews::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One review per (course, profile)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_course_reviews_course_profile")
                    .table(CourseReviews::Table)
                    .col(CourseReviews::CourseId)
                    .col(CourseReviews::ProfileId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseReviews::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(CourseCertificates::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VideoViews::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserCourses::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserCourses {
    Table,
    Id,
    ProfileId,
    CourseId,
    IsFinished,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum VideoViews {
    Table,
    Id,
    ProfileId,
    VideoLessonId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseCertificates {
    Table,
    Id,
    UserCourseId,
    Certificate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseReviews {
    Table,
    Id,
    CourseId,
    ProfileId,
    Comment,
    Rating,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum VideoLessons {
    Table,
    Id,
}
