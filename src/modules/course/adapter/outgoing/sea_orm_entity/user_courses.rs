use sea_orm::entity::prelude::*;

use crate::auth::adapter::outgoing::sea_orm_entity::profiles;
use crate::course::application::domain::entities::UserCourse;
use crate::shared::timestamps::Timestamps;

/// Enrollment row; unique on (profile_id, course_id).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub profile_id: Uuid,
    pub course_id: Uuid,
    pub is_finished: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "profiles::Entity",
        from = "Column::ProfileId",
        to = "profiles::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Profiles,

    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Courses,

    #[sea_orm(has_one = "super::course_certificates::Entity")]
    CourseCertificates,
}

impl Related<profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profiles.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::course_certificates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseCertificates.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut model = self;
        crate::stamp_timestamps!(model, insert);
        Ok(model)
    }
}

impl Model {
    pub fn to_domain(self) -> UserCourse {
        UserCourse {
            id: self.id,
            profile_id: self.profile_id,
            course_id: self.course_id,
            is_finished: self.is_finished,
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
