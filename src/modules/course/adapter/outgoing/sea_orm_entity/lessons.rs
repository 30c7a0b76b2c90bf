use sea_orm::entity::prelude::*;
use tracing::warn;

use crate::common::adapter::outgoing::sea_orm_entity::moderation_status::ModerationStatusColumn;
use crate::course::application::domain::entities::Lesson;
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub course_id: Uuid,
    pub order: i32,
    pub moderation_status: ModerationStatusColumn,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Courses,

    #[sea_orm(has_many = "super::video_lessons::Entity")]
    VideoLessons,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::video_lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VideoLessons.def()
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
    pub fn to_domain(self) -> Lesson {
        let order = u32::try_from(self.order).unwrap_or_else(|_| {
            warn!("Lesson {} has negative order {}", self.id, self.order);
            0
        });

        Lesson {
            id: self.id,
            name: self.name,
            course_id: self.course_id,
            order,
            moderation_status: self.moderation_status.into(),
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
