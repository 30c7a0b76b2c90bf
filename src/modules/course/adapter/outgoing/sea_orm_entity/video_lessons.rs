use sea_orm::entity::prelude::*;
use tracing::warn;

use crate::course::application::domain::entities::VideoLesson;
use crate::shared::storage::StoredFile;
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "video_lessons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub lesson_id: Uuid,
    pub video: String,
    pub order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lessons::Entity",
        from = "Column::LessonId",
        to = "super::lessons::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lessons,

    #[sea_orm(has_many = "super::video_views::Entity")]
    VideoViews,
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl Related<super::video_views::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VideoViews.def()
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
    pub fn to_domain(self) -> VideoLesson {
        let order = u32::try_from(self.order).unwrap_or_else(|_| {
            warn!("Video lesson {} has negative order {}", self.id, self.order);
            0
        });

        VideoLesson {
            id: self.id,
            name: self.name,
            lesson_id: self.lesson_id,
            video: StoredFile::from_db(self.video),
            order,
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
