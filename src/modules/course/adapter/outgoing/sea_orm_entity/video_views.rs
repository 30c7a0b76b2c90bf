use sea_orm::entity::prelude::*;

use crate::auth::adapter::outgoing::sea_orm_entity::profiles;
use crate::course::application::domain::entities::VideoView;
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "video_views")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub profile_id: Uuid,
    pub video_lesson_id: Uuid,
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
        belongs_to = "super::video_lessons::Entity",
        from = "Column::VideoLessonId",
        to = "super::video_lessons::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    VideoLessons,
}

impl Related<profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profiles.def()
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
    pub fn to_domain(self) -> VideoView {
        VideoView {
            id: self.id,
            profile_id: self.profile_id,
            video_lesson_id: self.video_lesson_id,
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
