use sea_orm::entity::prelude::*;
use tracing::warn;

use crate::auth::adapter::outgoing::sea_orm_entity::profiles;
use crate::course::application::domain::entities::{CourseReview, Rating};
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub profile_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub rating: i16,
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

    #[sea_orm(
        belongs_to = "profiles::Entity",
        from = "Column::ProfileId",
        to = "profiles::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Profiles,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profiles.def()
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
    pub fn to_domain(self) -> CourseReview {
        let rating = u8::try_from(self.rating)
            .ok()
            .and_then(|value| Rating::new(value).ok())
            .unwrap_or_else(|| {
                warn!("Review {} has out-of-range rating {}", self.id, self.rating);
                Rating::default()
            });

        CourseReview {
            id: self.id,
            course_id: self.course_id,
            profile_id: self.profile_id,
            comment: self.comment,
            rating,
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
