use sea_orm::entity::prelude::*;
use tracing::warn;

use crate::common::adapter::outgoing::sea_orm_entity::moderation_status::ModerationStatusColumn;
use crate::course::application::domain::entities::Course;
use crate::shared::storage::StoredFile;
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub main_image: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub about: Option<String>,
    pub price: i32,
    pub moderation_status: ModerationStatusColumn,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Categories,

    #[sea_orm(has_many = "super::lessons::Entity")]
    Lessons,

    #[sea_orm(has_many = "super::user_courses::Entity")]
    UserCourses,

    #[sea_orm(has_many = "super::course_reviews::Entity")]
    CourseReviews,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl Related<super::user_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCourses.def()
    }
}

impl Related<super::course_reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseReviews.def()
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
    pub fn to_domain(self) -> Course {
        let price = u32::try_from(self.price).unwrap_or_else(|_| {
            warn!("Course {} has negative price {}", self.id, self.price);
            0
        });

        Course {
            id: self.id,
            name: self.name,
            category_id: self.category_id,
            main_image: StoredFile::from_db(self.main_image),
            about: self.about,
            price,
            moderation_status: self.moderation_status.into(),
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
