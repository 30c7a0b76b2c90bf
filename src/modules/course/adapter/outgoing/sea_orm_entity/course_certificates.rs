use sea_orm::entity::prelude::*;

use crate::course::application::domain::entities::CourseCertificate;
use crate::shared::storage::StoredFile;
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_certificates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_course_id: Uuid,
    pub certificate: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_courses::Entity",
        from = "Column::UserCourseId",
        to = "super::user_courses::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    UserCourses,
}

impl Related<super::user_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCourses.def()
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
    pub fn to_domain(self) -> CourseCertificate {
        CourseCertificate {
            id: self.id,
            user_course_id: self.user_course_id,
            certificate: StoredFile::from_db(self.certificate),
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
