use sea_orm::entity::prelude::*;

use crate::course::application::domain::entities::Category;
use crate::shared::storage::StoredFile;
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
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
    pub fn to_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            icon: self.icon.map(StoredFile::from_db),
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
