use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::{Position, Slug};
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "positions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::profiles::Entity")]
    Profiles,
}

impl Related<super::profiles::Entity> for Entity {
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
    pub fn to_domain(self) -> Position {
        Position {
            id: self.id,
            name: self.name,
            slug: Slug::from_db(self.slug),
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
