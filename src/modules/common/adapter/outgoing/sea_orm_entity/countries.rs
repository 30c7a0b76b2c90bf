use sea_orm::entity::prelude::*;

use crate::common::application::domain::entities::{Country, CountryCode};
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(2))")]
    pub code: String,

    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::regions::Entity")]
    Regions,
}

impl Related<super::regions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Regions.def()
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
    pub fn to_domain(self) -> Country {
        Country {
            id: self.id,
            name: self.name,
            code: CountryCode::from_db(self.code),
            is_active: self.is_active,
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
