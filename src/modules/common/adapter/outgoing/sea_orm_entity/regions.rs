use sea_orm::entity::prelude::*;

use crate::common::application::domain::entities::Region;
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "regions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(255))", unique)]
    pub soato: String,

    #[sea_orm(column_type = "Uuid")]
    pub country_id: Uuid,

    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::countries::Entity",
        from = "Column::CountryId",
        to = "super::countries::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Countries,
}

impl Related<super::countries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Countries.def()
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
    pub fn to_domain(self) -> Region {
        Region {
            id: self.id,
            name: self.name,
            soato: self.soato,
            country_id: self.country_id,
            is_active: self.is_active,
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
