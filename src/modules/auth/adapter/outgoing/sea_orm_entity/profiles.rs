use sea_orm::entity::prelude::*;
use sea_orm::Set;

use super::gender::GenderColumn;
use crate::auth::application::domain::entities::{Profile, UserId};
use crate::auth::application::ports::outgoing::ProfileData;
use crate::common::adapter::outgoing::sea_orm_entity::regions;
use crate::shared::storage::StoredFile;
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub position_id: Option<Uuid>,
    pub region_id: Option<Uuid>,
    pub avatar: Option<String>,
    pub postal_code: Option<i32>,
    pub address: Option<String>,
    pub instagram_username: Option<String>,
    pub linkedin_username: Option<String>,
    pub gender: Option<GenderColumn>,
    pub birth_date: Option<Date>,
    pub work_place: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub about: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(
        belongs_to = "super::positions::Entity",
        from = "Column::PositionId",
        to = "super::positions::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Positions,

    #[sea_orm(
        belongs_to = "regions::Entity",
        from = "Column::RegionId",
        to = "regions::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Regions,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Positions.def()
    }
}

impl Related<regions::Entity> for Entity {
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

impl ActiveModel {
    /// Overwrites every editable column with `data`.
    pub fn apply(&mut self, data: ProfileData) {
        self.position_id = Set(data.position_id);
        self.region_id = Set(data.region_id);
        self.avatar = Set(data.avatar.map(StoredFile::into_inner));
        self.postal_code = Set(data.postal_code.and_then(|code| i32::try_from(code).ok()));
        self.address = Set(data.address);
        self.instagram_username = Set(data.instagram_username);
        self.linkedin_username = Set(data.linkedin_username);
        self.gender = Set(data.gender.map(GenderColumn::from));
        self.birth_date = Set(data.birth_date);
        self.work_place = Set(data.work_place);
        self.about = Set(data.about);
    }
}

impl Model {
    pub fn to_domain(self) -> Profile {
        Profile {
            id: self.id,
            user_id: UserId::from(self.user_id),
            position_id: self.position_id,
            region_id: self.region_id,
            avatar: self.avatar.map(StoredFile::from_db),
            postal_code: self.postal_code.and_then(|code| u32::try_from(code).ok()),
            address: self.address,
            instagram_username: self.instagram_username,
            linkedin_username: self.linkedin_username,
            gender: self.gender.map(Into::into),
            birth_date: self.birth_date,
            work_place: self.work_place,
            about: self.about,
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
