use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::auth::application::domain::entities::{PhoneNumber, User, UserId};
use crate::shared::timestamps::Timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub phone_number: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub password_set: bool,
    pub password_changed_at: Option<DateTimeWithTimeZone>,
    pub last_login: Option<DateTimeWithTimeZone>,
    pub date_joined: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profiles::Entity")]
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

        if insert && matches!(model.date_joined, NotSet) {
            model.date_joined = Set(chrono::Utc::now().fixed_offset());
        }
        crate::stamp_timestamps!(model, insert);

        Ok(model)
    }
}

impl Model {
    pub fn to_domain(self) -> User {
        User {
            id: UserId::from(self.id),
            phone_number: PhoneNumber::from_db(self.phone_number),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            password_hash: self.password_hash,
            is_staff: self.is_staff,
            is_active: self.is_active,
            is_superuser: self.is_superuser,
            password_set: self.password_set,
            password_changed_at: self.password_changed_at.map(|t| t.to_utc()),
            last_login: self.last_login.map(|t| t.to_utc()),
            date_joined: self.date_joined.to_utc(),
            timestamps: Timestamps::from_db(self.created_at, self.updated_at),
        }
    }
}
