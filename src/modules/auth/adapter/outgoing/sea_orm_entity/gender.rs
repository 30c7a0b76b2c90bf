use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(15))")]
pub enum GenderColumn {
    #[sea_orm(string_value = "male")]
    Male,

    #[sea_orm(string_value = "female")]
    Female,
}

impl From<Gender> for GenderColumn {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self::Male,
            Gender::Female => Self::Female,
        }
    }
}

impl From<GenderColumn> for Gender {
    fn from(column: GenderColumn) -> Self {
        match column {
            GenderColumn::Male => Self::Male,
            GenderColumn::Female => Self::Female,
        }
    }
}
