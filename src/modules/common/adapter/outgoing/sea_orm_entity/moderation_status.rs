use sea_orm::entity::prelude::*;

use crate::common::application::domain::entities::ModerationStatus;

/// Column representation of [`ModerationStatus`], stored as plain text so the
/// schema stays portable between Postgres and SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ModerationStatusColumn {
    #[sea_orm(string_value = "in_moderation")]
    InModeration,

    #[sea_orm(string_value = "active")]
    Active,

    #[sea_orm(string_value = "inactive")]
    Inactive,
}

impl From<ModerationStatus> for ModerationStatusColumn {
    fn from(status: ModerationStatus) -> Self {
        match status {
            ModerationStatus::InModeration => Self::InModeration,
            ModerationStatus::Active => Self::Active,
            ModerationStatus::Inactive => Self::Inactive,
        }
    }
}

impl From<ModerationStatusColumn> for ModerationStatus {
    fn from(column: ModerationStatusColumn) -> Self {
        match column {
            ModerationStatusColumn::InModeration => Self::InModeration,
            ModerationStatusColumn::Active => Self::Active,
            ModerationStatusColumn::Inactive => Self::Inactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn column_values_match_domain_strings() {
        for status in [
            ModerationStatus::InModeration,
            ModerationStatus::Active,
            ModerationStatus::Inactive,
        ] {
            let column = ModerationStatusColumn::from(status);
            assert_eq!(column.to_value(), status.as_str());
            assert_eq!(ModerationStatus::from(column), status);
        }
    }
}
