use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// Creation/update instants carried by every persisted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds the value from the offset-aware columns SeaORM hands back.
    pub fn from_db(created_at: DateTime<FixedOffset>, updated_at: DateTime<FixedOffset>) -> Self {
        Self {
            created_at: created_at.with_timezone(&Utc),
            updated_at: updated_at.with_timezone(&Utc),
        }
    }
}

pub trait Timestamped {
    fn timestamps(&self) -> &Timestamps;

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamps().created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps().updated_at
    }
}

/// Implements [`Timestamped`] for entities that embed a `timestamps` field.
#[macro_export]
macro_rules! impl_timestamped {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl $crate::shared::timestamps::Timestamped for $entity {
                fn timestamps(&self) -> &$crate::shared::timestamps::Timestamps {
                    &self.timestamps
                }
            }
        )+
    };
}

/// Shared `before_save` body for SeaORM active models: stamps both columns on
/// insert and refreshes `updated_at` on every update.
#[macro_export]
macro_rules! stamp_timestamps {
    ($model:ident, $insert:expr) => {{
        use sea_orm::ActiveValue::{NotSet, Set};

        let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().fixed_offset();
        if $insert {
            if matches!($model.created_at, NotSet) {
                $model.created_at = Set(now);
            }
            if matches!($model.updated_at, NotSet) {
                $model.updated_at = Set(now);
            }
        } else {
            $model.updated_at = Set(now);
        }
    }};
}
