use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::Position;
use crate::auth::application::ports::outgoing::position_repository::{
    CreatePositionData, PositionRepository, PositionRepositoryError,
};
use crate::shared::db_error::is_unique_violation;

use super::sea_orm_entity::positions::ActiveModel as PositionActiveModel;

#[derive(Clone, Debug)]
pub struct PositionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PositionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PositionRepository for PositionRepositoryPostgres {
    async fn create_position(
        &self,
        data: CreatePositionData,
    ) -> Result<Position, PositionRepositoryError> {
        let active_position = PositionActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug.as_str().to_string()),
            ..Default::default()
        };

        let inserted = active_position.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                PositionRepositoryError::SlugTaken
            } else {
                error!("Failed to insert position: {}", e);
                PositionRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(inserted.to_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::positions::Model as PositionModel;
    use crate::auth::application::domain::entities::Slug;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn data() -> CreatePositionData {
        CreatePositionData {
            name: "Backend developer".to_string(),
            slug: Slug::new("backend-developer").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_position_success() {
        let now = Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![PositionModel {
                id: Uuid::new_v4(),
                name: "Backend developer".to_string(),
                slug: "backend-developer".to_string(),
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();

        let repo = PositionRepositoryPostgres::new(Arc::new(db));

        let position = repo.create_position(data()).await.unwrap();

        assert_eq!(position.slug.as_str(), "backend-developer");
    }

    #[tokio::test]
    async fn test_create_position_slug_taken() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"positions_slug_key\""
                    .to_string(),
            )])
            .into_connection();

        let repo = PositionRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.create_position(data()).await,
            Err(PositionRepositoryError::SlugTaken)
        ));
    }
}
