use async_trait::async_trait;
use uuid::Uuid;

use crate::common::application::{
    domain::entities::Region,
    ports::{
        incoming::use_cases::{ListActiveRegionsError, ListActiveRegionsUseCase},
        outgoing::GeoQuery,
    },
};

#[derive(Debug, Clone)]
pub struct ListActiveRegionsService<Q>
where
    Q: GeoQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListActiveRegionsService<Q>
where
    Q: GeoQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListActiveRegionsUseCase for ListActiveRegionsService<Q>
where
    Q: GeoQuery + Send + Sync,
{
    async fn execute(&self, country_id: Uuid) -> Result<Vec<Region>, ListActiveRegionsError> {
        let country = self
            .query
            .find_country(country_id)
            .await
            .map_err(|e| ListActiveRegionsError::QueryError(e.to_string()))?;

        if country.is_none() {
            return Err(ListActiveRegionsError::CountryNotFound);
        }

        self.query
            .list_active_regions(country_id)
            .await
            .map_err(|e| ListActiveRegionsError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::common::application::{
        domain::entities::{Country, CountryCode},
        ports::outgoing::GeoQueryError,
    };
    use crate::shared::timestamps::Timestamps;

    #[derive(Clone)]
    struct MockGeoQuery {
        country: Option<Country>,
        regions: Vec<Region>,
    }

    #[async_trait]
    impl GeoQuery for MockGeoQuery {
        async fn find_country(&self, _country_id: Uuid) -> Result<Option<Country>, GeoQueryError> {
            Ok(self.country.clone())
        }

        async fn list_active_regions(
            &self,
            _country_id: Uuid,
        ) -> Result<Vec<Region>, GeoQueryError> {
            Ok(self.regions.clone())
        }
    }

    fn country(id: Uuid) -> Country {
        Country {
            id,
            name: "Uzbekistan".to_string(),
            code: CountryCode::new("UZ").unwrap(),
            is_active: true,
            timestamps: Timestamps::now(),
        }
    }

    fn region(country_id: Uuid, name: &str) -> Region {
        Region {
            id: Uuid::new_v4(),
            name: name.to_string(),
            soato: format!("soato-{name}"),
            country_id,
            is_active: true,
            timestamps: Timestamps::now(),
        }
    }

    #[tokio::test]
    async fn returns_regions_of_existing_country() {
        let country_id = Uuid::new_v4();
        let service = ListActiveRegionsService::new(MockGeoQuery {
            country: Some(country(country_id)),
            regions: vec![region(country_id, "Andijan"), region(country_id, "Bukhara")],
        });

        let regions = service.execute(country_id).await.unwrap();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].name, "Andijan");
    }

    #[tokio::test]
    async fn unknown_country_is_reported() {
        let service = ListActiveRegionsService::new(MockGeoQuery {
            country: None,
            regions: vec![],
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ListActiveRegionsError::CountryNotFound)));
    }
}
