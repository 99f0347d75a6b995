use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::cafe::{Model, NewCafe};
use crate::{db::cafe_service, errors::ServiceError, pagination::Page};

#[async_trait]
pub trait CafeRepository: Send + Sync {
    async fn list(&self, page: Page) -> Result<Vec<Model>, ServiceError>;
    async fn all(&self) -> Result<Vec<Model>, ServiceError>;
    async fn random(&self) -> Result<Option<Model>, ServiceError>;
    async fn find_by_location(&self, location: &str) -> Result<Vec<Model>, ServiceError>;
    async fn create(&self, input: &NewCafe) -> Result<Model, ServiceError>;
    async fn update_price(&self, id: i64, new_price: &str) -> Result<Option<Model>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCafeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCafeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CafeRepository for SeaOrmCafeRepository {
    async fn list(&self, page: Page) -> Result<Vec<Model>, ServiceError> {
        cafe_service::list_cafes(&self.db, page).await
    }

    async fn all(&self) -> Result<Vec<Model>, ServiceError> {
        cafe_service::all_cafes(&self.db).await
    }

    async fn random(&self) -> Result<Option<Model>, ServiceError> {
        cafe_service::random_cafe(&self.db).await
    }

    async fn find_by_location(&self, location: &str) -> Result<Vec<Model>, ServiceError> {
        cafe_service::find_by_location(&self.db, location).await
    }

    async fn create(&self, input: &NewCafe) -> Result<Model, ServiceError> {
        cafe_service::create_cafe(&self.db, input).await
    }

    async fn update_price(&self, id: i64, new_price: &str) -> Result<Option<Model>, ServiceError> {
        cafe_service::update_price(&self.db, id, new_price).await
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        cafe_service::delete_cafe(&self.db, id).await
    }
}
