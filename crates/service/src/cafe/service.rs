use std::sync::Arc;

use common::metrics::{CAFES_CREATED_TOTAL, CAFES_DELETED_TOTAL};
use models::cafe::{Model, NewCafe};
use tracing::{info, instrument, warn};

use crate::cafe::repository::CafeRepository;
use crate::errors::ServiceError;
use crate::pagination::Page;

pub const NO_CAFES: &str = "No cafes available";
pub const NO_CAFE_AT_LOCATION: &str = "Sorry, we don't have a cafe at the location";
pub const CAFE_NOT_FOUND: &str = "Cafe not found";
pub const INVALID_API_KEY: &str = "Forbidden: Invalid API Key";
pub const DELETED: &str = "Successfully deleted the cafe from the database.";

/// Strip surrounding single and double quotes from a `loc` query value.
/// Whitespace is significant and kept.
pub fn normalize_location(raw: &str) -> &str {
    raw.trim_matches(|c| c == '\'' || c == '"')
}

/// Application service for the cafe directory.
/// Turns empty results into `NotFound` and guards deletion with the shared API key.
pub struct CafeService<R: CafeRepository> {
    repo: Arc<R>,
    api_key: String,
}

impl<R: CafeRepository> CafeService<R> {
    pub fn new(repo: Arc<R>, api_key: impl Into<String>) -> Self {
        Self { repo, api_key: api_key.into() }
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Model>, ServiceError> {
        self.repo.list(page).await
    }

    pub async fn all(&self) -> Result<Vec<Model>, ServiceError> { self.repo.all().await }

    pub async fn random(&self) -> Result<Model, ServiceError> {
        self.repo.random().await?.ok_or_else(|| ServiceError::not_found(NO_CAFES))
    }

    #[instrument(skip(self))]
    pub async fn search(&self, loc: &str) -> Result<Vec<Model>, ServiceError> {
        let location = normalize_location(loc);
        let found = self.repo.find_by_location(location).await?;
        if found.is_empty() {
            return Err(ServiceError::not_found(NO_CAFE_AT_LOCATION));
        }
        Ok(found)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &NewCafe) -> Result<Model, ServiceError> {
        let created = self.repo.create(input).await?;
        CAFES_CREATED_TOTAL.inc();
        info!(id = created.id, "cafe created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn update_price(&self, id: i64, new_price: &str) -> Result<Model, ServiceError> {
        let updated = self
            .repo
            .update_price(id, new_price)
            .await?
            .ok_or_else(|| ServiceError::not_found(CAFE_NOT_FOUND))?;
        info!(id, "coffee price updated");
        Ok(updated)
    }

    /// Delete a cafe reported as closed. The key is checked before the store is touched.
    #[instrument(skip(self, api_key))]
    pub async fn report_closed(&self, id: i64, api_key: &str) -> Result<&'static str, ServiceError> {
        if api_key != self.api_key {
            warn!(id, "report_closed rejected: invalid api key");
            return Err(ServiceError::forbidden(INVALID_API_KEY));
        }
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(CAFE_NOT_FOUND));
        }
        CAFES_DELETED_TOTAL.inc();
        info!(id, "cafe deleted");
        Ok(DELETED)
    }
}
