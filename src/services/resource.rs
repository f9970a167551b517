//! Generic per-entity resource service
//!
//! Translates domain operations into API gateway calls for one entity type.
//! Holds no state beyond the shared gateway handle and no cache; repeated
//! calls always re-fetch.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use crate::models::{Resource, ToggleStatus};
use crate::services::filter::ListFilter;
use crate::services::gateway::ApiGateway;
use crate::utils::{AppError, AppResult};

/// Typed service for one entity's backend endpoints
#[derive(Debug)]
pub struct ResourceService<R: Resource> {
    gateway: Arc<ApiGateway>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            _resource: PhantomData,
        }
    }

    /// Fetch a filtered collection
    pub async fn list(&self, filter: &ListFilter) -> AppResult<Vec<R::Record>> {
        debug!(endpoint = R::ENDPOINT, "list");
        self.gateway
            .get(&format!("/{}", R::ENDPOINT), &filter.to_query_string())
            .await
    }

    /// Fetch one record by id
    pub async fn get(&self, id: i64) -> AppResult<R::Record> {
        debug!(endpoint = R::ENDPOINT, id, "get");
        self.gateway
            .get(&format!("/{}/{}", R::ENDPOINT, id), "")
            .await
            .map_err(|err| match err {
                AppError::NotFound(_) => AppError::NotFound(R::SINGULAR.to_string()),
                other => other,
            })
    }

    /// Create a record from a writable projection
    pub async fn create(&self, data: &R::FormData) -> AppResult<R::Record> {
        debug!(endpoint = R::ENDPOINT, "create");
        self.gateway.post(&format!("/{}", R::ENDPOINT), data).await
    }

    /// Update a record; fields absent from the projection stay unchanged
    /// (merge semantics belong to the backend)
    pub async fn update(&self, id: i64, data: &R::FormData) -> AppResult<R::Record> {
        debug!(endpoint = R::ENDPOINT, id, "update");
        self.gateway
            .put(&format!("/{}/{}", R::ENDPOINT, id), data)
            .await
    }

    /// Delete or deactivate a record; soft vs. hard is backend policy
    pub async fn remove(&self, id: i64) -> AppResult<()> {
        debug!(endpoint = R::ENDPOINT, id, "remove");
        self.gateway
            .delete(&format!("/{}/{}", R::ENDPOINT, id))
            .await
            .map_err(|err| match err {
                AppError::NotFound(_) => AppError::NotFound(R::SINGULAR.to_string()),
                other => other,
            })
    }
}

impl<R: ToggleStatus> ResourceService<R> {
    /// Flip the record's active flag server-side
    pub async fn toggle_status(&self, id: i64) -> AppResult<R::Record> {
        debug!(endpoint = R::ENDPOINT, id, "toggle status");
        self.gateway
            .put(
                &format!("/{}/{}/toggle-status", R::ENDPOINT, id),
                &serde_json::json!({}),
            )
            .await
    }
}
