//! Campus Admin Library
//!
//! This crate provides the core engine of the Campus administrative
//! front-end: typed resource models, the backend API gateway, per-entity
//! services, and the generic form/list/detail controllers that screens are
//! rendered from.

use std::sync::Arc;

pub mod config;
pub mod controllers;
pub mod forms;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

pub use config::AppConfig;
pub use routes::Route;
pub use utils::{AppError, AppResult};

use models::Resource;
use services::{ApiGateway, ResourceService};

/// Application state shared across screens
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Backend API gateway, constructed once at startup
    pub gateway: Arc<ApiGateway>,
}

impl AppState {
    /// Construct the process-wide state
    pub fn initialize(config: AppConfig) -> anyhow::Result<Self> {
        let gateway = Arc::new(ApiGateway::new(&config.api)?);
        Ok(Self { config, gateway })
    }

    /// Typed service for one entity, sharing the process-wide gateway
    pub fn service<R: Resource>(&self) -> ResourceService<R> {
        ResourceService::new(Arc::clone(&self.gateway))
    }
}
