//! Backend access services

pub mod filter;
pub mod gateway;
pub mod resource;

pub use filter::ListFilter;
pub use gateway::{ApiGateway, Envelope};
pub use resource::ResourceService;
