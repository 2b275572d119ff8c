pub mod cache;
pub mod cli;
pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod service;

pub use error::{GrowOpsError, Result};
pub use service::FarmIntelligenceService;
