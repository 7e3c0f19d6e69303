//! Configuration and storage for the storefront client
//!
//! This crate provides:
//! - File path utilities for data and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig, PricingConfig)
//! - Key-value storage backends the client state is persisted to

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod storage;

pub use app_config::{AppConfig, PricingConfig};
pub use config_file::load_config_file;
pub use paths::{cache_dir, data_dir, default_storage_path};
pub use storage::{load_json, save_json, FileStorage, KeyValueStorage, MemoryStorage};
