pub mod generator_settings;
pub mod index_config;
pub mod repo_catalog;
pub mod repository;
