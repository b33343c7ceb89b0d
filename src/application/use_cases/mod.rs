pub mod baseline_config;
pub mod generate_config;
