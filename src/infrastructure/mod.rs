/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Repository listing over the GitHub REST API
/// - Config file storage and rotation
pub mod filesystem;
pub mod github;

// Re-export commonly used types
pub use filesystem::config_store::{ConfigStore, WriteOutcome};
pub use github::{
    client::GitHubListingClient,
    listing_source::{ListingPage, RepoListingSource},
};
