//! # houndgen - Hound config generator
//!
//! `houndgen` reads the repository listing of a GitHub organization or user and
//! writes the `config.json` consumed by the Hound code-search indexer.
//!
//! ## Quick Start
//!
//! ```bash
//! export GITHUB_USER=indexer-bot
//! export GITHUB_TOKEN=ghp_...
//! houndgen generate --owner acme
//! ```
//!
//! This pages through `https://api.github.com/orgs/acme/repos`, moves an
//! existing `config.json` to `config.json.OLD`, and writes:
//!
//! ```json
//! {
//!   "dbpath": "data",
//!   "max-concurrent-indexers": 4,
//!   "repos": {
//!     "api": {
//!       "url": "git@github.com:acme/api.git"
//!     }
//!   }
//! }
//! ```
//!
//! `houndgen baseline --owner <user>` is the unauthenticated variant: it reads
//! only the first page of a user's public repositories and writes a config
//! without `max-concurrent-indexers` and without rotating the old file.
//!
//! ## Architecture
//!
//! - [`domain`]: entities ([`domain::entities::index_config::IndexConfig`],
//!   [`domain::entities::repo_catalog::RepoCatalog`]) and value objects
//!   ([`domain::value_objects::link_header::LinkHeader`])
//! - [`application`]: page-count resolution, catalog accumulation and the
//!   two generator use cases
//! - [`infrastructure`]: the GitHub listing client and the config store
//! - [`presentation`]: CLI interface
//! - [`common`]: error handling
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use houndgen::application::use_cases::generate_config::GenerateConfigUseCase;
//! use houndgen::domain::entities::generator_settings::{Credentials, GeneratorSettings};
//! use houndgen::infrastructure::github::client::GitHubListingClient;
//!
//! # async fn example() -> houndgen::Result<()> {
//! let settings = GeneratorSettings::new("acme")
//!     .with_credentials(Some(Credentials::new("indexer-bot", "token")))
//!     .validated()?;
//!
//! let client = GitHubListingClient::new(&settings)?;
//! let result = GenerateConfigUseCase::new(&settings, &client).execute().await?;
//!
//! println!("Indexed {} repositories from {} pages", result.repo_count, result.page_count);
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::HoundgenError;
pub use crate::common::result::HoundgenResult as Result;
