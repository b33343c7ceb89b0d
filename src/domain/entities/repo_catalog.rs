use super::repository::RepoEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name-ordered mapping of repositories to index
///
/// Instances are only produced by
/// [`RepoCatalogBuilder`](crate::application::services::catalog_builder::RepoCatalogBuilder)
/// or by deserializing an existing config, and cannot be mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoCatalog {
    repos: BTreeMap<String, RepoEntry>,
}

impl RepoCatalog {
    pub(crate) fn from_map(repos: BTreeMap<String, RepoEntry>) -> Self {
        Self { repos }
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RepoEntry> {
        self.repos.get(name)
    }
}
