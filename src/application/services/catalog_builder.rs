use crate::common::error::HoundgenError;
use crate::common::result::HoundgenResult;
use crate::domain::entities::repo_catalog::RepoCatalog;
use crate::domain::entities::repository::{RemoteRepo, RepoEntry};
use crate::domain::value_objects::listing_kind::UrlKind;
use std::collections::BTreeMap;
use tracing::debug;

/// Accumulates listing pages into a [`RepoCatalog`]
///
/// The catalog only becomes visible through [`RepoCatalogBuilder::build`],
/// which consumes the builder.
#[derive(Debug, Default)]
pub struct RepoCatalogBuilder {
    url_kind: UrlKind,
    repos: BTreeMap<String, RepoEntry>,
    replaced: usize,
}

impl RepoCatalogBuilder {
    pub fn new(url_kind: UrlKind) -> Self {
        Self {
            url_kind,
            repos: BTreeMap::new(),
            replaced: 0,
        }
    }

    /// Insert one entry; a later entry with the same name replaces the earlier one
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) -> HoundgenResult<()> {
        let name = name.into();
        let url = url.into();

        if name.trim().is_empty() {
            return Err(HoundgenError::listing_error(
                "Repository with an empty name",
                None,
            ));
        }
        if url.trim().is_empty() {
            return Err(HoundgenError::listing_error(
                format!("Repository '{}' has an empty URL", name),
                None,
            ));
        }

        if self.repos.insert(name.clone(), RepoEntry::new(url)).is_some() {
            debug!(repo = %name, "Duplicate repository name, keeping the later entry");
            self.replaced += 1;
        }
        Ok(())
    }

    /// Add every repository of one listing page, returning how many were added
    pub fn add_page(&mut self, page: Option<u32>, repos: &[RemoteRepo]) -> HoundgenResult<usize> {
        for repo in repos {
            let url = repo.url(self.url_kind).ok_or_else(|| {
                HoundgenError::listing_error(
                    format!(
                        "Repository '{}' has no {}",
                        repo.name,
                        self.url_kind.field_name()
                    ),
                    page,
                )
            })?;
            self.insert(repo.name.as_str(), url).map_err(|e| match e {
                HoundgenError::ListingError {
                    message, source, ..
                } => HoundgenError::ListingError {
                    message,
                    page,
                    source,
                },
                other => other,
            })?;
        }
        Ok(repos.len())
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Number of inserts that replaced an existing name
    pub fn replaced_count(&self) -> usize {
        self.replaced
    }

    pub fn build(self) -> RepoCatalog {
        RepoCatalog::from_map(self.repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repo(name: &str, url: &str) -> RemoteRepo {
        RemoteRepo::new(name)
            .with_clone_url(url)
            .with_ssh_url(format!("git@example.com:{}.git", name))
    }

    #[test]
    fn test_pages_are_unioned() {
        let mut builder = RepoCatalogBuilder::new(UrlKind::Clone);
        builder.add_page(Some(1), &[repo("a", "u1")]).unwrap();
        builder.add_page(Some(2), &[repo("b", "u2")]).unwrap();

        let catalog = builder.build();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            serde_json::to_string(&catalog).unwrap(),
            r#"{"a":{"url":"u1"},"b":{"url":"u2"}}"#
        );
    }

    #[test]
    fn test_url_kind_selects_field() {
        let mut builder = RepoCatalogBuilder::new(UrlKind::Ssh);
        builder.add_page(None, &[repo("api", "https://x/api.git")]).unwrap();
        assert_eq!(
            builder.build().get("api").unwrap().url,
            "git@example.com:api.git"
        );
    }

    #[test]
    fn test_duplicates_keep_later_entry() {
        let mut builder = RepoCatalogBuilder::new(UrlKind::Clone);
        builder.add_page(Some(1), &[repo("a", "old")]).unwrap();
        builder.add_page(Some(2), &[repo("a", "new")]).unwrap();

        assert_eq!(builder.replaced_count(), 1);
        let catalog = builder.build();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().url, "new");
    }

    #[test]
    fn test_missing_url_reports_page() {
        let mut builder = RepoCatalogBuilder::new(UrlKind::Ssh);
        let error = builder
            .add_page(Some(3), &[RemoteRepo::new("bare").with_clone_url("u")])
            .unwrap_err();
        match error {
            HoundgenError::ListingError { message, page, .. } => {
                assert_eq!(page, Some(3));
                assert_eq!(message, "Repository 'bare' has no ssh_url");
            }
            other => panic!("Expected ListingError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut builder = RepoCatalogBuilder::new(UrlKind::Clone);
        let error = builder.add_page(Some(2), &[repo(" ", "u")]).unwrap_err();
        assert!(matches!(
            error,
            HoundgenError::ListingError { page: Some(2), .. }
        ));
        assert!(builder.is_empty());
    }
}
