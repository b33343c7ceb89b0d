use crate::application::services::catalog_builder::RepoCatalogBuilder;
use crate::application::services::pagination::resolve_page_count;
use crate::common::result::HoundgenResult;
use crate::domain::entities::generator_settings::GeneratorSettings;
use crate::domain::entities::index_config::IndexConfig;
use crate::infrastructure::filesystem::config_store::ConfigStore;
use crate::infrastructure::github::listing_source::RepoListingSource;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Outcome of a single-page baseline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineConfigResult {
    pub repo_count: usize,
    pub output_path: PathBuf,

    /// Pages the listing advertised beyond the first one; never fetched
    pub skipped_pages: u32,
}

/// Unauthenticated single-page generator
///
/// Only the first page of the listing is read. Owners with more
/// repositories than one page holds end up with a partial config; the
/// skipped page count is logged and reported but the pages are not fetched.
pub struct BaselineConfigUseCase<'a> {
    settings: &'a GeneratorSettings,
    source: &'a dyn RepoListingSource,
}

impl<'a> BaselineConfigUseCase<'a> {
    pub fn new(settings: &'a GeneratorSettings, source: &'a dyn RepoListingSource) -> Self {
        Self { settings, source }
    }

    pub async fn execute(&self) -> HoundgenResult<BaselineConfigResult> {
        info!(source = %self.source.describe(), "Generating baseline indexer config");

        let listing = self.source.fetch_page(None).await?;

        let skipped_pages = match resolve_page_count(listing.link_header.as_deref()) {
            Ok(pages) => pages.saturating_sub(1),
            Err(e) => {
                debug!(error = %e, "Could not determine page count");
                0
            }
        };
        if skipped_pages > 0 {
            warn!(
                skipped_pages,
                "Listing spans more than one page; only the first page is included"
            );
        }

        let mut builder = RepoCatalogBuilder::new(self.settings.url_kind);
        builder.add_page(None, &listing.repos)?;
        let config = IndexConfig::new(self.settings.dbpath.clone(), builder.build());

        let store = ConfigStore::new(&self.settings.output_path).with_rotate(false);
        let outcome = store.write(&config).await?;

        Ok(BaselineConfigResult {
            repo_count: config.repos.len(),
            output_path: outcome.path,
            skipped_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::repository::RemoteRepo;
    use crate::infrastructure::github::listing_source::ListingPage;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    struct FirstPageOnly(ListingPage);

    #[async_trait]
    impl RepoListingSource for FirstPageOnly {
        async fn fetch_page(&self, page: Option<u32>) -> HoundgenResult<ListingPage> {
            assert_eq!(page, None, "baseline must not request explicit pages");
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "first-page".to_string()
        }
    }

    #[tokio::test]
    async fn test_writes_minimal_config_without_rotation() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("config.json");
        std::fs::write(&output, "old").unwrap();
        let settings = GeneratorSettings::baseline("porch").with_output_path(&output);
        let source = FirstPageOnly(ListingPage::new(vec![
            RemoteRepo::new("web").with_clone_url("https://github.com/porch/web.git"),
        ]));

        let result = BaselineConfigUseCase::new(&settings, &source)
            .execute()
            .await
            .unwrap();

        assert_eq!(result.repo_count, 1);
        assert_eq!(result.skipped_pages, 0);
        assert!(!temp_dir.path().join("config.json.OLD").exists());
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "{\n  \"dbpath\": \"data\",\n  \"repos\": {\n    \"web\": {\n      \"url\": \"https://github.com/porch/web.git\"\n    }\n  }\n}"
        );
    }

    #[tokio::test]
    async fn test_reports_skipped_pages() {
        let temp_dir = TempDir::new().unwrap();
        let settings = GeneratorSettings::baseline("porch")
            .with_output_path(temp_dir.path().join("config.json"));
        let source = FirstPageOnly(
            ListingPage::new(vec![RemoteRepo::new("a").with_clone_url("u1")]).with_link_header(
                "<https://api.github.com/user/1/repos?page=2>; rel=\"next\", <https://api.github.com/user/1/repos?page=4>; rel=\"last\"",
            ),
        );

        let result = BaselineConfigUseCase::new(&settings, &source)
            .execute()
            .await
            .unwrap();

        assert_eq!(result.repo_count, 1);
        assert_eq!(result.skipped_pages, 3);
    }
}
