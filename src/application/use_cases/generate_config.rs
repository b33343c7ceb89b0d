use crate::application::services::catalog_builder::RepoCatalogBuilder;
use crate::application::services::pagination::resolve_page_count;
use crate::common::result::HoundgenResult;
use crate::domain::entities::generator_settings::GeneratorSettings;
use crate::domain::entities::index_config::IndexConfig;
use crate::infrastructure::filesystem::config_store::ConfigStore;
use crate::infrastructure::github::listing_source::RepoListingSource;
use std::path::PathBuf;
use tracing::{debug, info};

/// ページング版の生成結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfigResult {
    /// 取得したページ数
    pub page_count: u32,

    /// 設定に書き出したリポジトリ数
    pub repo_count: usize,

    /// 重複名で上書きされたエントリ数
    pub replaced_count: usize,

    /// 書き出した設定ファイルのパス
    pub output_path: PathBuf,

    /// ローテーションされた旧設定のパス
    pub backup_path: Option<PathBuf>,
}

/// 認証付きでリスティングを全ページ取得し、設定ファイルを生成するユースケース
pub struct GenerateConfigUseCase<'a> {
    settings: &'a GeneratorSettings,
    source: &'a dyn RepoListingSource,
}

impl<'a> GenerateConfigUseCase<'a> {
    pub fn new(settings: &'a GeneratorSettings, source: &'a dyn RepoListingSource) -> Self {
        Self { settings, source }
    }

    /// 設定ファイル生成を実行
    pub async fn execute(&self) -> HoundgenResult<GenerateConfigResult> {
        info!(source = %self.source.describe(), "Generating indexer config");

        // 1. 全ページの取得と集約
        let (config, page_count, replaced_count) = self.collect().await?;
        let repo_count = config.repos.len();

        // 2. 書き出し（ローテーション含む）
        let store = ConfigStore::new(&self.settings.output_path).with_rotate(self.settings.rotate);
        let outcome = store.write(&config).await?;

        Ok(GenerateConfigResult {
            page_count,
            repo_count,
            replaced_count,
            output_path: outcome.path,
            backup_path: outcome.backup_path,
        })
    }

    /// リスティングを全ページ取得して設定を組み立てる（ファイルには触れない）
    pub async fn collect(&self) -> HoundgenResult<(IndexConfig, u32, usize)> {
        let mut builder = RepoCatalogBuilder::new(self.settings.url_kind);

        let first = self.source.fetch_page(Some(1)).await?;
        let page_count = resolve_page_count(first.link_header.as_deref())?;
        builder.add_page(Some(1), &first.repos)?;
        debug!(page = 1, page_count, count = first.repos.len(), "Accumulated page");

        for page in 2..=page_count {
            let listing = self.source.fetch_page(Some(page)).await?;
            let added = builder.add_page(Some(page), &listing.repos)?;
            debug!(page, page_count, count = added, "Accumulated page");
        }

        let replaced_count = builder.replaced_count();
        let catalog = builder.build();
        info!(pages = page_count, repos = catalog.len(), "Collected repository listing");

        let config = IndexConfig::new(self.settings.dbpath.clone(), catalog)
            .with_max_concurrent_indexers(self.settings.max_concurrent_indexers);
        Ok((config, page_count, replaced_count))
    }
}
