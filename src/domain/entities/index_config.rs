use super::repo_catalog::RepoCatalog;
use serde::{Deserialize, Serialize};

/// デフォルトのインデックス保存ディレクトリ
pub const DEFAULT_DBPATH: &str = "data";

/// デフォルトの並列インデクサ数
pub const DEFAULT_MAX_CONCURRENT_INDEXERS: u32 = 4;

/// インデクサ（Hound）の設定ファイル `config.json` の構造
///
/// フィールドは辞書順に宣言しているため、シリアライズ結果のキーはソート済みになる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// インデックスの保存先ディレクトリ
    pub dbpath: String,

    /// 並列インデクサ数（ページング版のみ出力）
    #[serde(
        rename = "max-concurrent-indexers",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_concurrent_indexers: Option<u32>,

    /// インデックス対象のリポジトリ
    pub repos: RepoCatalog,
}

impl IndexConfig {
    /// 新しいIndexConfigインスタンスを作成
    pub fn new(dbpath: impl Into<String>, repos: RepoCatalog) -> Self {
        Self {
            dbpath: dbpath.into(),
            max_concurrent_indexers: None,
            repos,
        }
    }

    /// 並列インデクサ数を設定
    pub fn with_max_concurrent_indexers(mut self, max: Option<u32>) -> Self {
        self.max_concurrent_indexers = max;
        self
    }

    /// 2スペースインデントのJSON文字列に変換
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::repository::RepoEntry;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn catalog() -> RepoCatalog {
        let mut map = BTreeMap::new();
        map.insert("b".to_string(), RepoEntry::new("u2"));
        map.insert("a".to_string(), RepoEntry::new("u1"));
        RepoCatalog::from_map(map)
    }

    #[test]
    fn test_full_config_layout() {
        let config = IndexConfig::new(DEFAULT_DBPATH, catalog())
            .with_max_concurrent_indexers(Some(DEFAULT_MAX_CONCURRENT_INDEXERS));

        let expected = r#"{
  "dbpath": "data",
  "max-concurrent-indexers": 4,
  "repos": {
    "a": {
      "url": "u1"
    },
    "b": {
      "url": "u2"
    }
  }
}"#;
        assert_eq!(config.to_pretty_json().unwrap(), expected);
    }

    #[test]
    fn test_max_concurrent_indexers_is_omitted_when_unset() {
        let config = IndexConfig::new("data", RepoCatalog::default());
        assert_eq!(
            config.to_pretty_json().unwrap(),
            "{\n  \"dbpath\": \"data\",\n  \"repos\": {}\n}"
        );
    }

    #[test]
    fn test_parses_existing_config() {
        let config: IndexConfig = serde_json::from_str(
            r#"{"dbpath":"db","max-concurrent-indexers":2,"repos":{"x":{"url":"y"}}}"#,
        )
        .unwrap();
        assert_eq!(config.max_concurrent_indexers, Some(2));
        assert_eq!(config.repos.get("x").unwrap().url, "y");
    }
}
