use crate::domain::value_objects::listing_kind::UrlKind;
use serde::{Deserialize, Serialize};

/// リスティングAPIが返すリポジトリオブジェクト（使用するフィールドのみ）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteRepo {
    /// リポジトリ名
    pub name: String,

    /// HTTPSのクローンURL
    #[serde(default)]
    pub clone_url: Option<String>,

    /// SSHのクローンURL
    #[serde(default)]
    pub ssh_url: Option<String>,
}

impl RemoteRepo {
    /// 新しいRemoteRepoインスタンスを作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clone_url: None,
            ssh_url: None,
        }
    }

    /// HTTPSのクローンURLを設定
    pub fn with_clone_url(mut self, url: impl Into<String>) -> Self {
        self.clone_url = Some(url.into());
        self
    }

    /// SSHのクローンURLを設定
    pub fn with_ssh_url(mut self, url: impl Into<String>) -> Self {
        self.ssh_url = Some(url.into());
        self
    }

    /// 指定された種類のURLを取得（空文字列は無いものとして扱う）
    pub fn url(&self, kind: UrlKind) -> Option<&str> {
        let url = match kind {
            UrlKind::Ssh => self.ssh_url.as_deref(),
            UrlKind::Clone => self.clone_url.as_deref(),
        };
        url.filter(|u| !u.trim().is_empty())
    }
}

/// 設定ファイルに書き出すリポジトリエントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// インデクサがクローンに使用するURL
    pub url: String,
}

impl RepoEntry {
    /// 新しいRepoEntryインスタンスを作成
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
