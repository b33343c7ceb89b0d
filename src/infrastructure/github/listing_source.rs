use crate::common::result::HoundgenResult;
use crate::domain::entities::repository::RemoteRepo;
use async_trait::async_trait;

/// One decoded page of the repository listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Repositories on this page, in response order
    pub repos: Vec<RemoteRepo>,

    /// Raw `Link` response header, if the server sent one
    pub link_header: Option<String>,
}

impl ListingPage {
    pub fn new(repos: Vec<RemoteRepo>) -> Self {
        Self {
            repos,
            link_header: None,
        }
    }

    pub fn with_link_header(mut self, link_header: impl Into<String>) -> Self {
        self.link_header = Some(link_header.into());
        self
    }
}

/// Source of repository listing pages
#[async_trait]
pub trait RepoListingSource: Send + Sync {
    /// Fetch one page of the listing; `None` omits the `page` parameter
    async fn fetch_page(&self, page: Option<u32>) -> HoundgenResult<ListingPage>;

    /// Human-readable description of where pages come from
    fn describe(&self) -> String;
}
