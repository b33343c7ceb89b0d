//! Mock services for testing
//!
//! In-memory implementations of the listing source so use cases can be
//! exercised without a network.

use async_trait::async_trait;
use houndgen::domain::entities::repository::RemoteRepo;
use houndgen::infrastructure::github::listing_source::{ListingPage, RepoListingSource};
use houndgen::{HoundgenError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock listing source serving pre-split pages
pub struct MockListingSource {
    /// Pages indexed by page number
    pages: Arc<Mutex<HashMap<u32, ListingPage>>>,
    /// Requested page numbers, in order
    call_history: Arc<Mutex<Vec<Option<u32>>>>,
    /// Page number whose request fails
    failing_page: Arc<Mutex<Option<u32>>>,
}

impl MockListingSource {
    /// Create an empty mock source
    pub fn new() -> Self {
        Self {
            pages: Arc::new(Mutex::new(HashMap::new())),
            call_history: Arc::new(Mutex::new(Vec::new())),
            failing_page: Arc::new(Mutex::new(None)),
        }
    }

    /// Split repositories into pages of `per_page` with GitHub-style Link headers
    pub fn paginated(repos: Vec<RemoteRepo>, per_page: usize) -> Self {
        let source = Self::new();
        let chunks: Vec<Vec<RemoteRepo>> = if repos.is_empty() {
            vec![Vec::new()]
        } else {
            repos.chunks(per_page).map(|c| c.to_vec()).collect()
        };
        let last = chunks.len() as u32;

        for (idx, chunk) in chunks.into_iter().enumerate() {
            let page = idx as u32 + 1;
            let mut listing = ListingPage::new(chunk);
            if let Some(link) = super::test_fixtures::LinkFixture::for_page(
                "https://api.github.com/organizations/1/repos",
                page,
                last,
            ) {
                listing = listing.with_link_header(link);
            }
            source.add_page(page, listing);
        }
        source
    }

    /// Add a page to the mock source
    pub fn add_page(&self, page: u32, listing: ListingPage) {
        self.pages.lock().unwrap().insert(page, listing);
    }

    /// Make requests for `page` fail with a server error
    pub fn fail_on_page(&self, page: u32) {
        *self.failing_page.lock().unwrap() = Some(page);
    }

    /// Get call history for verification
    pub fn get_call_history(&self) -> Vec<Option<u32>> {
        self.call_history.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepoListingSource for MockListingSource {
    async fn fetch_page(&self, page: Option<u32>) -> Result<ListingPage> {
        self.call_history.lock().unwrap().push(page);

        let number = page.unwrap_or(1);
        if *self.failing_page.lock().unwrap() == Some(number) {
            return Err(HoundgenError::api_error("Server Error", 500, None));
        }

        // Past the end the API answers with an empty array
        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(&number)
            .cloned()
            .unwrap_or_default())
    }

    fn describe(&self) -> String {
        "mock listing".to_string()
    }
}
