//! Test fixtures for creating listing data
//!
//! This module provides reusable fixtures for repository objects, listing
//! page bodies and pagination headers.

use houndgen::domain::entities::repository::RemoteRepo;
use serde_json::{json, Value};

/// Fixture for repository objects as returned by the listing API
pub struct RepoFixture;

impl RepoFixture {
    /// Clone URL used for a fixture repository
    pub fn clone_url(owner: &str, name: &str) -> String {
        format!("https://github.com/{}/{}.git", owner, name)
    }

    /// SSH URL used for a fixture repository
    pub fn ssh_url(owner: &str, name: &str) -> String {
        format!("git@github.com:{}/{}.git", owner, name)
    }

    /// Listing object with the fields the API returns most often
    pub fn json(owner: &str, name: &str) -> Value {
        json!({
            "id": name.len(),
            "name": name,
            "full_name": format!("{}/{}", owner, name),
            "private": false,
            "clone_url": Self::clone_url(owner, name),
            "ssh_url": Self::ssh_url(owner, name),
            "html_url": format!("https://github.com/{}/{}", owner, name)
        })
    }

    /// Decoded repository
    pub fn remote(owner: &str, name: &str) -> RemoteRepo {
        RemoteRepo::new(name)
            .with_clone_url(Self::clone_url(owner, name))
            .with_ssh_url(Self::ssh_url(owner, name))
    }

    /// JSON array body for one listing page
    pub fn page_body(owner: &str, names: &[&str]) -> String {
        let repos: Vec<Value> = names.iter().map(|name| Self::json(owner, name)).collect();
        Value::Array(repos).to_string()
    }

    /// `count` distinct repository names, starting at `offset`
    pub fn names(prefix: &str, offset: usize, count: usize) -> Vec<String> {
        (offset..offset + count)
            .map(|i| format!("{}-{:03}", prefix, i))
            .collect()
    }
}

/// Fixture for pagination `Link` headers
pub struct LinkFixture;

impl LinkFixture {
    /// Header a server sends on `page` of a listing with `last` pages
    pub fn for_page(listing_url: &str, page: u32, last: u32) -> Option<String> {
        if last <= 1 {
            return None;
        }

        let mut links = Vec::new();
        if page > 1 {
            links.push(format!("<{}?page={}>; rel=\"prev\"", listing_url, page - 1));
        }
        if page < last {
            links.push(format!("<{}?page={}>; rel=\"next\"", listing_url, page + 1));
            links.push(format!("<{}?page={}>; rel=\"last\"", listing_url, last));
        }
        if page > 1 {
            links.push(format!("<{}?page=1>; rel=\"first\"", listing_url));
        }
        Some(links.join(", "))
    }
}
