use super::listing_source::{ListingPage, RepoListingSource};
use crate::common::error::HoundgenError;
use crate::common::result::HoundgenResult;
use crate::domain::entities::generator_settings::GeneratorSettings;
use crate::domain::entities::repository::RemoteRepo;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LINK, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Error payload returned by the REST API
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// Listing client for the GitHub REST API
pub struct GitHubListingClient {
    settings: GeneratorSettings,
    http_client: reqwest::Client,
}

impl GitHubListingClient {
    pub fn new(settings: &GeneratorSettings) -> HoundgenResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("houndgen/", env!("CARGO_PKG_VERSION"))),
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| {
                HoundgenError::network_error_with_source("Failed to create HTTP client", None, e)
            })?;

        Ok(Self {
            settings: settings.clone(),
            http_client,
        })
    }

    async fn check_status(
        response: reqwest::Response,
        url: &str,
    ) -> HoundgenResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let rate_limited = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false);

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&body)
            .map(|m| m.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            });

        match status {
            StatusCode::FORBIDDEN if rate_limited => Err(HoundgenError::api_error(
                format!("rate limit exceeded: {}", message),
                status.as_u16(),
                Some(url.to_string()),
            )),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(HoundgenError::authentication_error(
                    message,
                    status.as_u16(),
                    Some(url.to_string()),
                ))
            }
            _ => Err(HoundgenError::api_error(
                message,
                status.as_u16(),
                Some(url.to_string()),
            )),
        }
    }
}

#[async_trait]
impl RepoListingSource for GitHubListingClient {
    async fn fetch_page(&self, page: Option<u32>) -> HoundgenResult<ListingPage> {
        let url = self.settings.listing_url(page)?;
        let url_text = url.to_string();
        debug!(
            url = %url_text,
            authenticated = self.settings.credentials.is_some(),
            "Requesting repository listing"
        );

        let mut request = self.http_client.get(url);
        if let Some(credentials) = &self.settings.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.token));
        }

        let response = request.send().await?;
        let response = Self::check_status(response, &url_text).await?;

        let link_header = match response.headers().get(LINK) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| {
                        HoundgenError::pagination_error("Link header is not valid ASCII", None)
                    })?
                    .to_string(),
            ),
            None => None,
        };

        let body = response.text().await?;
        let repos: Vec<RemoteRepo> = serde_json::from_str(&body).map_err(|e| {
            HoundgenError::listing_error_with_source(
                "Listing response is not a JSON array of repositories",
                page,
                e,
            )
        })?;

        debug!(count = repos.len(), ?page, "Decoded listing page");
        Ok(ListingPage { repos, link_header })
    }

    fn describe(&self) -> String {
        format!(
            "{}/{}/{}/repos",
            self.settings.api_base.trim_end_matches('/'),
            self.settings.owner_kind.path_segment(),
            self.settings.owner
        )
    }
}
