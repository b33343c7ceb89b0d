use super::index_config::{DEFAULT_DBPATH, DEFAULT_MAX_CONCURRENT_INDEXERS};
use crate::common::error::HoundgenError;
use crate::common::result::HoundgenResult;
use crate::domain::value_objects::listing_kind::{OwnerKind, UrlKind};
use std::fmt;
use std::path::PathBuf;
use url::Url;
use validator::Validate;

/// Public GitHub REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Canonical output file name
pub const DEFAULT_OUTPUT_FILE: &str = "config.json";

/// Suffix appended to the previous config on rotation
pub const BACKUP_SUFFIX: &str = ".OLD";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// HTTP basic-auth credentials for the listing API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Settings for one generator run, built once at startup
#[derive(Debug, Clone, Validate)]
pub struct GeneratorSettings {
    /// Base URL of the REST API
    #[validate(url)]
    pub api_base: String,

    /// Organization or user whose repositories are listed
    #[validate(length(min = 1, message = "owner must not be empty"))]
    pub owner: String,

    pub owner_kind: OwnerKind,

    /// Basic-auth credentials; `None` sends unauthenticated requests
    pub credentials: Option<Credentials>,

    /// Where the config is written
    pub output_path: PathBuf,

    /// Value of the `dbpath` setting
    #[validate(length(min = 1, message = "dbpath must not be empty"))]
    pub dbpath: String,

    /// Value of `max-concurrent-indexers`; omitted from the output when `None`
    #[validate(range(min = 1))]
    pub max_concurrent_indexers: Option<u32>,

    pub url_kind: UrlKind,

    /// Page size requested from the API; the server default applies when `None`
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u32>,

    #[validate(range(min = 1))]
    pub timeout_seconds: u64,

    /// Rename an existing output file to `<output>.OLD` before writing
    pub rotate: bool,
}

impl GeneratorSettings {
    /// Settings for the authenticated, paged generator
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            owner: owner.into(),
            owner_kind: OwnerKind::Org,
            credentials: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            dbpath: DEFAULT_DBPATH.to_string(),
            max_concurrent_indexers: Some(DEFAULT_MAX_CONCURRENT_INDEXERS),
            url_kind: UrlKind::Ssh,
            per_page: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            rotate: true,
        }
    }

    /// Settings for the unauthenticated single-page baseline
    pub fn baseline(user: impl Into<String>) -> Self {
        Self {
            owner_kind: OwnerKind::User,
            max_concurrent_indexers: None,
            url_kind: UrlKind::Clone,
            rotate: false,
            ..Self::new(user)
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_owner_kind(mut self, owner_kind: OwnerKind) -> Self {
        self.owner_kind = owner_kind;
        self
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_dbpath(mut self, dbpath: impl Into<String>) -> Self {
        self.dbpath = dbpath.into();
        self
    }

    pub fn with_max_concurrent_indexers(mut self, max: Option<u32>) -> Self {
        self.max_concurrent_indexers = max;
        self
    }

    pub fn with_url_kind(mut self, url_kind: UrlKind) -> Self {
        self.url_kind = url_kind;
        self
    }

    pub fn with_per_page(mut self, per_page: Option<u32>) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    /// Validate field constraints and credential completeness
    pub fn validated(self) -> HoundgenResult<Self> {
        self.validate()?;

        if let Some(credentials) = &self.credentials {
            if credentials.username.trim().is_empty() {
                return Err(HoundgenError::validation_error(
                    "username",
                    "username must not be empty when a token is supplied",
                    None,
                ));
            }
            if credentials.token.trim().is_empty() {
                return Err(HoundgenError::validation_error(
                    "token",
                    "token must not be empty when a username is supplied",
                    None,
                ));
            }
        }

        Ok(self)
    }

    /// Listing endpoint, optionally for a specific page
    pub fn listing_url(&self, page: Option<u32>) -> HoundgenResult<Url> {
        let mut url = Url::parse(&self.api_base).map_err(|e| {
            HoundgenError::config_error_with_source(
                format!("Invalid API base URL: {}", self.api_base),
                e,
            )
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                HoundgenError::config_error(format!(
                    "API base URL cannot carry a path: {}",
                    self.api_base
                ))
            })?
            .pop_if_empty()
            .extend([self.owner_kind.path_segment(), self.owner.as_str(), "repos"]);

        let mut params = Vec::new();
        if let Some(page) = page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }
}
