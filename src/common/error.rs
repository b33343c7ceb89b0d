use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoundgenError {
    #[error("Network operation failed: {message}")]
    NetworkError {
        message: String,
        url: Option<String>,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Authentication failed ({status}): {message}")]
    AuthenticationError {
        message: String,
        status: u16,
        url: Option<String>,
    },

    #[error("API request failed ({status}): {message}")]
    ApiError {
        message: String,
        status: u16,
        url: Option<String>,
    },

    #[error("Repository listing error: {message}")]
    ListingError {
        message: String,
        page: Option<u32>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Pagination error: {message}")]
    PaginationError {
        message: String,
        header: Option<String>,
    },

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {field} - {message}")]
    ValidationError {
        field: String,
        message: String,
        value: Option<String>,
    },

    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl HoundgenError {
    pub fn network_error_with_source(
        message: impl Into<String>,
        url: Option<String>,
        source: reqwest::Error,
    ) -> Self {
        Self::NetworkError {
            message: message.into(),
            url,
            source: Some(source),
        }
    }

    pub fn authentication_error(
        message: impl Into<String>,
        status: u16,
        url: Option<String>,
    ) -> Self {
        Self::AuthenticationError {
            message: message.into(),
            status,
            url,
        }
    }

    pub fn api_error(message: impl Into<String>, status: u16, url: Option<String>) -> Self {
        Self::ApiError {
            message: message.into(),
            status,
            url,
        }
    }

    pub fn listing_error(message: impl Into<String>, page: Option<u32>) -> Self {
        Self::ListingError {
            message: message.into(),
            page,
            source: None,
        }
    }

    pub fn listing_error_with_source(
        message: impl Into<String>,
        page: Option<u32>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ListingError {
            message: message.into(),
            page,
            source: Some(Box::new(source)),
        }
    }

    pub fn pagination_error(message: impl Into<String>, header: Option<String>) -> Self {
        Self::PaginationError {
            message: message.into(),
            header,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn validation_error(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
            value,
        }
    }

    pub fn serialization_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the upstream API rejected the supplied credentials
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationError { .. })
    }
}

impl From<serde_json::Error> for HoundgenError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization_error_with_source("JSON serialization failed", error)
    }
}

impl From<reqwest::Error> for HoundgenError {
    fn from(error: reqwest::Error) -> Self {
        let url = error.url().map(|u| u.to_string());
        Self::network_error_with_source("Network request failed", url, error)
    }
}

impl From<validator::ValidationErrors> for HoundgenError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|k| k.to_string())
            .unwrap_or_else(|| "settings".to_string());
        Self::validation_error(field, errors.to_string(), None)
    }
}
