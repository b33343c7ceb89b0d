use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ListingKindError {
    #[error("Unsupported owner kind: {0} (expected 'org' or 'user')")]
    UnsupportedOwnerKind(String),

    #[error("Unsupported URL kind: {0} (expected 'ssh' or 'clone')")]
    UnsupportedUrlKind(String),
}

/// Account type whose repositories are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    /// Organization account (`/orgs/<owner>/repos`)
    Org,
    /// User account (`/users/<owner>/repos`)
    User,
}

impl Default for OwnerKind {
    fn default() -> Self {
        Self::Org
    }
}

impl OwnerKind {
    /// Path segment used by the listing endpoint
    pub fn path_segment(&self) -> &'static str {
        match self {
            OwnerKind::Org => "orgs",
            OwnerKind::User => "users",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerKind::Org => write!(f, "org"),
            OwnerKind::User => write!(f, "user"),
        }
    }
}

impl FromStr for OwnerKind {
    type Err = ListingKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "org" | "orgs" | "organization" => Ok(OwnerKind::Org),
            "user" | "users" => Ok(OwnerKind::User),
            _ => Err(ListingKindError::UnsupportedOwnerKind(s.to_string())),
        }
    }
}

/// Which clone endpoint of a listed repository ends up in the config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    /// `ssh_url`, e.g. `git@github.com:acme/api.git`
    Ssh,
    /// `clone_url`, e.g. `https://github.com/acme/api.git`
    Clone,
}

impl Default for UrlKind {
    fn default() -> Self {
        Self::Ssh
    }
}

impl UrlKind {
    /// Name of the listing field holding this URL
    pub fn field_name(&self) -> &'static str {
        match self {
            UrlKind::Ssh => "ssh_url",
            UrlKind::Clone => "clone_url",
        }
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlKind::Ssh => write!(f, "ssh"),
            UrlKind::Clone => write!(f, "clone"),
        }
    }
}

impl FromStr for UrlKind {
    type Err = ListingKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ssh" | "ssh_url" => Ok(UrlKind::Ssh),
            "clone" | "https" | "clone_url" => Ok(UrlKind::Clone),
            _ => Err(ListingKindError::UnsupportedUrlKind(s.to_string())),
        }
    }
}
