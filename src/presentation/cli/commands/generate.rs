use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use tracing::warn;

use crate::application::use_cases::generate_config::GenerateConfigUseCase;
use crate::domain::entities::generator_settings::{Credentials, GeneratorSettings};
use crate::domain::value_objects::listing_kind::{OwnerKind, UrlKind};
use crate::infrastructure::github::client::GitHubListingClient;

/// Handler for the generate command
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    pub owner: String,
    pub owner_kind: OwnerKind,
    pub username: Option<String>,
    pub token: Option<String>,
    pub api_base: String,
    pub output: PathBuf,
    pub dbpath: String,
    pub max_concurrent_indexers: u32,
    pub url_kind: UrlKind,
    pub per_page: Option<u32>,
    pub timeout: u64,
    pub no_rotate: bool,
    pub verbose: bool,
}

/// Pair up username and token; a half-supplied pair fails settings validation
pub(crate) fn credentials_from(
    username: Option<&str>,
    token: Option<&str>,
) -> Option<Credentials> {
    match (username, token) {
        (None, None) => None,
        (username, token) => Some(Credentials::new(
            username.unwrap_or_default(),
            token.unwrap_or_default(),
        )),
    }
}

impl GenerateCommand {
    pub fn settings(&self) -> crate::Result<GeneratorSettings> {
        GeneratorSettings::new(self.owner.clone())
            .with_owner_kind(self.owner_kind)
            .with_api_base(self.api_base.clone())
            .with_credentials(credentials_from(
                self.username.as_deref(),
                self.token.as_deref(),
            ))
            .with_output_path(self.output.clone())
            .with_dbpath(self.dbpath.clone())
            .with_max_concurrent_indexers(Some(self.max_concurrent_indexers))
            .with_url_kind(self.url_kind)
            .with_per_page(self.per_page)
            .with_timeout_seconds(self.timeout)
            .with_rotate(!self.no_rotate)
            .validated()
    }

    pub async fn execute(&self) -> Result<()> {
        let settings = self.settings()?;

        if settings.credentials.is_none() {
            warn!("No credentials supplied; private repositories will not be listed");
        }

        if self.verbose {
            println!(
                "{} Listing repositories of {} {}",
                "::".blue().bold(),
                settings.owner_kind,
                settings.owner.bold()
            );
        }

        let client = GitHubListingClient::new(&settings)?;
        let result = GenerateConfigUseCase::new(&settings, &client)
            .execute()
            .await?;

        println!(
            "{} Wrote {} repositories from {} page(s) to {}",
            "✓".green().bold(),
            result.repo_count,
            result.page_count,
            result.output_path.display().to_string().bold()
        );

        if let Some(backup) = &result.backup_path {
            println!(
                "  {} previous config moved to {}",
                "->".blue(),
                backup.display()
            );
        }

        if result.replaced_count > 0 {
            println!(
                "  {} {} duplicate repository name(s) replaced by later entries",
                "!".yellow().bold(),
                result.replaced_count
            );
        }

        Ok(())
    }
}
