use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::application::use_cases::baseline_config::BaselineConfigUseCase;
use crate::domain::entities::generator_settings::GeneratorSettings;
use crate::infrastructure::github::client::GitHubListingClient;

/// Handler for the baseline command
#[derive(Debug, Clone)]
pub struct BaselineCommand {
    pub owner: String,
    pub api_base: String,
    pub output: PathBuf,
    pub dbpath: String,
    pub timeout: u64,
    pub verbose: bool,
}

impl BaselineCommand {
    pub fn settings(&self) -> crate::Result<GeneratorSettings> {
        GeneratorSettings::baseline(self.owner.clone())
            .with_api_base(self.api_base.clone())
            .with_output_path(self.output.clone())
            .with_dbpath(self.dbpath.clone())
            .with_timeout_seconds(self.timeout)
            .validated()
    }

    pub async fn execute(&self) -> Result<()> {
        let settings = self.settings()?;

        if self.verbose {
            println!(
                "{} Listing the first page of repositories of user {}",
                "::".blue().bold(),
                settings.owner.bold()
            );
        }

        let client = GitHubListingClient::new(&settings)?;
        let result = BaselineConfigUseCase::new(&settings, &client)
            .execute()
            .await?;

        println!(
            "{} Wrote {} repositories to {}",
            "✓".green().bold(),
            result.repo_count,
            result.output_path.display().to_string().bold()
        );

        if result.skipped_pages > 0 {
            println!(
                "  {} {} further page(s) were not fetched; use `generate` for complete listings",
                "!".yellow().bold(),
                result.skipped_pages
            );
        }

        Ok(())
    }
}
