pub mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use crate::domain::entities::generator_settings::{
    DEFAULT_API_BASE, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECONDS,
};
use crate::domain::entities::index_config::{DEFAULT_DBPATH, DEFAULT_MAX_CONCURRENT_INDEXERS};
use crate::domain::value_objects::listing_kind::{OwnerKind, UrlKind};

use commands::{BaselineCommand, GenerateCommand};

/// Version with the build metadata recorded by `build.rs`
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    " ",
    env!("BUILD_TARGET"),
    ")"
);

/// houndgen - Generate Hound configs from GitHub repository listings
#[derive(Parser, Debug)]
#[command(name = "houndgen")]
#[command(about = "Generate a Hound code-search config from a GitHub repository listing")]
#[command(version)]
#[command(long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Working directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every page of an authenticated listing and write the config
    Generate {
        /// Organization or user whose repositories are indexed
        #[arg(long, env = "HOUNDGEN_OWNER")]
        owner: String,

        /// Whether the owner is an organization or a user (org, user)
        #[arg(long, default_value = "org")]
        owner_kind: OwnerKind,

        /// Username for HTTP basic authentication
        #[arg(short, long, env = "GITHUB_USER")]
        username: Option<String>,

        /// Personal access token for HTTP basic authentication
        #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Base URL of the REST API
        #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE)]
        api_base: String,

        /// Output config path
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Index directory written into the config
        #[arg(long, default_value = DEFAULT_DBPATH)]
        dbpath: String,

        /// Number of concurrent indexers written into the config
        #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT_INDEXERS)]
        max_concurrent_indexers: u32,

        /// Which clone URL to record (ssh, clone)
        #[arg(long, default_value = "ssh")]
        url_kind: UrlKind,

        /// Repositories requested per page (1-100)
        #[arg(long)]
        per_page: Option<u32>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        timeout: u64,

        /// Overwrite the existing config instead of moving it to <output>.OLD
        #[arg(long)]
        no_rotate: bool,
    },

    /// Fetch only the first page of a user's public repositories
    Baseline {
        /// User whose repositories are indexed
        #[arg(long, env = "HOUNDGEN_OWNER")]
        owner: String,

        /// Base URL of the REST API
        #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE)]
        api_base: String,

        /// Output config path
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Index directory written into the config
        #[arg(long, default_value = DEFAULT_DBPATH)]
        dbpath: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        timeout: u64,
    },
}

/// Install the tracing subscriber; `RUST_LOG` takes precedence over `verbose`
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "houndgen=debug" } else { "houndgen=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub async fn run(self) -> anyhow::Result<()> {
        // Otherwise colored decides from the terminal and NO_COLOR/CLICOLOR
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        // Change directory if specified
        if let Some(ref dir) = self.cli.directory {
            env::set_current_dir(dir)?;
        }

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> anyhow::Result<()> {
        let verbose = self.cli.verbose;
        match &self.cli.command {
            Commands::Generate {
                owner,
                owner_kind,
                username,
                token,
                api_base,
                output,
                dbpath,
                max_concurrent_indexers,
                url_kind,
                per_page,
                timeout,
                no_rotate,
            } => {
                GenerateCommand {
                    owner: owner.clone(),
                    owner_kind: *owner_kind,
                    username: username.clone(),
                    token: token.clone(),
                    api_base: api_base.clone(),
                    output: output.clone(),
                    dbpath: dbpath.clone(),
                    max_concurrent_indexers: *max_concurrent_indexers,
                    url_kind: *url_kind,
                    per_page: *per_page,
                    timeout: *timeout,
                    no_rotate: *no_rotate,
                    verbose,
                }
                .execute()
                .await
            }
            Commands::Baseline {
                owner,
                api_base,
                output,
                dbpath,
                timeout,
            } => {
                BaselineCommand {
                    owner: owner.clone(),
                    api_base: api_base.clone(),
                    output: output.clone(),
                    dbpath: dbpath.clone(),
                    timeout: *timeout,
                    verbose,
                }
                .execute()
                .await
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
