use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "mars-photos")]
#[command(about = "Query the Mars rover photo archive")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// API key (overrides NASA_API_KEY and the config file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Base URL of the archive API
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Photos for a sol or earth date
    Photos {
        #[arg(long)]
        rover: String,
        /// Sol number (e.g. 1000) or earth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long)]
        camera: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,
    },
    /// Most recent photos of a rover
    Latest {
        #[arg(long)]
        rover: String,
    },
    /// Mission manifest of a rover
    Manifest {
        #[arg(long)]
        rover: String,
    },
}

impl CliConfig {
    /// Loads the config file when given, otherwise the environment, then applies
    /// command line overrides. The result is not validated yet.
    pub fn client_config(&self, file: Option<&TomlConfig>) -> Result<ClientConfig> {
        let mut config = match (file, &self.api_key) {
            (Some(file), _) => file.client.clone(),
            (None, Some(api_key)) => ClientConfig::new(api_key.clone()),
            (None, None) => ClientConfig::from_env()?,
        };

        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }

        Ok(config)
    }
}
