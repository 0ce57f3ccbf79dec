use anyhow::Context;
use clap::Parser;
use mars_photos::config::cli::{CliConfig, Command};
use mars_photos::config::toml_config::TomlConfig;
use mars_photos::utils::error::{ErrorKind, MarsPhotosError};
use mars_photos::utils::logger;
use mars_photos::{MarsPhotosClient, PhotosRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?,
        ),
        None => None,
    };

    let verbose = cli.verbose || file.as_ref().is_some_and(TomlConfig::verbose);
    if cli.json_logs || file.as_ref().is_some_and(TomlConfig::json_logs) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    if let Err(e) = run(&cli, file.as_ref()).await {
        tracing::error!("❌ {} ({:?})", e, e.kind());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.kind() {
            ErrorKind::Validation | ErrorKind::Configuration => 2,
            ErrorKind::Network | ErrorKind::Api | ErrorKind::Parse | ErrorKind::Io => 1,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(cli: &CliConfig, file: Option<&TomlConfig>) -> Result<(), MarsPhotosError> {
    let config = cli.client_config(file)?;
    tracing::debug!("Client config: {:?}", config);
    let client = MarsPhotosClient::new(config)?;

    let output = match &cli.command {
        Command::Photos {
            rover,
            date,
            camera,
            page,
        } => {
            let request = PhotosRequest {
                rover: rover.clone(),
                date: date.clone(),
                camera: camera.clone(),
                page: *page,
            };
            let photos = client.photos(&request).await?;
            tracing::info!("✅ Retrieved {} photos", photos.len());
            serde_json::to_string_pretty(&photos)?
        }
        Command::Latest { rover } => {
            let photos = client.latest_photos(rover).await?;
            tracing::info!("✅ Retrieved {} latest photos", photos.len());
            serde_json::to_string_pretty(&photos)?
        }
        Command::Manifest { rover } => {
            let manifest = client.manifest(rover).await?;
            serde_json::to_string_pretty(&manifest)?
        }
    };

    println!("{}", output);
    Ok(())
}
