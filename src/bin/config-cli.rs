use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use mainchain_config::config::loader::ConfigError;
use mainchain_config::observability::init_logging;
use mainchain_config::ToolchainConfig;

#[derive(Parser)]
#[command(name = "config-cli")]
#[command(about = "Inspection CLI for the mainchain toolchain configuration", long_about = None)]
struct Cli {
    /// Project root holding toolchain.toml and secrets.json
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
    },
    /// List network profiles and how each is reached
    Networks,
    /// Check the configuration for semantic errors
    Validate,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("mainchain_config=warn");
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { format } => {
            let config = ToolchainConfig::resolve(&cli.root)?;
            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&config)?,
                Format::Toml => toml::to_string_pretty(&config)?,
            };
            println!("{}", rendered);
        }
        Commands::Networks => {
            let config = ToolchainConfig::resolve(&cli.root)?;
            for (name, profile) in &config.networks {
                let endpoint = match (&profile.host, &profile.provider) {
                    (Some(host), _) => match profile.port {
                        Some(port) => format!("{}:{}", host, port),
                        None => host.clone(),
                    },
                    (None, Some(provider)) => format!("wallet via {}", provider.rpc_url),
                    (None, None) => "unreachable".to_string(),
                };
                println!(
                    "{:<14} network_id={:<8} {}",
                    name, profile.network_id, endpoint
                );
            }
        }
        Commands::Validate => match ToolchainConfig::resolve(&cli.root) {
            Ok(config) => {
                println!("configuration OK ({} networks)", config.networks.len());
            }
            Err(ConfigError::Validation(errors)) => {
                for error in &errors {
                    eprintln!("error: {}", error);
                }
                return Err(format!("{} validation error(s)", errors.len()).into());
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}
