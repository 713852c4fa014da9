/// Tonearm - tag and cover art importer for music folders
use clap::Parser;
use std::path::PathBuf;
use tonearm_cli::{execute, CliConfig, Command, ImportOverrides};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tonearm")]
#[command(about = "Read tags and cover art from a music folder as JSON", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./tonearm.toml if present)
    #[arg(short, long, global = true, env = "TONEARM_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    import: ImportOverrides,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonearm=info,tonearm_cli=info,tonearm_importer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    cli.import.apply(&mut config.import);
    config.validate()?;
    tracing::debug!("Import configuration: {:?}", config.import);

    let output = execute(&cli.command, config.import)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
