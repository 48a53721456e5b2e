use clap::Parser;
use profiletwin::cli::handlers;
use profiletwin::cli::Cli;
use profiletwin::cli::Commands;
use profiletwin::config::AppConfig;
use profiletwin::config::ConfigSource;
use profiletwin::config::CONFIG_FILE;
use profiletwin::config::EXAMPLE_CONFIG_FILE;
use profiletwin::logging;
use profiletwin::Result;
use tracing::error;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = AppConfig::load_with_source()?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    match &cli.command {
        // The server logs to console and a rolling file; one-shot commands
        // keep stdout clean for their output
        Commands::Serve { .. } => logging::init_logging_with_config(Some(&config))?,
        _ => logging::init_simple_logging_with_level(&config.logging.level)?,
    }

    if source == ConfigSource::ExampleFile {
        warn!("Using {EXAMPLE_CONFIG_FILE}. Please create {CONFIG_FILE} for production use.");
    }

    let result = match cli.command {
        Commands::Serve { host, port, cors } => {
            handlers::handle_serve(&config, host, port, cors).await
        }
        Commands::Ask {
            questions,
            keep_going,
            sources,
        } => handlers::handle_ask(&config, &questions, keep_going, sources).await,
        Commands::Search { query, category } => {
            handlers::handle_search(&config, &query, category.as_deref()).await
        }
        Commands::Sections => handlers::handle_sections(&config).await,
        Commands::Health => handlers::handle_health(&config).await,
        Commands::Index { file } => handlers::handle_index(&config, &file).await,
        Commands::Config => {
            handlers::handle_config(&config);
            Ok(())
        }
    };

    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }
    result
}
