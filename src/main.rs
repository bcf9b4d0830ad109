//! oraddl - print the DDL of an Oracle schema object.

mod cli;

use cli::{Cli, Settings};
use oraddl::config::Config;
use oraddl::db::{self, CatalogClient};
use oraddl::error::Result;
use oraddl::{ddl, logging, output};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    logging::init_stderr_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli).await {
        debug!("Extraction failed: {e:?}");
        eprintln!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_path();
    debug!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;
    let settings = cli.resolve(&config)?;

    info!("Connection: {}", settings.connection.display_string());
    let client = db::connect(&settings.connection).await?;

    let outcome = extract(client.as_ref(), &settings).await;

    if let Err(e) = client.close().await {
        warn!("Failed to close session: {e}");
    }

    println!("{}", outcome?);
    Ok(())
}

/// Runs one extraction on an open session and renders the result.
async fn extract(client: &dyn CatalogClient, settings: &Settings) -> Result<String> {
    ddl::prepare_session(client, settings.sql_terminator).await?;

    let (object, text) = ddl::extract(client, &settings.schema, &settings.object).await?;
    let text = settings.post.apply(text);

    output::render(&object, &text, settings.output)
}
