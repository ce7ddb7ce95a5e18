use anyhow::Context;
use su_rag::cli::{commands, output::Output, Cli};
use su_rag::ClientConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let config = ClientConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    init_tracing(&config, cli.verbose);

    if let Err(e) = commands::run(cli.command, &config, &output).await {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// `--verbose` forces debug; otherwise `RUST_LOG` wins over the configured level.
fn init_tracing(config: &ClientConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("su_rag=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
