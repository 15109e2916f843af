use clap::Parser;
use preview_poller::utils::{logger, validation::Validate};
use preview_poller::{CliConfig, HttpFetcher, LineSink, LocalStorage, Poller, PollerError};

fn exit_on_startup_error(stage: &str, e: &PollerError) -> ! {
    tracing::error!("{} failed: {} (Category: {:?})", stage, e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_on_startup_error("Loading configuration", &e),
    };

    if let Err(e) = config.validate() {
        exit_on_startup_error("Configuration validation", &e);
    }

    tracing::debug!("Resolved config: {:?}", config);
    tracing::info!(
        endpoint = %config.endpoint,
        output = %config.output_path,
        "Refreshing preview file"
    );

    let fetcher = match HttpFetcher::from_config(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => exit_on_startup_error("Building the HTTP client", &e),
    };

    let poller = match Poller::new(
        fetcher,
        LocalStorage::default(),
        LineSink::stdout(),
        config.poll_settings(),
    ) {
        Ok(poller) => poller,
        Err(e) => exit_on_startup_error("Creating the poller", &e),
    };
    let handle = poller.start();

    tokio::signal::ctrl_c().await?;
    tracing::info!("Interrupt received, stopping");

    handle.stop().await?;
    Ok(())
}
