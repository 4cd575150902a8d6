use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use ragdesk::adapters::{ConsoleNotifier, ReqwestHttpClient};
use ragdesk::cli::{run_command, Cli};
use ragdesk::config::ClientConfig;
use ragdesk::traits::{HttpClient, Notifier};

/// Log to stderr so answers on stdout stay pipeable. `RAGDESK_LOG` takes
/// the usual filter syntax and defaults to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("RAGDESK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let config = cli.apply_to(ClientConfig::from_env()?);
    tracing::debug!("Using backend {}", config.base_url);

    let http: Arc<dyn HttpClient> = Arc::new(match config.request_timeout {
        Some(timeout) => ReqwestHttpClient::with_timeout(timeout),
        None => ReqwestHttpClient::new(),
    });
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    let runtime = tokio::runtime::Runtime::new()?;
    let mut stdout = std::io::stdout();
    let succeeded =
        runtime.block_on(run_command(cli.command, http, notifier, &config, &mut stdout))?;

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
