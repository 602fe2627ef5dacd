use anyhow::Result;
use clap::Parser;

use load_test::cli::{Cli, Mode};
use load_test::config::ServerConfig;
use load_test::{scenarios, server};

fn init_tracing(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    match cli.mode {
        Mode::Server(args) => {
            init_tracing(args.verbose)?;

            let mut config = ServerConfig::load(args.config.as_deref())?;
            if let Some(bind) = args.bind {
                config.bind = bind;
            }

            // Run server (blocks until Ctrl+C)
            server::run_server(config).await?;
        }

        Mode::Client(client_args) => {
            init_tracing(client_args.verbose)?;

            tracing::info!("Madrasati Load Test Client Starting...");
            tracing::info!("Host: {}", client_args.host);
            tracing::info!("Profile: {}", client_args.profile);
            tracing::info!("User: {}", client_args.username);
            if let Some(report_file) = &client_args.report_file {
                tracing::info!("Report File: {}", report_file);
            }
            tracing::warn!(
                "NOTE: Ensure the API is reachable at '{}' (load-test server hosts a mock)",
                client_args.host
            );

            scenarios::student_load::run(client_args).await?;

            tracing::info!("Load test complete");
        }
    }

    Ok(())
}
