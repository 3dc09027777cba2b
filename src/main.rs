use std::sync::Arc;

use color_eyre::Result;
use medref::adapters::{ConsoleDialog, MemoryDocument, ReqwestHttpClient};
use medref::app::App;
use medref::cli::{handle_version_command, parse_args, run_cli_command, CliCommand, USAGE};
use medref::config::ClientConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    color_eyre::install()?;

    // Logs go to stderr so stdout carries only the rendered view
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medref=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    info!("Using backend {}", config.base_url);

    let http = Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout));
    let document = Arc::new(MemoryDocument::app_shell());
    let dialog = Arc::new(ConsoleDialog::new());
    let app = App::new(config, http, document, dialog)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let report = runtime.block_on(async {
        app.start().await;
        run_cli_command(&app, &command).await
    });
    print!("{}", report);
    Ok(())
}
