//! `tarefas` -- command-line front end for the project dashboard.
//!
//! Drives the list, detail and form managers against the remote project API.
//!
//! # Environment variables
//!
//! | Variable                       | Required | Default                 | Description                  |
//! |--------------------------------|----------|-------------------------|------------------------------|
//! | `TAREFAS_API_URL`              | no       | `http://localhost:8000` | Base URL of the project API  |
//! | `TAREFAS_REQUEST_TIMEOUT_SECS` | no       | `30`                    | Per-request timeout          |
//! | `RUST_LOG`                     | no       | `tarefas_cli=info,...`  | Log filter (written to stderr) |

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tarefas_cli::args::{self, USAGE};
use tarefas_cli::commands::{self, RunContext};
use tarefas_client::api::HttpProjectApi;
use tarefas_client::config::ClientConfig;
use tarefas_state::navigation::NavigationHistory;
use tarefas_state::session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tarefas_cli=info,tarefas_state=info,tarefas_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match args::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let config = ClientConfig::from_env().context("Invalid configuration")?;
    tracing::debug!(
        api_url = %config.api_url,
        timeout_secs = config.request_timeout.as_secs(),
        "Loaded client configuration",
    );
    let api = HttpProjectApi::new(&config).context("Failed to build HTTP client")?;

    // Ctrl-C ends the session; managers drop whatever is still in flight.
    let session = Session::new();
    let interrupt = session.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, abandoning in-flight requests");
            interrupt.end();
        }
    });

    let mut history = NavigationHistory::new();
    let mut stdout = std::io::stdout().lock();
    let result = commands::run(
        command,
        RunContext {
            resource: Arc::new(api),
            session: &session,
            navigator: &mut history,
            out: &mut stdout,
        },
    )
    .await;

    if let Some(route) = history.current() {
        tracing::info!(path = %route, "Next view");
    }
    session.end();
    result
}
