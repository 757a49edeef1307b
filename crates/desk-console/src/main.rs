#![allow(non_snake_case)]

mod config;

use clap::Parser;
use desk_accounts::AccountError;
use desk_api::middleware::auth::AppState;
use desk_types::CreateAccountRequest;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "desk-console",
    version,
    about = "Account API with token auth and an admin site"
)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "config.example.toml")]
    config: String,

    /// Overrides `[server] bind`
    #[arg(long)]
    bind: Option<String>,

    /// Overrides `[server] port`
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut appConfig = config::load(&cli.config);
    if let Some(bind) = cli.bind {
        appConfig.server.bind = bind;
    }
    if let Some(port) = cli.port {
        appConfig.server.port = port;
    }
    info!(
        "loaded config from {}: bind={}:{}",
        cli.config, appConfig.server.bind, appConfig.server.port
    );

    let appState = AppState::in_memory(
        appConfig.accounts.clone(),
        appConfig.tokens.clone(),
        appConfig.admin.secure_cookie,
    );

    bootstrap_superusers(&appState, &appConfig.admin.superusers).await;

    let app = desk_api::api_router(appState).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", appConfig.server.bind, appConfig.server.port);
    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

/// Creates the configured superusers; entries that fail validation (including
/// an email that already exists) are logged and skipped.
async fn bootstrap_superusers(state: &AppState, superusers: &[config::SuperuserConfig]) -> usize {
    let mut created = 0;

    for entry in superusers {
        let request = CreateAccountRequest {
            email: Some(entry.email.clone()),
            password: Some(entry.password.clone()),
            name: entry.name.clone(),
        };

        match state.accounts.create_superuser(request).await {
            Ok(account) => {
                info!(account_id = account.id, "bootstrap superuser {} ready", account.email);
                created += 1;
            }
            Err(AccountError::Validation(errors)) => {
                warn!("skipping bootstrap superuser {}: {errors:?}", entry.email);
            }
            Err(e) => {
                warn!("failed to create bootstrap superuser {}: {e}", entry.email);
            }
        }
    }

    created
}
