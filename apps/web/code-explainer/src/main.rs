use code_explainer::error::AppError;
use code_explainer::logger::initialize as logger_initialize;
use code_explainer::routes::app_router;
use code_explainer::state::AppState;

use explainer_core::config::AppConfig;
use explainer_core::credentials;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use log::{info, warn};
use tokio::net::TcpListener;

const APP_DIR_NAME: &str = "code-explainer";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may not be up yet, so this goes to stderr directly.
            eprintln!("code-explainer failed to start: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let log_dir = log_directory();
    create_dir_all(&log_dir).map_err(|e| AppError::Startup {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    logger_initialize(&log_dir)?;

    info!("code-explainer starting");
    info!("Log directory: {}", log_dir.display());

    credentials::load_dotenv();

    let config_dir = std::env::current_dir().map_err(|e| AppError::Startup {
        message: format!("Failed to resolve working directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let config = AppConfig::load(&config_dir).map_err(|e| AppError::Startup {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if credentials::load_api_key(&config.provider.api_key_env).is_some() {
        info!(
            "Credential found in {}; remote explanations enabled",
            config.provider.api_key_env
        );
    } else {
        warn!(
            "No credential in {}; every submission will use local analysis",
            config.provider.api_key_env
        );
    }

    let addr = config.socket_addr();
    let state = Arc::new(AppState::new(config));
    let router = app_router(state);

    let listener = TcpListener::bind(&addr).await.map_err(|e| AppError::Startup {
        message: format!("Failed to bind {addr}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!("Listening on http://{addr}");

    axum::serve(listener, router)
        .await
        .map_err(|e| AppError::Internal {
            message: format!("Server error: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}

/// Per-user data dir when available, `./logs` otherwise.
fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
