//! Storefront CLI entrypoint for browsing filter options and the cart.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use storefront::{CommerceError, OperationMode, StorefrontConfig};
use tracing_subscriber::EnvFilter;

mod cli;

/// Environment variable holding the log filter directives.
const LOG_ENV_VAR: &str = "STOREFRONT_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CommerceError> {
    let config = load_config()?;
    config.validate()?;

    match config.operation_mode() {
        OperationMode::FilterOptions => cli::filter_options::run(&config).await,
        OperationMode::Cart => cli::cart::run(&config).await,
        OperationMode::Checkout => cli::checkout::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CommerceError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<StorefrontConfig, CommerceError> {
    StorefrontConfig::load().map_err(|error| CommerceError::Configuration {
        message: error.to_string(),
    })
}

/// Installs the stderr log subscriber; `STOREFRONT_LOG` overrides the `warn`
/// default.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("a global subscriber is already installed");
    }
}
