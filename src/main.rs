//! Repolens CLI entrypoint for interactive repository discovery.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use bubbletea_rs::Program;
use ortho_config::OrthoConfig;

use repolens::location::SharedLocationSink;
use repolens::tui::{
    DiscoveryApp, set_initial_location, set_location_sink, set_search_gateway,
};
use repolens::{DiscoveryError, OctocrabSearchGateway, RepolensConfig};

#[tokio::main]
async fn main() -> ExitCode {
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

async fn run() -> Result<(), DiscoveryError> {
    let config = load_config()?;
    let location = config.initial_location()?;

    let gateway =
        OctocrabSearchGateway::from_config(config.api_base(), config.resolve_token().as_deref())?;
    let sink = SharedLocationSink::new();

    // Store startup context for DiscoveryApp::init() and the fetch
    // commands. If already set (e.g. re-running in the same process), the
    // existing values remain.
    let _ = set_search_gateway(Arc::new(gateway));
    let _ = set_initial_location(location);
    let _ = set_location_sink(Arc::new(sink.clone()));

    run_tui().await?;

    write_resume_hint(&sink)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`DiscoveryError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<RepolensConfig, DiscoveryError> {
    RepolensConfig::load().map_err(|error| DiscoveryError::Configuration {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `DiscoveryApp` model.
async fn run_tui() -> Result<(), DiscoveryError> {
    let program = Program::<DiscoveryApp>::builder()
        .alt_screen(true)
        .build()
        .map_err(|error| DiscoveryError::Io {
            message: format!("TUI error: {error}"),
        })?;

    program.run().await.map_err(|error| DiscoveryError::Io {
        message: format!("TUI error: {error}"),
    })?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}

/// Prints the mirrored location so the session can be re-created later.
fn write_resume_hint(sink: &SharedLocationSink) -> Result<(), DiscoveryError> {
    let Some(location) = sink.latest().filter(|latest| !latest.is_empty()) else {
        return Ok(());
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Last view location: ?{location}").map_err(|error| DiscoveryError::Io {
        message: error.to_string(),
    })
}
