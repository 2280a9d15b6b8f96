use std::process;

use cicd_demo_app::config::load_config;
use cicd_demo_app::startup;
use cicd_demo_app::state::AppState;
use cicd_demo_app::utils::logger::init_logging;
use tracing::error;

// -- Entrypoint

#[tokio::main]
async fn main() {
    // Taken first so uptime covers configuration and logging setup too.
    let state = AppState::new();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", e);
        process::exit(1);
    }

    if let Err(e) = startup::run(&config, state).await {
        error!("{}", e);
        process::exit(1);
    }
}
