//! GridView Demo - Main Entry Point
//!
//! Opens a window with a data table browsing a sample journal dataset.

use gridview::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting GridView demo...");

    // Run the GPUI application
    run_app();
}
