mod app_state;
mod display;
mod reachability;
mod window;

use glass_config::ShellConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("glass shell panicked: {info}");
        default_hook(info);
    }));
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    install_panic_hook();

    tracing::info!("glass shell v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config = glass_config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ShellConfig::default()
    });
    tracing::info!(
        glass = config.glass.enabled,
        app_url = %config.urls.app_url,
        "Config loaded"
    );
    tracing::debug!("{}", glass_config::config_to_json(&config));

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::ShellApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
