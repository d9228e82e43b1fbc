mod app_state;
mod cli;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use orrery_common::OrreryError;
use orrery_config::OrreryConfig;

const DEFAULT_DIRECTIVE: &str = "info";

/// `filter` (normally from `RUST_LOG`) plus the CLI or config directive;
/// an unparsable directive falls back to `info`.
fn env_filter(filter: EnvFilter, directive: &str) -> EnvFilter {
    match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("invalid log directive '{directive}': {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    }
}

/// Create the event loop and drive the app until exit.
fn run(config: OrreryConfig) -> orrery_common::Result<()> {
    let event_loop = EventLoop::new().map_err(|e| OrreryError::Window(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = app_state::OrreryApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| OrreryError::Window(e.to_string()))
}

fn main() {
    let args = cli::parse();

    // Config is loaded before logging so its level can seed the filter;
    // load errors are reported once the subscriber exists.
    let loaded = orrery_config::load_config(args.config.as_deref());

    let directive = args
        .log_level
        .clone()
        .or_else(|| {
            loaded
                .as_ref()
                .ok()
                .map(|c| c.logging.level.as_directive().to_string())
        })
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(EnvFilter::from_default_env(), &directive))
        .init();

    tracing::info!("Orrery v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        OrreryConfig::default()
    });

    if let Some(segments) = args.light_segments {
        tracing::info!(x = segments.x, y = segments.y, "Light segments override");
        config.light.segments = segments;
    }

    if args.print_config {
        println!("{}", orrery_config::config_to_json(&config));
        return;
    }

    tracing::info!(
        body = %format!("{}x{}", config.body.segments.x, config.body.segments.y),
        light = %format!("{}x{}", config.light.segments.x, config.light.segments.y),
        "Config loaded"
    );

    if let Err(e) = run(config) {
        tracing::error!("Event loop error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_applies_level_directive() {
        let filter = env_filter(EnvFilter::new(""), "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn env_filter_applies_target_directive() {
        let filter = env_filter(EnvFilter::new(""), "orrery_renderer=trace");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
