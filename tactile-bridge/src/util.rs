use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Stderr logging. `RUST_LOG` overrides the `info` default, e.g.
/// `RUST_LOG=tactile_switch=debug,tactile_core=trace`.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .try_init();
}

/// Route panics through tracing so they land next to the frame log.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let thread = std::thread::current();
        let thread = thread.name().unwrap_or("<unnamed>");
        tracing::error!(thread, "host {info}");
    }));
}

/// `<config dir>/tactile/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "tactile", "tactile").map(|dirs| dirs.config_dir().join("config.json"))
}
