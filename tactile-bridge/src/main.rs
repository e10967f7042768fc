use anyhow::{Context, Result};
use tactile_bridge::app::{FRAME, Host};
use tactile_bridge::args::Args;
use tactile_bridge::script::{self, DEFAULT_SCRIPT};
use tactile_bridge::util;
use tactile_core::UiConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    util::init_tracing();
    util::install_panic_hook();

    let args = Args::parse(std::env::args().skip(1))?;

    let config = match args.config.or_else(util::default_config_path) {
        Some(path) => {
            UiConfig::load(&path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => UiConfig::default(),
    };

    let text = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => DEFAULT_SCRIPT.to_string(),
    };
    let steps = script::parse(&text)?;

    tracing::info!("Tactile bridge starting, {} steps", steps.len());
    let mut host = Host::new(config)?;
    host.run(&steps, FRAME).await?;

    let sw = host.switch();
    let tree = host.tree();
    let (state, value) = (sw.state(tree)?, sw.value(tree)?);
    let knob = sw.knob_overlay(tree)?;
    tracing::info!(state, value, ?knob, frames = host.frames(), "script finished");
    Ok(())
}
