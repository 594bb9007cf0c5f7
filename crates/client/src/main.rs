//! Echo battle client binary.
//!
//! Main entry point: plays one auto-piloted battle and prints it.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. Content (battle tuning and character catalog)
//! 3. Runtime via `RuntimeBuilder`
//! 4. Output renderer (text or JSON lines)
//!
//! # Examples
//!
//! ```bash
//! ECHO_SEED=7 ECHO_ENEMY=dark_knight cargo run -p echo-client
//! ECHO_OUTPUT=json cargo run -p echo-client
//! ```

use anyhow::{Context, Result};
use echo_client::{ClientConfig, HeuristicProvider, Renderer, drain_events};
use echo_content::{CharacterLoader, ConfigLoader, ContentFactory};
use echo_runtime::{Runtime, RuntimeConfig, Topic};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging();

    let config = ClientConfig::from_env();
    tracing::info!("Starting Echo client");
    tracing::debug!("Client config: {:?}", config);

    let (battle, catalog) = match &config.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            (factory.load_config()?, factory.load_characters()?)
        }
        None => (ConfigLoader::embedded()?, CharacterLoader::embedded()?),
    };

    let mut player = catalog
        .get("hero")
        .cloned()
        .context("character catalog has no 'hero' entry")?;
    player.name = config.player_name.clone();
    let enemy = catalog
        .get(&config.enemy)
        .cloned()
        .with_context(|| format!("unknown enemy '{}'", config.enemy))?;

    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            battle,
            seed: config.seed,
            ..RuntimeConfig::default()
        })
        .player(player)
        .enemy(enemy)
        .player_provider(HeuristicProvider::default())
        .build()?;
    tracing::info!("Runtime built, seed {}", runtime.engine().seed());

    let mut receivers = runtime.event_bus().subscribe_multiple(&Topic::ALL);
    let mut renderer = Renderer::new(std::io::stdout().lock(), config.output);

    loop {
        if let Some(outcome) = runtime.engine().outcome() {
            renderer.finish(outcome)?;
            break;
        }
        if runtime.engine().turn() > config.max_turns {
            anyhow::bail!("battle did not finish within {} turns", config.max_turns);
        }

        runtime.step().await?;
        let events = drain_events(&mut receivers);
        renderer.render(runtime.engine(), &events)?;
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}

/// Log to stderr so stdout carries only the battle.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
