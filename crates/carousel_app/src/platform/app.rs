use std::path::Path;
use std::sync::{mpsc, Arc};

use anyhow::Context;
use carousel_core::{update, AppState, Msg};
use carousel_engine::{EngineHandle, ReqwestFeedSource};
use carousel_logging::carousel_info;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render::TerminalRenderer;

pub fn run_app(config_path: &Path) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)
        .with_context(|| format!("failed to load configuration from {config_path:?}"))?;
    logging::initialize(LogDestination::from_config(config.log_file.as_deref()));
    carousel_info!(
        "Starting review carousel for app {} ({}), happy mode {}",
        config.app_id,
        config.app_locale,
        config.happy_mode
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let source = Arc::new(ReqwestFeedSource::new(config.fetch_settings()));
    let engine = EngineHandle::new(source, config.feed_request(), msg_tx.clone())
        .context("failed to start engine runtime")?;

    let mut runner = EffectRunner::new(engine, &config, msg_tx);
    let mut renderer = TerminalRenderer::new();
    let mut state = AppState::with_settings(config.core_settings());

    renderer.draw(&state.view());
    runner.start();

    // All state transitions happen on this thread, one message at a time.
    while let Ok(msg) = msg_rx.recv() {
        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);

        let view = state.view();
        if state.consume_dirty() {
            renderer.draw(&view);
        }
        if state.is_shut_down() {
            break;
        }
    }

    renderer.finish();
    carousel_info!("Review carousel stopped");
    Ok(())
}
