use std::sync::mpsc;
use std::time::Duration;

use carousel_core::{Effect, Msg};
use carousel_engine::EngineHandle;
use carousel_logging::{carousel_debug, carousel_info};

use super::config::AppConfig;

/// Executes the effects returned by `update` against the engine.
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    refresh_period: Duration,
    transition_period: Duration,
    sample_interval: Duration,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, config: &AppConfig, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            engine,
            msg_tx,
            refresh_period: config.refresh_period(),
            transition_period: config.transition_period(),
            sample_interval: config.sample_interval(),
        }
    }

    /// Starts the refresh timer (first tick immediately) and Ctrl-C forwarding.
    pub fn start(&self) {
        carousel_info!(
            "Refreshing feed every {:?}, slides every {:?}",
            self.refresh_period,
            self.transition_period
        );
        self.engine.forward_ctrl_c();
        self.engine
            .timers()
            .repeating(Duration::ZERO, self.refresh_period, || Msg::RefreshTick);
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchFeed { seq } => {
                    carousel_debug!("FetchFeed seq={}", seq);
                    self.engine.fetch(seq);
                }
                Effect::StartDisplayCycle => self.start_display_cycle(),
                Effect::ScheduleTransitionPhase { phase, after } => {
                    self.engine
                        .timers()
                        .once(after, Msg::TransitionPhase(phase));
                }
                Effect::Shutdown => {
                    carousel_info!("Stopping timers");
                    self.engine.shutdown();
                }
            }
        }
    }

    fn start_display_cycle(&self) {
        let clock = self.engine.clock();
        let timers = self.engine.timers();
        let at_ms = clock.now_ms();

        timers.repeating(self.transition_period, self.transition_period, || {
            Msg::TransitionTick
        });
        timers.repeating(Duration::ZERO, self.sample_interval, move || {
            Msg::ProgressSample {
                now_ms: clock.now_ms(),
            }
        });
        carousel_info!("Display cycle started");
        let _ = self.msg_tx.send(Msg::DisplayCycleStarted { at_ms });
    }
}
