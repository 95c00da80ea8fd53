//! Game session - a `GameState` paired with its drop scheduler
//!
//! This is the controller a front end talks to. It routes actions, feeds
//! elapsed time to the scheduler and keeps the scheduler's period in step with
//! the state's fall interval after every change.

use crate::config::GameConfig;
use crate::game_state::GameState;
use crate::scheduler::DropScheduler;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, LockEvent};

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    scheduler: DropScheduler,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::from_state(GameState::new(config))
    }

    /// Wrap an existing state; the scheduler picks up its current interval.
    pub fn from_state(state: GameState) -> Self {
        let scheduler = DropScheduler::new(state.fall_interval());
        Self { state, scheduler }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scheduler(&self) -> &DropScheduler {
        &self.scheduler
    }

    pub fn is_paused(&self) -> bool {
        self.scheduler.is_paused()
    }

    /// Start the first game (no-op once started)
    pub fn start(&mut self) {
        self.state.start();
        self.sync();
    }

    /// Route one action. Returns true if anything changed.
    ///
    /// Pause only toggles the scheduler; movement stays available while paused.
    pub fn dispatch(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if !self.state.is_active() {
                    return false;
                }
                self.scheduler.toggle_pause();
                true
            }
            GameAction::Restart => {
                self.state.restart();
                self.scheduler.resume();
                self.scheduler.reset();
                self.sync();
                true
            }
            _ => {
                let changed = self.state.apply_action(action);
                self.sync();
                changed
            }
        }
    }

    /// Advance the clock by `elapsed_ms`. Returns the number of gravity steps run.
    pub fn update(&mut self, elapsed_ms: u32) -> u32 {
        if !self.scheduler.advance(elapsed_ms) {
            return 0;
        }
        if !self.state.tick() {
            return 0;
        }
        self.sync();
        1
    }

    /// Copy the state's fall interval into the scheduler
    pub fn sync(&mut self) {
        self.scheduler.set_interval(self.state.fall_interval());
    }

    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.state.take_last_event()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
        out.paused = self.scheduler.is_paused();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
