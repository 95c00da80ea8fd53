//! Game configuration.
//!
//! Defaults reproduce the classic setup: a 20x12 stage, spawn at (5, 0), a
//! 1000ms base fall interval and the reset-to-base interval policy.

use crate::player::Position;
use crate::scoring::drop_interval_from;
use crate::tetrominos::MAX_SHAPE_SIZE;
use crate::types::{BASE_DROP_MS, MIN_DROP_MS, SPAWN_X, SPAWN_Y, STAGE_HEIGHT, STAGE_WIDTH};

/// How the fall interval is chosen when a new piece spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntervalPolicy {
    /// Spawns after a step without cleared rows fall back to the base interval;
    /// a step that clears rows uses the interval of the resulting level.
    #[default]
    ResetToBase,
    /// Every spawn uses the interval of the current level.
    FollowLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    /// Spawn column (left edge of the piece's bounding box); spawn row is always 0
    pub spawn_x: i32,
    pub base_drop_ms: u32,
    pub interval_policy: IntervalPolicy,
    /// Piece RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_size(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_interval_policy(mut self, policy: IntervalPolicy) -> Self {
        self.interval_policy = policy;
        self
    }

    pub fn with_spawn_x(mut self, spawn_x: i32) -> Self {
        self.spawn_x = spawn_x;
        self
    }

    pub fn spawn(&self) -> Position {
        Position::new(self.spawn_x, SPAWN_Y)
    }

    /// Fall interval for `level` under this config's base
    pub fn interval_for_level(&self, level: u32) -> u32 {
        drop_interval_from(self.base_drop_ms, level)
    }

    /// Panics unless every catalog piece fits the stage at the spawn column.
    pub fn validate(&self) {
        assert!(
            self.height >= MAX_SHAPE_SIZE && self.width >= MAX_SHAPE_SIZE,
            "stage {}x{} is smaller than a piece bounding box",
            self.height,
            self.width
        );
        assert!(
            self.spawn_x >= 0 && self.spawn_x as usize + MAX_SHAPE_SIZE <= self.width,
            "spawn column {} does not fit a {}-wide stage",
            self.spawn_x,
            self.width
        );
        assert!(
            self.base_drop_ms >= MIN_DROP_MS,
            "base interval {}ms is below the {}ms floor",
            self.base_drop_ms,
            MIN_DROP_MS
        );
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: STAGE_HEIGHT,
            width: STAGE_WIDTH,
            spawn_x: SPAWN_X,
            base_drop_ms: BASE_DROP_MS,
            interval_policy: IntervalPolicy::ResetToBase,
            seed: None,
        }
    }
}
