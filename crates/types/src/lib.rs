//! Shared types and constants for the rules engine and its front ends.
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! core rules, the terminal renderer, and the input layer alike.
//!
//! # Stage Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (5, 0), top-left corner of the piece's bounding box
//!
//! # Timing and Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Fall interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_DROP_MS` | 100 | Interval floor (reached at level 10) |
//! | `ROWS_PER_LEVEL` | 10 | Level `n` ends once `n * 10` rows are cleared in total |
//! | `POINTS_PER_ROW` | 10 | Flat score per cleared row |
//! | `TICK_MS` | 16 | Front-end poll interval |
//!
//! # Examples
//!
//! ```
//! use blockdrop_types::{Cell, CellStatus, GameAction, PieceKind, STAGE_HEIGHT, STAGE_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert!(!kind.is_empty());
//!
//! let cell = Cell::merged(kind);
//! assert_eq!(cell.status, CellStatus::Merged);
//! assert!(!cell.is_clear());
//!
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//! assert_eq!((STAGE_HEIGHT, STAGE_WIDTH), (20, 12));
//! ```

/// Stage width in cells (12 columns)
pub const STAGE_WIDTH: usize = 12;

/// Stage height in cells (20 rows)
pub const STAGE_HEIGHT: usize = 20;

/// Column where new pieces spawn (left edge of the bounding box)
pub const SPAWN_X: i32 = 5;

/// Row where new pieces spawn (top edge of the bounding box)
pub const SPAWN_Y: i32 = 0;

/// Fall interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Fall interval reduction per level gained
pub const DROP_STEP_MS: u32 = 100;

/// Fastest possible fall interval
pub const MIN_DROP_MS: u32 = 100;

/// Level a fresh game starts at
pub const START_LEVEL: u32 = 1;

/// Rows needed per level (threshold is `level * ROWS_PER_LEVEL` cumulative rows)
pub const ROWS_PER_LEVEL: u32 = 10;

/// Points awarded for each cleared row (no multi-row bonus)
pub const POINTS_PER_ROW: u32 = 10;

/// Front-end poll interval in milliseconds (~60 FPS)
pub const TICK_MS: u32 = 16;

/// Piece identifier, including the empty marker.
///
/// The non-empty variants double as the occupancy flag of a stage cell and as
/// the key for its color, so "is this cell filled" is simply `kind != Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    Empty,
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// The seven playable kinds, in catalog order.
    pub const PIECES: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    pub fn is_empty(self) -> bool {
        self == PieceKind::Empty
    }

    /// Parse piece kind from string (case-insensitive). `"0"` is the empty marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdrop_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("0"), Some(PieceKind::Empty));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "0" => Some(PieceKind::Empty),
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Single-letter label (`"0"` for empty).
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Empty => "0",
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Status of a stage cell.
///
/// - **Clear**: nothing here
/// - **Merged**: part of a piece that has been committed to the stage
/// - **Active**: part of the falling piece, only ever present in display composites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStatus {
    #[default]
    Clear,
    Merged,
    Active,
}

/// A single stage cell: what occupies it and in which status.
///
/// Invariant: `kind == PieceKind::Empty` exactly when `status == CellStatus::Clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub kind: PieceKind,
    pub status: CellStatus,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        kind: PieceKind::Empty,
        status: CellStatus::Clear,
    };

    pub fn merged(kind: PieceKind) -> Self {
        Self {
            kind,
            status: CellStatus::Merged,
        }
    }

    pub fn active(kind: PieceKind) -> Self {
        Self {
            kind,
            status: CellStatus::Active,
        }
    }

    /// Free for collision purposes.
    pub fn is_clear(&self) -> bool {
        self.status == CellStatus::Clear
    }

    /// Counts toward a full row.
    pub fn is_filled(&self) -> bool {
        !self.kind.is_empty()
    }

    pub fn is_consistent(&self) -> bool {
        self.kind.is_empty() == self.is_clear()
    }
}

/// Core-side record emitted each time a piece merges into the stage.
///
/// Observers consume it with `GameState::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    /// Kind of the piece that merged
    pub kind: PieceKind,
    /// Rows removed by this merge
    pub rows_cleared: u32,
    /// Points gained by this merge
    pub points: u32,
    /// Score after the merge
    pub score: u32,
    /// Level after the merge
    pub level: u32,
    /// Cumulative rows cleared after the merge
    pub total_rows: u32,
    pub leveled_up: bool,
    pub game_over: bool,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Discrete commands a front end can send to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Advance the piece one row now (same step as a gravity tick)
    SoftDrop,
    /// Rotate the piece a quarter turn
    Rotate,
    /// Toggle automatic falling
    Pause,
    /// Start a fresh game (also used to start the very first one)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdrop_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}
