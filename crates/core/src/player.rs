//! The active (falling) piece.

use arrayvec::ArrayVec;

use crate::tetrominos::{ShapeMatrix, Tetromino};
use crate::types::{Cell, PieceKind, SPAWN_X, SPAWN_Y};

/// Grid position of a piece's bounding-box top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Default spawn position (5, 0)
    pub const SPAWN: Position = Position::new(SPAWN_X, SPAWN_Y);
}

/// A candidate displacement for collision checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const NONE: Offset = Offset::new(0, 0);
    pub const LEFT: Offset = Offset::new(-1, 0);
    pub const RIGHT: Offset = Offset::new(1, 0);
    pub const DOWN: Offset = Offset::new(0, 1);

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Active piece state.
///
/// The shape is a copy of a catalog entry so that rotation can replace it
/// without touching the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub pos: Position,
    pub tetromino: ShapeMatrix,
    /// Set once the piece has been resolved against the stage and is pending merge.
    pub collided: bool,
}

impl Player {
    /// Fresh piece at `pos` using the given catalog entry's shape
    pub fn spawn(tetromino: &Tetromino, pos: Position) -> Self {
        Self {
            pos,
            tetromino: tetromino.shape,
            collided: false,
        }
    }

    /// Placeholder held before the first game starts: blank 1x1 shape at the origin
    pub fn placeholder() -> Self {
        Self {
            pos: Position::default(),
            tetromino: ShapeMatrix::EMPTY,
            collided: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.tetromino.kind()
    }

    /// Same piece shifted by `offset`
    pub fn moved(&self, offset: Offset) -> Self {
        Self {
            pos: Position::new(self.pos.x + offset.dx, self.pos.y + offset.dy),
            ..*self
        }
    }

    /// Same position with a different shape
    pub fn with_shape(&self, tetromino: ShapeMatrix) -> Self {
        Self { tetromino, ..*self }
    }

    /// Absolute (x, y) of every occupied shape entry
    pub fn absolute_cells(&self) -> impl Iterator<Item = (i32, i32, PieceKind)> + '_ {
        self.tetromino
            .occupied()
            .map(move |(lx, ly, kind)| (self.pos.x + lx, self.pos.y + ly, kind))
    }

    /// Occupied cells ready to stamp, built with `make_cell` from each entry's kind
    pub fn stamp_cells(&self, make_cell: impl Fn(PieceKind) -> Cell) -> ArrayVec<(i32, i32, Cell), 16> {
        self.absolute_cells()
            .map(|(x, y, kind)| (x, y, make_cell(kind)))
            .collect()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetrominos::shape_of;

    #[test]
    fn test_spawn_player() {
        let p = Player::spawn(&shape_of(PieceKind::T), Position::SPAWN);
        assert_eq!(p.pos, Position::new(5, 0));
        assert!(!p.collided);
        assert_eq!(p.kind(), PieceKind::T);
    }

    #[test]
    fn test_absolute_cells_follow_position() {
        let p = Player::spawn(&shape_of(PieceKind::O), Position::new(3, 7));
        let cells: Vec<_> = p.absolute_cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(cells, vec![(3, 7), (4, 7), (3, 8), (4, 8)]);
    }

    #[test]
    fn test_moved_keeps_shape() {
        let p = Player::spawn(&shape_of(PieceKind::L), Position::SPAWN);
        let q = p.moved(Offset::DOWN).moved(Offset::LEFT);
        assert_eq!(q.pos, Position::new(4, 1));
        assert_eq!(q.tetromino, p.tetromino);
    }

    #[test]
    fn test_placeholder_has_no_cells() {
        let p = Player::placeholder();
        assert_eq!(p.absolute_cells().count(), 0);
        assert_eq!(p.kind(), PieceKind::Empty);
    }
}
