//! Tetromino catalog - base shape matrices and colors for the seven pieces
//!
//! Shapes are square matrices (2x2, 3x3 or 4x4). Each entry is either
//! `PieceKind::Empty` or the piece's own kind, so the matrix can be stamped
//! straight onto the stage.

use crate::types::{PieceKind, Rgb};

/// Largest supported shape matrix side.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square shape matrix stored inline (no allocation).
///
/// Only the top-left `size x size` block is meaningful; everything else stays
/// `PieceKind::Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: usize,
    cells: [[PieceKind; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// The 1x1 empty shape held by the placeholder player before a game starts.
    pub const EMPTY: ShapeMatrix = ShapeMatrix {
        size: 1,
        cells: [[PieceKind::Empty; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    };

    /// Build a shape from a 0/1 occupancy mask.
    ///
    /// Panics if the mask is not square or larger than [`MAX_SHAPE_SIZE`].
    pub fn from_mask(kind: PieceKind, mask: &[&[u8]]) -> Self {
        let size = mask.len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&size),
            "shape size {size} out of range"
        );
        let mut cells = [[PieceKind::Empty; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in mask.iter().enumerate() {
            assert_eq!(row.len(), size, "shape matrix must be square");
            for (x, &bit) in row.iter().enumerate() {
                if bit != 0 {
                    cells[y][x] = kind;
                }
            }
        }
        Self { size, cells }
    }

    /// Build a shape from explicit rows of kinds.
    ///
    /// Panics if the rows are not square or larger than [`MAX_SHAPE_SIZE`].
    pub fn from_rows(rows: &[&[PieceKind]]) -> Self {
        let size = rows.len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&size),
            "shape size {size} out of range"
        );
        let mut cells = [[PieceKind::Empty; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape matrix must be square");
            cells[y][..size].copy_from_slice(row);
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at local (x, y); `Empty` outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> PieceKind {
        if x >= self.size || y >= self.size {
            return PieceKind::Empty;
        }
        self.cells[y][x]
    }

    /// Rows of the meaningful `size x size` block.
    pub fn rows(&self) -> impl Iterator<Item = &[PieceKind]> + '_ {
        self.cells[..self.size].iter().map(|row| &row[..self.size])
    }

    /// Occupied entries as `(local_x, local_y, kind)`, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, PieceKind)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, kind)| !kind.is_empty())
                .map(move |(x, &kind)| (x as i32, y as i32, kind))
        })
    }

    /// Kind of the first occupied entry, `Empty` for a blank shape.
    pub fn kind(&self) -> PieceKind {
        self.occupied()
            .next()
            .map(|(_, _, kind)| kind)
            .unwrap_or(PieceKind::Empty)
    }

    /// Quarter turn: transpose, then reverse the row order.
    pub fn rotated(&self) -> Self {
        let n = self.size;
        let mut cells = [[PieceKind::Empty; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in cells.iter_mut().take(n).enumerate() {
            for (x, cell) in row.iter_mut().take(n).enumerate() {
                *cell = self.cells[x][n - 1 - y];
            }
        }
        Self { size: n, cells }
    }
}

/// A catalog entry: kind, base shape and display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Rgb,
}

/// Look up the base shape and color for a kind.
///
/// `PieceKind::Empty` yields the 1x1 blank shape in black.
pub fn shape_of(kind: PieceKind) -> Tetromino {
    let shape = match kind {
        PieceKind::Empty => ShapeMatrix::EMPTY,
        PieceKind::I => ShapeMatrix::from_mask(
            kind,
            &[&[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0]],
        ),
        PieceKind::J => ShapeMatrix::from_mask(kind, &[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]]),
        PieceKind::L => ShapeMatrix::from_mask(kind, &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
        PieceKind::O => ShapeMatrix::from_mask(kind, &[&[1, 1], &[1, 1]]),
        PieceKind::S => ShapeMatrix::from_mask(kind, &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
        PieceKind::T => ShapeMatrix::from_mask(kind, &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::Z => ShapeMatrix::from_mask(kind, &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
    };

    Tetromino {
        kind,
        shape,
        color: color_of(kind),
    }
}

/// Display color for a kind.
pub fn color_of(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::Empty => Rgb::new(0, 0, 0),
        PieceKind::I => Rgb::new(80, 227, 230),
        PieceKind::J => Rgb::new(36, 95, 223),
        PieceKind::L => Rgb::new(223, 173, 36),
        PieceKind::O => Rgb::new(223, 217, 36),
        PieceKind::S => Rgb::new(48, 211, 56),
        PieceKind::T => Rgb::new(132, 61, 198),
        PieceKind::Z => Rgb::new(227, 78, 78),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_piece_has_four_cells_of_its_own_kind() {
        for kind in PieceKind::PIECES {
            let t = shape_of(kind);
            assert_eq!(t.kind, kind);
            let cells: Vec<_> = t.shape.occupied().collect();
            assert_eq!(cells.len(), 4, "{:?}", kind);
            assert!(cells.iter().all(|&(_, _, k)| k == kind));
            assert_eq!(t.shape.kind(), kind);
        }
    }

    #[test]
    fn test_shape_sizes() {
        assert_eq!(shape_of(PieceKind::I).shape.size(), 4);
        assert_eq!(shape_of(PieceKind::O).shape.size(), 2);
        for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
            assert_eq!(shape_of(kind).shape.size(), 3);
        }
    }

    #[test]
    fn test_empty_entry() {
        let t = shape_of(PieceKind::Empty);
        assert_eq!(t.shape, ShapeMatrix::EMPTY);
        assert_eq!(t.shape.occupied().count(), 0);
        assert_eq!(t.shape.kind(), PieceKind::Empty);
        assert_eq!(t.color, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_rotated_l() {
        use PieceKind::{Empty as E, L};
        let rotated = shape_of(L).shape.rotated();
        let expected = ShapeMatrix::from_rows(&[&[E, E, L], &[L, L, L], &[E, E, E]]);
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in PieceKind::PIECES {
            let shape = shape_of(kind).shape;
            let back = shape.rotated().rotated().rotated().rotated();
            assert_eq!(back, shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_o_is_rotation_invariant() {
        let o = shape_of(PieceKind::O).shape;
        assert_eq!(o.rotated(), o);
    }

    #[test]
    fn test_get_outside_matrix_is_empty() {
        let o = shape_of(PieceKind::O).shape;
        assert_eq!(o.get(0, 0), PieceKind::O);
        assert_eq!(o.get(2, 0), PieceKind::Empty);
        assert_eq!(o.get(0, 3), PieceKind::Empty);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_non_square_mask_panics() {
        ShapeMatrix::from_mask(PieceKind::T, &[&[1, 1, 1], &[0, 1]]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_oversized_mask_panics() {
        let row: &[u8] = &[1, 1, 1, 1, 1];
        ShapeMatrix::from_mask(PieceKind::I, &[row, row, row, row, row]);
    }
}
