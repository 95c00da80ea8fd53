//! Stage tests - creation, full-row detection and sweeping

use blockdrop::core::Stage;
use blockdrop::types::{Cell, CellStatus, PieceKind, STAGE_HEIGHT, STAGE_WIDTH};

fn fill_row(stage: &mut Stage, y: i32, kind: PieceKind) {
    for x in 0..stage.width() as i32 {
        stage.set(x, y, Cell::merged(kind));
    }
}

#[test]
fn test_new_stage_is_clear() {
    let stage = Stage::default();
    assert_eq!(stage.height(), STAGE_HEIGHT);
    assert_eq!(stage.width(), STAGE_WIDTH);
    assert_eq!(stage.cells().len(), STAGE_HEIGHT * STAGE_WIDTH);
    for cell in stage.cells() {
        assert_eq!(*cell, Cell::EMPTY);
        assert_eq!(cell.status, CellStatus::Clear);
    }
}

#[test]
fn test_out_of_bounds_access() {
    let mut stage = Stage::new(5, 4);
    assert_eq!(stage.get(-1, 0), None);
    assert_eq!(stage.get(0, -1), None);
    assert_eq!(stage.get(4, 0), None);
    assert_eq!(stage.get(0, 5), None);
    assert!(!stage.set(4, 0, Cell::merged(PieceKind::I)));
    assert!(!stage.is_clear(-1, 0));
}

#[test]
#[should_panic(expected = "at least 1x1")]
fn test_zero_sized_stage_panics() {
    Stage::new(0, 12);
}

#[test]
#[should_panic(expected = "same width")]
fn test_ragged_rows_panic() {
    Stage::from_rows(vec![vec![Cell::EMPTY; 3], vec![Cell::EMPTY; 2]]);
}

#[test]
fn test_sweep_without_full_rows_is_unchanged() {
    let mut stage = Stage::default();
    stage.set(0, 19, Cell::merged(PieceKind::T));
    stage.set(11, 10, Cell::merged(PieceKind::J));
    let before = stage.clone();

    assert_eq!(stage.sweep_rows(), 0);
    assert_eq!(stage, before);
}

#[test]
fn test_sweep_bottom_row_shifts_everything_down() {
    let mut stage = Stage::default();
    fill_row(&mut stage, 19, PieceKind::I);
    stage.set(3, 18, Cell::merged(PieceKind::L));
    stage.set(7, 0, Cell::merged(PieceKind::S));

    assert_eq!(stage.sweep_rows(), 1);
    assert_eq!(stage.height(), STAGE_HEIGHT);
    assert!(stage.row(0).iter().all(Cell::is_clear));
    assert_eq!(stage.get(3, 19), Some(Cell::merged(PieceKind::L)));
    assert_eq!(stage.get(7, 1), Some(Cell::merged(PieceKind::S)));
    assert!(!stage.is_row_full(19));
}

#[test]
fn test_sweep_non_adjacent_rows_keeps_order() {
    let mut stage = Stage::new(6, 3);
    // Rows top to bottom: a, FULL, b, FULL, c, FULL
    stage.set(0, 0, Cell::merged(PieceKind::J));
    fill_row(&mut stage, 1, PieceKind::I);
    stage.set(1, 2, Cell::merged(PieceKind::L));
    fill_row(&mut stage, 3, PieceKind::I);
    stage.set(2, 4, Cell::merged(PieceKind::T));
    fill_row(&mut stage, 5, PieceKind::I);

    assert_eq!(stage.full_row_count(), 3);
    assert_eq!(stage.sweep_rows(), 3);

    for y in 0..3 {
        assert!(stage.row(y).iter().all(Cell::is_clear), "row {y}");
    }
    assert_eq!(stage.get(0, 3), Some(Cell::merged(PieceKind::J)));
    assert_eq!(stage.get(1, 4), Some(Cell::merged(PieceKind::L)));
    assert_eq!(stage.get(2, 5), Some(Cell::merged(PieceKind::T)));
}

#[test]
fn test_sweep_whole_stage() {
    let mut stage = Stage::new(4, 4);
    for y in 0..4 {
        fill_row(&mut stage, y, PieceKind::O);
    }
    assert_eq!(stage.sweep_rows(), 4);
    assert_eq!(stage, Stage::new(4, 4));
}

#[test]
fn test_row_with_one_gap_is_not_full() {
    let mut stage = Stage::default();
    fill_row(&mut stage, 19, PieceKind::Z);
    stage.set(6, 19, Cell::EMPTY);
    assert!(!stage.is_row_full(19));
    assert_eq!(stage.sweep_rows(), 0);
}

#[test]
fn test_rows_round_trip() {
    let mut stage = Stage::new(3, 2);
    stage.set(1, 2, Cell::merged(PieceKind::S));
    let rebuilt = Stage::from_rows(stage.to_rows());
    assert_eq!(rebuilt, stage);
    assert_eq!(stage.rows().count(), 3);
}
