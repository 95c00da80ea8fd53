//! Game flow tests through `GameState` and `GameSession`

use blockdrop::core::{
    shape_of, GameConfig, GameSession, GameState, IntervalPolicy, Player, Position, Stage,
};
use blockdrop::types::{Cell, CellStatus, GameAction, PieceKind};

fn new_game(seed: u64) -> GameState {
    let mut game = GameState::new(GameConfig::default().with_seed(seed));
    game.start();
    game
}

/// Bottom row filled except columns 0 and 1
fn nearly_full_bottom() -> Stage {
    let mut stage = Stage::default();
    for x in 2..12 {
        stage.set(x, 19, Cell::merged(PieceKind::T));
    }
    stage
}

#[test]
fn test_seeded_games_are_identical() {
    let mut a = new_game(77);
    let mut b = new_game(77);
    for _ in 0..200 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.stage(), b.stage());
    assert_eq!(a.player(), b.player());
    assert_eq!(a.score(), b.score());
    assert_eq!(a.next(), b.next());
}

#[test]
fn test_soft_drop_equals_tick() {
    let mut a = new_game(3);
    let mut b = a.clone();
    for _ in 0..40 {
        a.tick();
        b.apply_action(GameAction::SoftDrop);
    }
    assert_eq!(a.stage(), b.stage());
    assert_eq!(a.player(), b.player());
}

#[test]
fn test_moves_are_blocked_by_walls() {
    let mut game = new_game(1);
    for _ in 0..20 {
        game.apply_action(GameAction::MoveLeft);
    }
    let leftmost = game.player().pos.x;
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert_eq!(game.player().pos.x, leftmost);

    for _ in 0..20 {
        game.apply_action(GameAction::MoveRight);
    }
    assert!(!game.apply_action(GameAction::MoveRight));
}

#[test]
fn test_landing_spawns_queued_piece() {
    let mut game = new_game(11);
    let queued = *game.next();
    game.set_player(Player::spawn(&shape_of(PieceKind::O), Position::new(3, 18)));

    assert!(game.tick());
    assert_eq!(game.player().pos, Position::new(5, 0));
    assert_eq!(game.player().tetromino, queued.shape);
    assert_eq!(game.stage().get(3, 19), Some(Cell::merged(PieceKind::O)));
}

#[test]
fn test_line_clear_scores_and_progresses() {
    let mut game = new_game(11);
    game.set_stage(nearly_full_bottom());
    game.set_player(Player::spawn(&shape_of(PieceKind::O), Position::new(0, 18)));

    game.tick();
    assert_eq!(game.score(), 10);
    assert_eq!(game.rows_cleared(), 1);
    assert_eq!(game.level(), 1);

    let event = game.take_last_event().unwrap();
    assert_eq!(event.rows_cleared, 1);
    assert_eq!(event.score, 10);
    assert_eq!(event.total_rows, 1);
}

#[test]
fn test_ten_rows_reach_level_two() {
    let mut game = new_game(21);
    for _ in 0..10 {
        game.set_stage(nearly_full_bottom());
        game.set_player(Player::spawn(&shape_of(PieceKind::O), Position::new(0, 18)));
        game.tick();
    }
    assert_eq!(game.rows_cleared(), 10);
    assert_eq!(game.level(), 2);
    assert_eq!(game.score(), 100);
    assert_eq!(game.fall_interval(), Some(900));

    // A landing without a clear falls back to the base interval.
    game.set_stage(Stage::default());
    game.set_player(Player::spawn(&shape_of(PieceKind::O), Position::new(0, 18)));
    game.tick();
    assert_eq!(game.fall_interval(), Some(1000));
}

#[test]
fn test_follow_level_policy_keeps_speed() {
    let config = GameConfig::default()
        .with_seed(21)
        .with_interval_policy(IntervalPolicy::FollowLevel);
    let mut game = GameState::new(config);
    game.start();
    for _ in 0..10 {
        game.set_stage(nearly_full_bottom());
        game.set_player(Player::spawn(&shape_of(PieceKind::O), Position::new(0, 18)));
        game.tick();
    }
    game.set_stage(Stage::default());
    game.set_player(Player::spawn(&shape_of(PieceKind::O), Position::new(0, 18)));
    game.tick();
    assert_eq!(game.level(), 2);
    assert_eq!(game.fall_interval(), Some(900));
}

#[test]
fn test_stack_to_the_top_ends_game() {
    let mut game = new_game(5);
    // Every piece falls straight down from the spawn column, so the stack
    // grows without ever completing a row.
    for _ in 0..10_000 {
        if !game.tick() {
            break;
        }
    }
    assert!(game.game_over());
    assert_eq!(game.fall_interval(), None);
    assert!(!game.tick());
    assert!(!game.apply_action(GameAction::MoveLeft));

    game.apply_action(GameAction::Restart);
    assert!(!game.game_over());
    assert_eq!((game.score(), game.level(), game.rows_cleared()), (0, 1, 0));
    assert_eq!(game.fall_interval(), Some(1000));
    assert!(game.stage().cells().iter().all(Cell::is_clear));
}

#[test]
fn test_display_composite() {
    let mut game = new_game(8);
    game.set_player(Player::spawn(&shape_of(PieceKind::I), Position::new(2, 3)));

    let display = game.display_stage();
    let active: Vec<_> = display
        .cells()
        .iter()
        .filter(|c| c.status == CellStatus::Active)
        .collect();
    assert_eq!(active.len(), 4);
    assert!(active.iter().all(|c| c.kind == PieceKind::I));
    assert_eq!(display.get(3, 3), Some(Cell::active(PieceKind::I)));
    assert!(game.stage().cells().iter().all(Cell::is_clear));
}

#[test]
fn test_session_runs_gravity_from_elapsed_time() {
    let mut session = GameSession::new(GameConfig::default().with_seed(2));
    session.dispatch(GameAction::Restart);
    let y0 = session.state().player().pos.y;

    let mut steps = 0;
    for _ in 0..125 {
        steps += session.update(16);
    }
    // 125 * 16ms = 2000ms at 1000ms per row
    assert_eq!(steps, 2);
    assert_eq!(session.state().player().pos.y, y0 + 2);
}

#[test]
fn test_session_pause_resume() {
    let mut session = GameSession::new(GameConfig::default().with_seed(2));
    session.start();

    session.dispatch(GameAction::Pause);
    assert_eq!(session.update(5_000), 0);
    assert!(session.snapshot().paused);
    assert_eq!(session.state().fall_interval(), Some(1000));

    session.dispatch(GameAction::Pause);
    assert!(!session.snapshot().paused);
    assert_eq!(session.update(1_000), 1);
}

#[test]
fn test_session_stops_on_game_over() {
    let config = GameConfig::default()
        .with_seed(4)
        .with_size(6, 6)
        .with_spawn_x(1);
    let mut session = GameSession::new(config);
    session.start();
    for _ in 0..10_000 {
        if session.state().game_over() {
            break;
        }
        session.update(1_000);
    }
    assert!(session.state().game_over());
    assert_eq!(session.scheduler().interval_ms(), None);
    assert!(!session.scheduler().is_running());
    assert!(session.snapshot().game_over);

    session.dispatch(GameAction::Restart);
    assert_eq!(session.scheduler().interval_ms(), Some(1000));
}
