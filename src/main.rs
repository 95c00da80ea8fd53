//! Terminal runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output. The game starts
//! idle; Enter (or r) starts it.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use blockdrop::core::{GameConfig, GameSession, GameSnapshot, IntervalPolicy};
use blockdrop::event_log::{EventLog, FileEventLog};
use blockdrop::input::{handle_key_event, should_quit};
use blockdrop::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockdrop::types::{SPAWN_X, STAGE_HEIGHT, STAGE_WIDTH, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "blockdrop", about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// RNG seed for a reproducible piece sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Stage width in cells
    #[arg(long, default_value_t = STAGE_WIDTH as u16, value_parser = clap::value_parser!(u16).range(4..=40))]
    width: u16,

    /// Stage height in cells
    #[arg(long, default_value_t = STAGE_HEIGHT as u16, value_parser = clap::value_parser!(u16).range(4..=60))]
    height: u16,

    /// Keep the current level's speed for every new piece instead of falling
    /// back to the base interval
    #[arg(long)]
    follow_level_speed: bool,

    /// Append one line per merged piece to this file
    #[arg(long)]
    event_log: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> GameConfig {
        let width = self.width as usize;
        let mut config = GameConfig::default()
            .with_size(self.height as usize, width)
            .with_spawn_x(SPAWN_X.min(width as i32 - 4));
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.follow_level_speed {
            config = config.with_interval_policy(IntervalPolicy::FollowLevel);
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut log = match &args.event_log {
        Some(path) => Some(FileEventLog::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, args.config(), log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<W: Write>(
    term: &mut TerminalRenderer,
    config: GameConfig,
    mut log: Option<&mut EventLog<W>>,
) -> Result<()> {
    let mut session = GameSession::new(config);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.dispatch(action);
                        drain_events(&mut session, log.as_deref_mut())?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.update(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
            drain_events(&mut session, log.as_deref_mut())?;
        }
    }
}

/// Move the session's pending lock event to the log, or drop it.
fn drain_events<W: Write>(
    session: &mut GameSession,
    log: Option<&mut EventLog<W>>,
) -> Result<()> {
    match log {
        Some(log) => {
            log.record_pending(session)?;
        }
        None => {
            session.take_last_event();
        }
    }
    Ok(())
}
