//! Terminal puyo runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui-puyo-term`.
//! Logging goes to `PUYO_LOG_PATH` when set; the terminal itself is in raw
//! alternate-screen mode and never receives log output.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use tui_puyo::config::RunConfig;
use tui_puyo::core::Game;
use tui_puyo::game_loop::SemiFixedStep;
use tui_puyo::input::{should_quit, KeyTracker};
use tui_puyo::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!(error = %err, "exiting with error");
    }
    result
}

fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut game = Game::new(config.seed)?;
    game.on_start();

    let view = BoardView::default();
    let planner = SemiFixedStep::default();
    let mut keys = KeyTracker::new();
    let mut fb = FrameBuffer::new(0, 0);
    let frame_budget = Duration::from_secs_f32(planner.step());
    let mut last_frame = Instant::now();

    loop {
        // Gather events until the next frame is due.
        let deadline = last_frame + frame_budget;
        let mut fresh = Vec::new();
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        game.on_exit();
                        return Ok(());
                    }
                    fresh.push(key);
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let frame_time = now.duration_since(last_frame);
        last_frame = now;

        let mut fresh = fresh.into_iter();
        for dt in planner.plan(frame_time.as_secs_f32()) {
            keys.begin_frame();
            // New key events land on the first step so no edge is lost.
            for key in fresh.by_ref() {
                keys.handle_key_event(key);
            }
            keys.update((dt * 1000.0) as u32);

            game.handle_input(keys.snapshot())?;
            game.tick(dt)?;
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&mut game, Viewport::new(w, h), &mut fb)?;
        term.present(&fb)?;

        if frame_time > frame_budget * 10 {
            debug!(ms = frame_time.as_millis() as u64, "long frame");
        }
    }
}
