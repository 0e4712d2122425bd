//! Terminal Game of Life runner (default binary).
//!
//! This is the driver the engine deliberately knows nothing about: it owns
//! the simulation run, the running flag, and the fixed 150 ms cadence. Each
//! loop iteration renders the latest committed snapshot, polls input until
//! the next tick boundary, and then advances one generation if running.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_life::core::{patterns, Simulation};
use tui_life::input::{handle_key_event, should_quit};
use tui_life::term::{GridView, TerminalRenderer, Viewport};
use tui_life::types::{SimAction, FRAME_DURATION_MS, GRID_SIZE};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut sim = Simulation::new(GRID_SIZE);
    let mut running = false;

    let view = GridView::default();
    let tick_duration = Duration::from_millis(FRAME_DURATION_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render the committed state.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&sim.snapshot(), running, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(&mut sim, &mut running, action)?;
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if running {
                sim.advance();
            }
        }
    }
}

/// Apply a driver action between ticks; `advance` is never in flight here.
fn apply_action(sim: &mut Simulation, running: &mut bool, action: SimAction) -> Result<()> {
    match action {
        SimAction::Start => {
            sim.reset();
            sim.seed(&patterns::demo_layout())?;
            *running = true;
        }
        SimAction::Pause => {
            *running = !*running;
        }
        SimAction::Step => {
            if !*running {
                sim.advance();
            }
        }
        SimAction::Reset => {
            sim.reset();
            *running = false;
        }
    }
    Ok(())
}
