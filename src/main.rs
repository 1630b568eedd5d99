use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use gridsnake::config::{
    DEFAULT_GRID_SIDE, DEFAULT_TICK_INTERVAL_MS, MIN_GRID_SIDE, MIN_TICK_INTERVAL_MS,
};
use gridsnake::engine::{Engine, GameStatus};
use gridsnake::error::RuntimeError;
use gridsnake::grid::Grid;
use gridsnake::input::{self, GameInput};
use gridsnake::renderer;
use gridsnake::terminal_runtime::{AppTerminal, restore_terminal, with_terminal};

#[derive(Debug, Parser)]
#[command(version, about = "Grid snake with a deterministic simulation core")]
struct Cli {
    /// Grid side length in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_SIDE)]
    size: u16,

    /// Milliseconds between simulation steps.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// RNG seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), RuntimeError> {
    let cli = Cli::parse();
    validate(&cli)?;

    install_panic_hook();

    with_terminal(|terminal| run(terminal, &cli))
}

fn validate(cli: &Cli) -> Result<(), RuntimeError> {
    if cli.size < MIN_GRID_SIDE {
        return Err(RuntimeError::InvalidOption {
            option: "--size",
            value: cli.size.to_string(),
            reason: "grid side must be at least 4",
        });
    }

    if cli.tick_ms < MIN_TICK_INTERVAL_MS {
        return Err(RuntimeError::InvalidOption {
            option: "--tick-ms",
            value: cli.tick_ms.to_string(),
            reason: "tick interval must be at least 30 ms",
        });
    }

    Ok(())
}

fn run(terminal: &mut AppTerminal, cli: &Cli) -> Result<(), RuntimeError> {
    let mut engine = new_engine(cli);
    let tick_interval = Duration::from_millis(cli.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &engine))?;

        if let Some(game_input) = input::poll_input(Duration::from_millis(16))? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => engine.request_direction(direction),
                GameInput::Restart => {
                    // A finished engine is discarded, never reset in place.
                    if matches!(engine.status, GameStatus::Over(_)) {
                        engine = new_engine(cli);
                        last_tick = Instant::now();
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            engine.step();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn new_engine(cli: &Cli) -> Engine {
    let grid = Grid::new(cli.size);
    match cli.seed {
        Some(seed) => Engine::new_with_seed(grid, seed),
        None => Engine::new(grid),
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
