use ratatui::style::Color;

use crate::direction::Direction;

/// Grid side length used when `--size` is not given.
pub const DEFAULT_GRID_SIDE: u16 = 20;

/// Smallest grid side accepted from the CLI.
pub const MIN_GRID_SIDE: u16 = 4;

/// Clock period between simulation steps, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Floor for `--tick-ms`; anything faster is unplayable.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Direction a fresh session starts moving in.
pub const DEFAULT_START_DIRECTION: Direction = Direction::Up;

/// Head glyph per movement direction.
pub const GLYPH_HEAD_UP: &str = "▲";
pub const GLYPH_HEAD_DOWN: &str = "▼";
pub const GLYPH_HEAD_LEFT: &str = "◄";
pub const GLYPH_HEAD_RIGHT: &str = "►";

/// Body segment glyph.
pub const GLYPH_BODY: &str = "█";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

pub const COLOR_HEAD: Color = Color::White;
pub const COLOR_BODY: Color = Color::Green;
pub const COLOR_FOOD: Color = Color::Red;
pub const COLOR_BORDER: Color = Color::DarkGray;
pub const COLOR_STATUS: Color = Color::DarkGray;
