use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::{
    COLOR_BODY, COLOR_BORDER, COLOR_FOOD, COLOR_HEAD, COLOR_STATUS, GLYPH_BODY, GLYPH_FOOD,
    GLYPH_HEAD_DOWN, GLYPH_HEAD_LEFT, GLYPH_HEAD_RIGHT, GLYPH_HEAD_UP,
};
use crate::direction::Direction;
use crate::engine::{EndCause, Engine, GameStatus};
use crate::grid::{Grid, Position};

/// Draws one full frame from a read-only engine snapshot.
///
/// The renderer only ever pulls: the engine never pushes frames or holds any
/// rendering state.
pub fn render(frame: &mut Frame<'_>, engine: &Engine) {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let block = Block::bordered().border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, engine);
    render_snake(frame, inner, engine);
    render_status(frame, status_area, engine);

    if let GameStatus::Over(cause) = engine.status {
        render_game_over(frame, play_area, cause);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, engine: &Engine) {
    let Some((x, y)) = cell_to_terminal(inner, engine.grid(), engine.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, engine: &Engine) {
    let head = engine.body.head();
    let head_glyph = head_glyph(engine.gate.current());

    let buffer = frame.buffer_mut();
    for segment in engine.body.segments() {
        let Some((x, y)) = cell_to_terminal(inner, engine.grid(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph,
                Style::new().fg(COLOR_HEAD).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_BODY, Style::new().fg(COLOR_BODY));
        }
    }
}

fn render_status(frame: &mut Frame<'_>, area: Rect, engine: &Engine) {
    let side = engine.grid().side();
    let text = format!(
        " {side}x{side}  length {}  [arrows/wasd] move  [q] quit",
        engine.body.segment_count()
    );

    frame.render_widget(
        Paragraph::new(Line::from(text)).style(Style::new().fg(COLOR_STATUS)),
        area,
    );
}

fn render_game_over(frame: &mut Frame<'_>, area: Rect, cause: EndCause) {
    let popup = centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);

    let cause_text = match cause {
        EndCause::WallCollision => "You hit the wall!",
        EndCause::SelfCollision => "You hit yourself!",
    };

    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from(cause_text),
        Line::from(""),
        Line::from("[Enter]/[Space] Restart"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_HEAD_UP,
        Direction::Down => GLYPH_HEAD_DOWN,
        Direction::Left => GLYPH_HEAD_LEFT,
        Direction::Right => GLYPH_HEAD_RIGHT,
    }
}

/// Maps a logical cell to a terminal coordinate inside `inner`, or `None`
/// when the cell falls outside the drawable region.
fn cell_to_terminal(inner: Rect, grid: Grid, position: Position) -> Option<(u16, u16)> {
    if !grid.contains(position) {
        return None;
    }

    let x_offset = u16::try_from(position.col).ok()?;
    let y_offset = u16::try_from(position.row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
