use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::config::{
    CELL_WIDTH, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_WORM_BODY, GLYPH_WORM_HEAD_DOWN,
    GLYPH_WORM_HEAD_LEFT, GLYPH_WORM_HEAD_RIGHT, GLYPH_WORM_HEAD_UP, Theme,
};
use crate::game::{Phase, Snapshot};
use crate::grid::{Cell, Grid};
use crate::input::Direction;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, hud_info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, hud_info);
    let theme = hud_info.theme;

    let Some(board_area) = board_rect(play_area, snapshot.grid) else {
        render_too_small(frame, play_area, snapshot.grid, theme);
        return;
    };

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_empty_cells(frame, inner, snapshot.grid, theme);
    render_food(frame, inner, snapshot, theme);
    render_worm(frame, inner, snapshot, theme);

    match snapshot.phase {
        Phase::Idle => render_start_menu(frame, board_area, hud_info.high_score, theme),
        Phase::Paused => render_pause_menu(frame, board_area, theme),
        Phase::GameOver => render_game_over_menu(
            frame,
            board_area,
            hud_info.final_score.unwrap_or(snapshot.score),
            hud_info.previous_best,
            snapshot.death_reason,
            theme,
        ),
        Phase::Running => {}
    }
}

/// Centers the bordered board inside `area`, or returns `None` if it cannot fit.
fn board_rect(area: Rect, grid: Grid) -> Option<Rect> {
    let width = grid.extent().checked_mul(CELL_WIDTH)?.checked_add(2)?;
    let height = grid.extent().checked_add(2)?;
    if width > area.width || height > area.height {
        return None;
    }

    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, board, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(column);

    Some(board)
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, grid: Grid, theme: &Theme) {
    let needed_width = u32::from(grid.extent()) * u32::from(CELL_WIDTH) + 2;
    let needed_height = u32::from(grid.extent()) + 4;
    let message = format!(
        "Terminal too small: need {needed_width}x{needed_height}, have {}x{}",
        area.width,
        area.height + 2
    );

    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.menu_title)),
        area,
    );
}

fn render_empty_cells(frame: &mut Frame<'_>, inner: Rect, grid: Grid, theme: &Theme) {
    let style = Style::new().fg(theme.grid).bg(theme.board_bg);
    let buffer = frame.buffer_mut();
    let extent = i32::from(grid.extent());

    for y in 0..extent {
        for x in 0..extent {
            if let Some((column, row)) = cell_to_terminal(inner, grid, Cell::new(x, y)) {
                buffer.set_string(column, row, GLYPH_EMPTY, style);
            }
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, snapshot.grid, snapshot.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new()
            .fg(theme.food)
            .bg(theme.board_bg)
            .add_modifier(Modifier::BOLD),
    );
}

fn render_worm(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let buffer = frame.buffer_mut();
    let body_style = Style::new().fg(theme.worm_body).bg(theme.board_bg);
    let head_style = Style::new().fg(theme.worm_head).bg(theme.board_bg);

    // Tail first so the head wins if segments ever overlap.
    let segments: Vec<&Cell> = snapshot.worm.segments().collect();
    for (index, segment) in segments.iter().enumerate().rev() {
        let Some((x, y)) = cell_to_terminal(inner, snapshot.grid, **segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(x, y, head_glyph(snapshot.direction), head_style);
        } else {
            buffer.set_string(x, y, GLYPH_WORM_BODY, body_style);
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_WORM_HEAD_UP,
        Direction::Down => GLYPH_WORM_HEAD_DOWN,
        Direction::Left => GLYPH_WORM_HEAD_LEFT,
        Direction::Right => GLYPH_WORM_HEAD_RIGHT,
    }
}

fn cell_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.in_bounds(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
