use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::Snapshot;

const TABLE_SEPARATOR: &str = " │ ";

/// Values the HUD shows besides the snapshot itself.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    /// High score as it stood when the current round began.
    pub previous_best: u32,
    /// Score announced by the last game over, if the round has ended.
    pub final_score: Option<u32>,
    pub theme: &'a Theme,
}

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, score_area, help_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(snapshot, info, usize::from(score_area.width)))
            .alignment(Alignment::Center),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(help_text(usize::from(help_area.width))))
            .alignment(Alignment::Center)
            .style(Style::default().fg(info.theme.menu_footer)),
        help_area,
    );

    play_area
}

fn score_line(
    snapshot: &Snapshot<'_>,
    info: &HudInfo<'_>,
    available_width: usize,
) -> Line<'static> {
    let compact = score_line_width(snapshot, info.high_score, false) > available_width;
    let theme = info.theme;
    let label = Style::default().fg(theme.hud_label);
    let value = Style::default().fg(theme.hud_value);
    let record = snapshot.score > 0 && snapshot.score > info.previous_best;
    let score_style = if record {
        Style::default()
            .fg(theme.hud_accent)
            .add_modifier(Modifier::BOLD)
    } else {
        value
    };

    let [score_label, high_label, length_label, speed_label] = labels(compact);

    Line::from(vec![
        Span::styled(format!("{score_label}: "), label),
        Span::styled(snapshot.score.to_string(), score_style),
        Span::styled(TABLE_SEPARATOR, label),
        Span::styled(format!("{high_label}: "), label),
        Span::styled(info.high_score.to_string(), value),
        Span::styled(TABLE_SEPARATOR, label),
        Span::styled(format!("{length_label}: "), label),
        Span::styled(snapshot.worm.len().to_string(), value),
        Span::styled(TABLE_SEPARATOR, label),
        Span::styled(format!("{speed_label}: "), label),
        Span::styled(format!("{}ms", snapshot.tick_interval_ms), value),
    ])
}

fn labels(compact: bool) -> [&'static str; 4] {
    if compact {
        ["S", "H", "L", "T"]
    } else {
        ["Score", "Hi", "Length", "Tick"]
    }
}

fn score_line_width(snapshot: &Snapshot<'_>, high_score: u32, compact: bool) -> usize {
    let [score_label, high_label, length_label, speed_label] = labels(compact);
    let fields = [
        format!("{score_label}: {}", snapshot.score),
        format!("{high_label}: {high_score}"),
        format!("{length_label}: {}", snapshot.worm.len()),
        format!("{speed_label}: {}ms", snapshot.tick_interval_ms),
    ];

    let separators = TABLE_SEPARATOR.chars().count() * (fields.len() - 1);
    fields.iter().map(|field| field.chars().count()).sum::<usize>() + separators
}

fn help_text(available_width: usize) -> &'static str {
    const FULL: &str = "Arrows/WASD move │ Space pause │ R restart │ Q quit";
    const SHORT: &str = "Space pause │ Q quit";

    if FULL.chars().count() <= available_width {
        FULL
    } else {
        SHORT
    }
}
