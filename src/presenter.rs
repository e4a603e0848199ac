use std::io;

use tracing::info;

use crate::config::Theme;
use crate::game::{Phase, Presenter, Snapshot};
use crate::renderer;
use crate::terminal_runtime::TerminalSession;
use crate::ui::hud::HudInfo;

/// Draws engine snapshots into the terminal session it owns.
pub struct TerminalPresenter {
    session: TerminalSession,
    theme: &'static Theme,
    high_score: u32,
    previous_best: u32,
    final_score: Option<u32>,
}

impl TerminalPresenter {
    #[must_use]
    pub fn new(session: TerminalSession, theme: &'static Theme) -> Self {
        Self {
            session,
            theme,
            high_score: 0,
            previous_best: 0,
            final_score: None,
        }
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        if snapshot.phase != Phase::GameOver {
            self.final_score = None;
        }

        let hud_info = HudInfo {
            high_score: self.high_score,
            previous_best: self.previous_best,
            final_score: self.final_score,
            theme: self.theme,
        };

        self.session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, snapshot, &hud_info))?;
        Ok(())
    }

    fn show_game_over(&mut self, score: u32) -> io::Result<()> {
        info!(score, previous_best = self.previous_best, "showing game over");
        self.final_score = Some(score);
        Ok(())
    }

    fn update_score_display(&mut self, score: u32, high_score: u32) -> io::Result<()> {
        // A zero score marks a fresh round; remember the record it has to beat.
        if score == 0 {
            self.previous_best = high_score;
        }

        self.high_score = high_score;
        Ok(())
    }
}
