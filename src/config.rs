use ratatui::style::Color;

use crate::error::{GameError, Result};

/// Cells per side of the default board (a 400px canvas split into 20px cells).
pub const DEFAULT_GRID_EXTENT: u16 = 20;

/// Smallest board that still fits the initial worm with room to turn.
pub const MIN_GRID_EXTENT: u16 = 4;

/// Largest board the renderer is expected to fit on a terminal.
pub const MAX_GRID_EXTENT: u16 = 64;

/// Tick interval when a round starts, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 150;

/// Amount the tick interval shrinks each time food is eaten.
pub const TICK_INTERVAL_STEP_MS: u64 = 5;

/// Floor for the tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Points awarded per food item.
pub const FOOD_REWARD: u32 = 10;

/// Segments in a freshly reset worm.
pub const INITIAL_WORM_LENGTH: usize = 3;

/// Tunable rules for one engine instance.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid_extent: u16,
    pub initial_tick_interval_ms: u64,
    pub tick_interval_step_ms: u64,
    pub min_tick_interval_ms: u64,
    pub food_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_extent: DEFAULT_GRID_EXTENT,
            initial_tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
            tick_interval_step_ms: TICK_INTERVAL_STEP_MS,
            min_tick_interval_ms: MIN_TICK_INTERVAL_MS,
            food_reward: FOOD_REWARD,
        }
    }
}

impl GameConfig {
    /// Returns a default config with a different board size.
    #[must_use]
    pub fn with_grid_extent(grid_extent: u16) -> Self {
        Self {
            grid_extent,
            ..Self::default()
        }
    }

    /// Rejects boards the initial worm cannot fit on and tick intervals that
    /// could reach zero.
    pub fn validate(&self) -> Result<()> {
        if self.grid_extent < MIN_GRID_EXTENT {
            return Err(GameError::GridTooSmall {
                extent: self.grid_extent,
                min: MIN_GRID_EXTENT,
            });
        }

        if self.grid_extent > MAX_GRID_EXTENT {
            return Err(GameError::GridTooLarge {
                extent: self.grid_extent,
                max: MAX_GRID_EXTENT,
            });
        }

        if self.min_tick_interval_ms == 0
            || self.initial_tick_interval_ms < self.min_tick_interval_ms
        {
            return Err(GameError::InvalidTickInterval {
                initial_ms: self.initial_tick_interval_ms,
                min_ms: self.min_tick_interval_ms,
            });
        }

        Ok(())
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub worm_head: Color,
    pub worm_body: Color,
    pub food: Color,
    /// Background color for empty board cells.
    pub board_bg: Color,
    /// Color of the grid dots drawn on empty cells.
    pub grid: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green worm on a near-black board.
pub const THEME_CLASSIC: Theme = Theme {
    worm_head: Color::Rgb(0x00, 0xcc, 0x00),
    worm_body: Color::Rgb(0x00, 0xff, 0x00),
    food: Color::Rgb(0xff, 0x00, 0x00),
    board_bg: Color::Rgb(0x11, 0x11, 0x11),
    grid: Color::Rgb(0x22, 0x22, 0x22),
    border_fg: Color::Gray,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    hud_accent: Color::Yellow,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Worm body glyph; each board cell is two terminal columns wide.
pub const GLYPH_WORM_BODY: &str = "██";

pub const GLYPH_WORM_HEAD_UP: &str = "▀▀";
pub const GLYPH_WORM_HEAD_DOWN: &str = "▄▄";
pub const GLYPH_WORM_HEAD_LEFT: &str = "◀█";
pub const GLYPH_WORM_HEAD_RIGHT: &str = "█▶";

pub const GLYPH_FOOD: &str = "()";

/// Grid marker drawn on empty cells.
pub const GLYPH_EMPTY: &str = "· ";

/// Terminal columns used by one board cell.
pub const CELL_WIDTH: u16 = 2;
