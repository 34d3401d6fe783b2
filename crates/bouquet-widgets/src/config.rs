//! Colors and text attributes applied to one bouquet overlay.

use ratatui::style::{Color, Modifier, Style};

/// The overlay's style bag.
///
/// Colors default to RGB values so fades can blend them smoothly; named
/// ANSI colors work too but switch abruptly half-way through a fade.
/// "Fonts" are text modifiers, the closest a terminal gets.
///
/// ```ignore
/// use bouquet_widgets::config::BouquetConfig;
/// use ratatui::style::Color;
///
/// let config = BouquetConfig::default()
///     .with_background_color(Color::Rgb(18, 18, 24))
///     .with_cell_text_color(Color::Rgb(230, 230, 230));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BouquetConfig {
    /// Fill behind the pinned header row.
    pub header_background_color: Color,
    /// Attributes of the header title.
    pub header_font: Modifier,
    /// Attributes of a row's name.
    pub cell_font: Modifier,
    /// Color of a row's name (drawn at 80% over the background).
    pub cell_text_color: Color,
    /// Backdrop color covering the whole surface.
    pub background_color: Color,
    /// Header title and dismiss button color.
    pub text_color: Color,
    /// Color of a row's channel count.
    pub count_color: Color,
    /// Attributes of a row's channel count.
    pub count_font: Modifier,
}

/// Default backdrop and header fill.
pub const BLACK: Color = Color::Rgb(0, 0, 0);
/// Default title and row text color.
pub const WHITE: Color = Color::Rgb(255, 255, 255);
/// Default channel count color.
pub const SYSTEM_BLUE: Color = Color::Rgb(0, 122, 255);

/// Opacity of a row's name over the backdrop.
pub const CELL_TEXT_ALPHA: f32 = 0.8;
/// Opacity of the highlight tint painted behind the cursor row.
pub const HIGHLIGHT_ALPHA: f32 = 0.15;

impl Default for BouquetConfig {
    fn default() -> Self {
        Self {
            header_background_color: BLACK,
            header_font: Modifier::BOLD,
            cell_font: Modifier::empty(),
            cell_text_color: WHITE,
            background_color: BLACK,
            text_color: WHITE,
            count_color: SYSTEM_BLUE,
            count_font: Modifier::BOLD,
        }
    }
}

impl BouquetConfig {
    /// Set the fill behind the pinned header row.
    pub fn with_header_background_color(mut self, color: Color) -> Self {
        self.header_background_color = color;
        self
    }

    /// Set the header title's text modifiers.
    pub fn with_header_font(mut self, font: Modifier) -> Self {
        self.header_font = font;
        self
    }

    /// Set the text modifiers of row names.
    pub fn with_cell_font(mut self, font: Modifier) -> Self {
        self.cell_font = font;
        self
    }

    /// Set the row name color (drawn at 80% over the backdrop).
    pub fn with_cell_text_color(mut self, color: Color) -> Self {
        self.cell_text_color = color;
        self
    }

    /// Set the backdrop color. Every fade blends from this color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the header title and dismiss button color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the channel count color.
    pub fn with_count_color(mut self, color: Color) -> Self {
        self.count_color = color;
        self
    }

    /// Set the channel count's text modifiers.
    pub fn with_count_font(mut self, font: Modifier) -> Self {
        self.count_font = font;
        self
    }

    /// Style of the trigger label when nothing is open.
    pub fn trigger_style(&self) -> Style {
        Style::default()
            .fg(self.text_color)
            .add_modifier(self.header_font)
    }
}
