//! Passive renderers for one bouquet row and the pinned header.
//!
//! Both take an `alpha` so the overlay can draw them mid-fade: every color
//! is mixed from the backdrop color toward its final value.

use crate::config::{BouquetConfig, CELL_TEXT_ALPHA, HIGHLIGHT_ALPHA};
use crate::fade::blend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal inset of row and header text from the surface edges.
pub const INSET: u16 = 2;

/// One list row: name on the left, channel count on the right.
pub struct Row<'a> {
    name: &'a str,
    total_channels: u32,
    highlighted: bool,
    config: &'a BouquetConfig,
    alpha: f32,
}

impl<'a> Row<'a> {
    /// A plain, fully opaque row.
    pub fn new(name: &'a str, total_channels: u32, config: &'a BouquetConfig) -> Self {
        Self {
            name,
            total_channels,
            highlighted: false,
            config,
            alpha: 1.0,
        }
    }

    /// Paint the highlight tint behind the whole row.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Final (fully opaque) color of the name label.
    pub fn name_color(&self) -> Color {
        blend(
            self.config.background_color,
            self.config.cell_text_color,
            CELL_TEXT_ALPHA,
        )
    }

    /// Tint behind a highlighted row, derived from the row's own text color.
    pub fn highlight_color(&self) -> Color {
        blend(self.config.background_color, self.name_color(), HIGHLIGHT_ALPHA)
    }

    fn faded(&self, color: Color) -> Color {
        blend(self.config.background_color, color, self.alpha)
    }
}

impl Widget for Row<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let line = Rect { height: 1, ..area };

        if self.highlighted {
            buf.set_style(line, Style::default().bg(self.faded(self.highlight_color())));
        }

        let count = self.total_channels.to_string();
        let count_width = count.width() as u16;
        let count_x = line.right().saturating_sub(INSET + count_width).max(line.x);
        let count_style = Style::default()
            .fg(self.faded(self.config.count_color))
            .add_modifier(self.config.count_font);
        buf.set_stringn(
            count_x,
            line.y,
            &count,
            usize::from(line.right() - count_x),
            count_style,
        );

        let name_x = line.x.saturating_add(INSET).min(line.right());
        // Keep one blank cell between the name and the count.
        let name_room = count_x.saturating_sub(name_x).saturating_sub(1);
        let name_style = Style::default()
            .fg(self.faded(self.name_color()))
            .add_modifier(self.config.cell_font);
        buf.set_string(
            name_x,
            line.y,
            truncate(self.name, usize::from(name_room)),
            name_style,
        );
    }
}

/// The section header: the control's title, pinned above the rows.
pub struct Header<'a> {
    title: &'a str,
    config: &'a BouquetConfig,
    alpha: f32,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, config: &'a BouquetConfig) -> Self {
        Self {
            title,
            config,
            alpha: 1.0,
        }
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let line = Rect { height: 1, ..area };
        let bg = self.config.background_color;
        buf.set_style(
            line,
            Style::default().bg(blend(bg, self.config.header_background_color, self.alpha)),
        );

        let x = line.x.saturating_add(INSET).min(line.right());
        let room = usize::from(line.right().saturating_sub(x).saturating_sub(INSET));
        let style = Style::default()
            .fg(blend(bg, self.config.text_color, self.alpha))
            .add_modifier(self.config.header_font);
        buf.set_string(x, line.y, truncate(self.title, room), style);
    }
}

/// Cut `text` to at most `max_width` display columns, ending in `…` when
/// something was dropped.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WHITE;

    fn line(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn row_puts_name_left_and_count_right() {
        let config = BouquetConfig::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        Row::new("Sports", 523, &config).render(buf.area, &mut buf);
        assert_eq!(line(&buf, 0), "  Sports       523  ");
    }

    #[test]
    fn row_name_is_dimmed_text_color() {
        let config = BouquetConfig::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        Row::new("A", 1, &config).render(buf.area, &mut buf);
        assert_eq!(buf[(2, 0)].fg, Color::Rgb(204, 204, 204));
        assert_eq!(buf[(17, 0)].fg, config.count_color);
    }

    #[test]
    fn highlighted_row_is_tinted() {
        let config = BouquetConfig::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        let row = Row::new("A", 1, &config).highlighted(true);
        let tint = row.highlight_color();
        row.render(buf.area, &mut buf);
        assert_eq!(tint, Color::Rgb(31, 31, 31));
        assert_eq!(buf[(0, 0)].bg, tint);
        assert_eq!(buf[(11, 0)].bg, tint);
    }

    #[test]
    fn transparent_row_matches_background() {
        let config = BouquetConfig::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        Row::new("A", 1, &config).alpha(0.0).render(buf.area, &mut buf);
        assert_eq!(buf[(2, 0)].fg, config.background_color);
    }

    #[test]
    fn long_names_are_truncated_before_the_count() {
        let config = BouquetConfig::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 16, 1));
        Row::new("Documentaries and more", 7, &config).render(buf.area, &mut buf);
        assert_eq!(line(&buf, 0), "  Documenta… 7  ");
    }

    #[test]
    fn header_shows_title_with_config() {
        let config = BouquetConfig::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        Header::new("Bouquet", &config).render(buf.area, &mut buf);
        assert_eq!(line(&buf, 0), "  Bouquet   ");
        assert_eq!(buf[(2, 0)].fg, WHITE);
        assert_eq!(buf[(0, 0)].bg, config.header_background_color);
    }

    #[test]
    fn truncate_cases() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("日本語", 4), "日…");
    }
}
