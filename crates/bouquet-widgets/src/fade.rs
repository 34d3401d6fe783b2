//! Opacity transitions and the color math behind them.
//!
//! A terminal has no alpha channel, so "opacity" is emulated by blending a
//! layer's colors toward the color underneath it. [`Fade`] computes the
//! opacity for a point in time; [`blend`] and [`dim_area`] apply it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Duration of both the appear and the dismiss transitions.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Which way a [`Fade`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// Towards fully opaque.
    In,
    /// Towards fully transparent.
    Out,
}

/// A linear opacity transition started at a known instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    direction: FadeDirection,
    started: Instant,
    from: f32,
    duration: Duration,
}

impl Fade {
    /// Fade from transparent to opaque.
    pub fn fade_in(now: Instant) -> Self {
        Self {
            direction: FadeDirection::In,
            started: now,
            from: 0.0,
            duration: FADE_DURATION,
        }
    }

    /// Fade from `from` (the current opacity) to transparent.
    pub fn fade_out(now: Instant, from: f32) -> Self {
        Self {
            direction: FadeDirection::Out,
            started: now,
            from: from.clamp(0.0, 1.0),
            duration: FADE_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    fn target(&self) -> f32 {
        match self.direction {
            FadeDirection::In => 1.0,
            FadeDirection::Out => 0.0,
        }
    }

    /// Fraction of the duration elapsed at `now`, in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Opacity at `now`.
    pub fn alpha_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        self.from + (self.target() - self.from) * t
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Approximate RGB value of a terminal color. `Reset` has none: it is
/// whatever the terminal's default is.
pub fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    let rgb = match color {
        Color::Reset => return None,
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Indexed(i) => return indexed_rgb(i),
    };
    Some(rgb)
}

fn indexed_rgb(i: u8) -> Option<(u8, u8, u8)> {
    const BASIC: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Gray,
        Color::DarkGray,
        Color::LightRed,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
    ];
    match i {
        0..=15 => to_rgb(BASIC[usize::from(i)]),
        16..=231 => {
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            let n = i - 16;
            Some((level(n / 36), level((n / 6) % 6), level(n % 6)))
        }
        _ => {
            let v = 8 + (i - 232) * 10;
            Some((v, v, v))
        }
    }
}

/// Mix `from` toward `to` by `t` (0 = `from`, 1 = `to`).
///
/// RGB-resolvable pairs are interpolated; anything else switches at the
/// half-way point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    match (to_rgb(from), to_rgb(to)) {
        (Some((r1, g1, b1)), Some((r2, g2, b2))) => {
            let mix = |a: u8, b: u8| {
                let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
                v.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t >= 0.5 => to,
        _ => from,
    }
}

/// Cover `area` of `buf` with `color` at opacity `alpha`.
///
/// At full opacity the cells are blanked so nothing underneath survives.
pub fn dim_area(buf: &mut Buffer, area: Rect, color: Color, alpha: f32) {
    let area = area.intersection(buf.area);
    let opaque = alpha >= 1.0;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            if opaque {
                cell.set_symbol(" ");
                cell.set_fg(color);
                cell.set_bg(color);
            } else {
                let fg = blend(cell.fg, color, alpha);
                let bg = blend(cell.bg, color, alpha);
                cell.set_fg(fg);
                cell.set_bg(bg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_is_linear_over_duration() {
        let start = Instant::now();
        let fade = Fade::fade_in(start);
        assert_eq!(fade.alpha_at(start), 0.0);
        let half = fade.alpha_at(start + Duration::from_millis(150));
        assert!((half - 0.5).abs() < 0.01);
        assert!(!fade.is_finished(start + Duration::from_millis(299)));
        assert!(fade.is_finished(start + FADE_DURATION));
        assert_eq!(fade.alpha_at(start + Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn fade_out_starts_from_current_alpha() {
        let start = Instant::now();
        let fade = Fade::fade_out(start, 0.6);
        assert!((fade.alpha_at(start) - 0.6).abs() < f32::EPSILON);
        assert!(fade.alpha_at(start + Duration::from_millis(150)) < 0.6);
        assert_eq!(fade.alpha_at(start + FADE_DURATION), 0.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let start = Instant::now();
        let fade = Fade::fade_in(start).with_duration(Duration::ZERO);
        assert!(fade.is_finished(start));
        assert_eq!(fade.alpha_at(start), 1.0);
    }

    #[test]
    fn time_before_start_clamps() {
        let start = Instant::now() + Duration::from_secs(1);
        let fade = Fade::fade_in(start);
        assert_eq!(fade.alpha_at(Instant::now()), 0.0);
    }

    #[test]
    fn blend_rgb_midpoint() {
        let mid = blend(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color::Rgb(100, 50, 25));
    }

    #[test]
    fn blend_endpoints_are_exact() {
        assert_eq!(blend(Color::Reset, Color::Red, 0.0), Color::Reset);
        assert_eq!(blend(Color::Reset, Color::Red, 1.0), Color::Red);
    }

    #[test]
    fn blend_named_colors_interpolate() {
        assert_eq!(blend(Color::Black, Color::White, 0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn blend_reset_switches_half_way() {
        assert_eq!(blend(Color::Reset, Color::Black, 0.4), Color::Reset);
        assert_eq!(blend(Color::Reset, Color::Black, 0.6), Color::Black);
    }

    #[test]
    fn indexed_palette() {
        assert_eq!(to_rgb(Color::Indexed(16)), Some((0, 0, 0)));
        assert_eq!(to_rgb(Color::Indexed(231)), Some((255, 255, 255)));
        assert_eq!(to_rgb(Color::Indexed(232)), Some((8, 8, 8)));
        assert_eq!(to_rgb(Color::Indexed(1)), to_rgb(Color::Red));
    }

    #[test]
    fn dim_area_opaque_blanks_cells() {
        let mut buf = Buffer::with_lines(["abc"]);
        dim_area(&mut buf, Rect::new(0, 0, 2, 1), Color::Rgb(0, 0, 0), 1.0);
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(1, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(2, 0)].symbol(), "c");
    }

    #[test]
    fn dim_area_partial_keeps_symbols() {
        let mut buf = Buffer::with_lines(["ab"]);
        buf.set_style(
            Rect::new(0, 0, 2, 1),
            ratatui::style::Style::default()
                .fg(Color::Rgb(200, 200, 200))
                .bg(Color::Rgb(100, 100, 100)),
        );
        dim_area(&mut buf, Rect::new(0, 0, 2, 1), Color::Rgb(0, 0, 0), 0.5);
        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(100, 100, 100));
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(50, 50, 50));
    }
}
