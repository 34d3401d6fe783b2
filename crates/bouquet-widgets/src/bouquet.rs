//! The bouquet overlay: a full-surface list of playlists shown below a
//! [`Control`](crate::control::Control).
//!
//! An overlay is single-use. It is built hidden, [`show`](Bouquet::show)n
//! once, and after its dismiss fade completes it reports
//! [`Message::Detached`] exactly once and is never drawn again. The owner
//! drops it on that message and builds a fresh one for the next showing.
//!
//! Layers, bottom to top:
//!
//! - a backdrop covering the whole surface in the background color;
//! - the list, from the anchor row to the bottom of the surface, with the
//!   title pinned in its first row;
//! - a dismiss button (`✕`) over the trigger's chevron.
//!
//! All three fade in together over [`FADE_DURATION`](crate::fade::FADE_DURATION)
//! and fade out together on dismissal.

use crate::config::BouquetConfig;
use crate::fade::{blend, dim_area, Fade, FadeDirection};
use crate::geometry::hit;
use crate::item::Item;
use crate::row::{Header, Row};
use crate::selection::SelectionState;
use bouquet_core::command::Command;
use bouquet_core::component::Component;
use bouquet_core::subscription::{subscribe, Subscription};
use bouquet_core::subscriptions::Every;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use ratatui::Frame;
use std::time::{Duration, Instant};

/// Interval between fade frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Glyph drawn on the dismiss button.
pub const DISMISS_GLYPH: &str = "✕";

/// Lifecycle of one overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not attached: before `show`, or after the dismiss fade finished.
    Hidden,
    /// Attached and fading in. Accepts input.
    Showing,
    /// Fully opaque.
    Shown,
    /// Fading out. Input is ignored.
    Dismissing,
}

/// Messages for the bouquet overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A key press routed to the overlay.
    Key(KeyEvent),
    /// A mouse event routed to the overlay (screen coordinates).
    Mouse(MouseEvent),
    /// A fade frame.
    Tick(Instant),
    /// Start dismissing, as if the dismiss button was pressed.
    Dismiss,
    /// Emitted: the row at this index (in the list as opened) was picked.
    Picked(usize),
    /// Emitted once the dismiss fade has finished and every layer is gone.
    Detached,
}

/// Where the layers sit while attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Attachment {
    surface: Rect,
    list: Rect,
    button: Rect,
}

/// The transient full-surface selection list.
pub struct Bouquet {
    id: &'static str,
    title: String,
    items: Vec<Item>,
    config: BouquetConfig,
    phase: Phase,
    fade: Option<Fade>,
    alpha: f32,
    attachment: Option<Attachment>,
    selection: SelectionState,
    spent: bool,
}

impl Bouquet {
    /// Build a hidden overlay over a snapshot of `items`.
    ///
    /// `id` names the overlay's fade timer; overlays on screen at the same
    /// time need distinct ids.
    pub fn new(
        id: &'static str,
        title: impl Into<String>,
        items: Vec<Item>,
        config: BouquetConfig,
    ) -> Self {
        let count = items.len();
        Self {
            id,
            title: title.into(),
            items,
            config,
            phase: Phase::Hidden,
            fade: None,
            alpha: 0.0,
            attachment: None,
            selection: SelectionState::new(count, 0),
            spent: false,
        }
    }

    /// Attach to `surface` and start fading in.
    ///
    /// The list starts at `anchor`'s top row and the dismiss button sits at
    /// `button`. Does nothing unless the overlay is fresh, or when the
    /// surface is empty.
    pub fn show(&mut self, surface: Rect, anchor: Rect, button: Rect) {
        if self.phase != Phase::Hidden || self.spent {
            tracing::debug!(phase = ?self.phase, "bouquet already shown; ignoring show");
            return;
        }
        if surface.is_empty() {
            tracing::debug!("no surface to attach the bouquet to");
            return;
        }
        self.attach(surface, anchor, button);
        self.phase = Phase::Showing;
        self.alpha = 0.0;
        self.fade = Some(Fade::fade_in(Instant::now()));
        tracing::debug!(title = %self.title, items = self.items.len(), "bouquet showing");
    }

    /// Move the layers after the surface or the trigger changed size.
    pub fn relayout(&mut self, surface: Rect, anchor: Rect, button: Rect) {
        if self.attachment.is_some() {
            self.attach(surface, anchor, button);
        }
    }

    fn attach(&mut self, surface: Rect, anchor: Rect, button: Rect) {
        let list = Rect {
            x: surface.x,
            width: surface.width,
            ..anchor.intersection(surface)
        };
        let attachment = Attachment {
            surface,
            list,
            button: button.intersection(surface),
        };
        // The first list row is the pinned header.
        self.selection
            .set_visible(usize::from(list.height.saturating_sub(1)));
        self.attachment = Some(attachment);
    }

    /// Start the dismiss fade. Only the first call while showing has an
    /// effect; later calls and calls on a hidden overlay are no-ops.
    pub fn dismiss(&mut self) {
        match self.phase {
            Phase::Showing | Phase::Shown => {
                self.phase = Phase::Dismissing;
                self.fade = Some(Fade::fade_out(Instant::now(), self.alpha));
                tracing::debug!(title = %self.title, "bouquet dismissing");
            }
            Phase::Hidden | Phase::Dismissing => {
                tracing::trace!(phase = ?self.phase, "dismiss ignored");
            }
        }
    }

    /// Where the overlay is in its lifecycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current opacity of every layer.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Text of the pinned header.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The items as they were when the overlay was built.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The style snapshot taken at construction.
    pub fn config(&self) -> &BouquetConfig {
        &self.config
    }

    /// Whether the layers are placed on a surface, which holds from `show`
    /// until the dismiss fade ends.
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Whether key and mouse input is currently handled.
    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, Phase::Showing | Phase::Shown)
    }

    /// Rect of the header plus rows while attached.
    pub fn list_area(&self) -> Option<Rect> {
        self.attachment.map(|a| a.list)
    }

    /// Rect of the dismiss button while attached.
    pub fn button_area(&self) -> Option<Rect> {
        self.attachment.map(|a| a.button)
    }

    /// Index of the highlighted row.
    pub fn cursor(&self) -> usize {
        self.selection.cursor()
    }

    fn pick(&mut self, index: usize) -> Command<Message> {
        if index >= self.items.len() {
            return Command::none();
        }
        self.selection.select(index);
        tracing::debug!(index, name = self.items[index].name(), "bouquet row picked");
        self.dismiss();
        Command::message(Message::Picked(index))
    }

    fn on_tick(&mut self, now: Instant) -> Command<Message> {
        let Some(fade) = self.fade else {
            return Command::none();
        };
        self.alpha = fade.alpha_at(now);
        if !fade.is_finished(now) {
            return Command::none();
        }
        self.fade = None;
        match fade.direction() {
            FadeDirection::In => {
                self.phase = Phase::Shown;
                Command::none()
            }
            FadeDirection::Out => {
                self.phase = Phase::Hidden;
                self.attachment = None;
                self.spent = true;
                tracing::debug!(title = %self.title, "bouquet detached");
                Command::message(Message::Detached)
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            KeyCode::Esc => self.dismiss(),
            KeyCode::Up | KeyCode::Char('k') => self.selection.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.selection.move_down(),
            KeyCode::PageUp => self.selection.page_up(),
            KeyCode::PageDown => self.selection.page_down(),
            KeyCode::Home => self.selection.home(),
            KeyCode::End => self.selection.end(),
            KeyCode::Enter | KeyCode::Char(' ') => return self.pick(self.selection.cursor()),
            _ => {}
        }
        Command::none()
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Command<Message> {
        let Some(attachment) = self.attachment else {
            return Command::none();
        };
        let (col, row) = (mouse.column, mouse.row);
        let in_list = hit(attachment.list, col, row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if hit(attachment.button, col, row) {
                    self.dismiss();
                } else if in_list {
                    if let Some(index) = self.row_at(attachment.list, row) {
                        return self.pick(index);
                    }
                } else if hit(attachment.surface, col, row) {
                    self.dismiss();
                }
            }
            MouseEventKind::Moved if in_list => {
                if let Some(index) = self.row_at(attachment.list, row) {
                    self.selection.select(index);
                }
            }
            MouseEventKind::ScrollDown if in_list => self.selection.scroll(1),
            MouseEventKind::ScrollUp if in_list => self.selection.scroll(-1),
            _ => {}
        }
        Command::none()
    }

    /// Item index under screen row `row`; `None` for the header and for
    /// empty space below the last row.
    fn row_at(&self, list: Rect, row: u16) -> Option<usize> {
        let line = row.checked_sub(list.y)?.checked_sub(1)?;
        self.selection.index_at(usize::from(line))
    }
}

impl Component for Bouquet {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Tick(now) => self.on_tick(now),
            Message::Key(key) if self.accepts_input() => self.on_key(key),
            Message::Mouse(mouse) if self.accepts_input() => self.on_mouse(mouse),
            Message::Dismiss => {
                self.dismiss();
                Command::none()
            }
            Message::Key(_) | Message::Mouse(_) | Message::Picked(_) | Message::Detached => {
                Command::none()
            }
        }
    }

    /// Draws over the whole attached surface; `area` is ignored.
    fn view(&self, frame: &mut Frame, _area: Rect) {
        let Some(attachment) = self.attachment else {
            return;
        };
        if self.phase == Phase::Hidden {
            return;
        }
        let alpha = self.alpha;
        let buf = frame.buffer_mut();

        dim_area(buf, attachment.surface, self.config.background_color, alpha);

        let list = attachment.list;
        if !list.is_empty() {
            let header = Rect { height: 1, ..list };
            Header::new(&self.title, &self.config)
                .alpha(alpha)
                .render(header, buf);

            let rows = self.selection.visible();
            for line in 0..rows {
                let Some(index) = self.selection.index_at(line) else {
                    break;
                };
                let item = &self.items[index];
                let y = list.y + 1 + line as u16;
                Row::new(item.name(), item.total_channels(), &self.config)
                    .highlighted(index == self.selection.cursor())
                    .alpha(alpha)
                    .render(Rect { y, height: 1, ..list }, buf);
            }
        }

        let button = attachment.button;
        if !button.is_empty() {
            let fg = blend(self.config.background_color, self.config.text_color, alpha);
            buf.set_string(button.x, button.y, DISMISS_GLYPH, Style::default().fg(fg));
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.fade.is_some() {
            vec![subscribe(Every::new(FRAME_INTERVAL, self.id)).map(Message::Tick)]
        } else {
            vec![]
        }
    }

    fn focused(&self) -> bool {
        self.phase != Phase::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fade::FADE_DURATION;
    use bouquet_core::testing::buffer_to_string;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    const SURFACE: Rect = Rect::new(0, 0, 30, 10);
    const ANCHOR: Rect = Rect::new(0, 3, 30, 7);
    const BUTTON: Rect = Rect::new(28, 1, 2, 1);

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Message {
        Message::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn items() -> Vec<Item> {
        vec![Item::new("X", 1), Item::new("Y", 2), Item::new("Z", 30)]
    }

    fn later() -> Instant {
        Instant::now() + FADE_DURATION + Duration::from_millis(50)
    }

    fn shown() -> Bouquet {
        let mut b = Bouquet::new("bouquets", "Bouquet", items(), BouquetConfig::default());
        b.show(SURFACE, ANCHOR, BUTTON);
        b.update(Message::Tick(later()));
        assert_eq!(b.phase(), Phase::Shown);
        b
    }

    fn render(b: &Bouquet) -> String {
        let mut terminal = Terminal::new(TestBackend::new(SURFACE.width, SURFACE.height)).unwrap();
        terminal.draw(|f| b.view(f, SURFACE)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn emitted(cmd: Command<Message>) -> Vec<Message> {
        cmd.into_messages()
    }

    #[test]
    fn new_is_hidden_and_detached() {
        let b = Bouquet::new("bouquets", "Bouquet", items(), BouquetConfig::default());
        assert_eq!(b.phase(), Phase::Hidden);
        assert!(!b.is_attached());
        assert!(!b.focused());
        assert!(b.subscriptions().is_empty());
    }

    #[test]
    fn show_attaches_transparent_and_fades_in() {
        let mut b = Bouquet::new("bouquets", "Bouquet", items(), BouquetConfig::default());
        b.show(SURFACE, ANCHOR, BUTTON);
        assert_eq!(b.phase(), Phase::Showing);
        assert_eq!(b.alpha(), 0.0);
        assert_eq!(b.list_area(), Some(ANCHOR));
        assert_eq!(b.button_area(), Some(BUTTON));
        assert_eq!(b.subscriptions().len(), 1);

        let cmd = b.update(Message::Tick(later()));
        assert!(cmd.is_none());
        assert_eq!(b.phase(), Phase::Shown);
        assert_eq!(b.alpha(), 1.0);
        assert!(b.subscriptions().is_empty());
    }

    #[test]
    fn show_without_surface_is_silent_noop() {
        let mut b = Bouquet::new("bouquets", "Bouquet", items(), BouquetConfig::default());
        b.show(Rect::default(), ANCHOR, BUTTON);
        assert_eq!(b.phase(), Phase::Hidden);
        assert!(!b.is_attached());
    }

    #[test]
    fn show_twice_is_ignored() {
        let mut b = shown();
        b.show(SURFACE, Rect::new(0, 5, 30, 5), BUTTON);
        assert_eq!(b.phase(), Phase::Shown);
        assert_eq!(b.list_area(), Some(ANCHOR));
    }

    #[test]
    fn enter_picks_cursor_row_then_dismisses() {
        let mut b = shown();
        b.update(key(KeyCode::Down));
        let msgs = emitted(b.update(key(KeyCode::Enter)));
        assert_eq!(msgs, vec![Message::Picked(1)]);
        assert_eq!(b.phase(), Phase::Dismissing);
    }

    #[test]
    fn dismiss_fade_detaches_exactly_once() {
        let mut b = shown();
        b.dismiss();
        b.dismiss();
        assert_eq!(b.phase(), Phase::Dismissing);

        let msgs = emitted(b.update(Message::Tick(later())));
        assert_eq!(msgs, vec![Message::Detached]);
        assert_eq!(b.phase(), Phase::Hidden);
        assert!(!b.is_attached());

        assert!(emitted(b.update(Message::Tick(later()))).is_empty());
        b.dismiss();
        assert_eq!(b.phase(), Phase::Hidden);
        assert!(!b.focused());

        b.show(SURFACE, ANCHOR, BUTTON);
        assert_eq!(b.phase(), Phase::Hidden, "overlays are single-use");
    }

    #[test]
    fn dismiss_on_hidden_is_noop() {
        let mut b = Bouquet::new("bouquets", "Bouquet", items(), BouquetConfig::default());
        b.dismiss();
        assert_eq!(b.phase(), Phase::Hidden);
        assert!(b.subscriptions().is_empty());
    }

    #[test]
    fn dismiss_mid_fade_in_starts_from_current_alpha() {
        let mut b = Bouquet::new("bouquets", "Bouquet", items(), BouquetConfig::default());
        b.show(SURFACE, ANCHOR, BUTTON);
        b.update(Message::Tick(Instant::now() + Duration::from_millis(150)));
        let mid = b.alpha();
        assert!(mid > 0.0 && mid < 1.0);
        b.dismiss();
        assert_eq!(b.phase(), Phase::Dismissing);
        b.update(Message::Tick(Instant::now()));
        assert!(b.alpha() <= mid);
    }

    #[test]
    fn input_ignored_while_dismissing() {
        let mut b = shown();
        b.dismiss();
        assert!(emitted(b.update(key(KeyCode::Enter))).is_empty());
        assert!(emitted(b.update(click(2, 5))).is_empty());
    }

    #[test]
    fn esc_dismisses() {
        let mut b = shown();
        b.update(key(KeyCode::Esc));
        assert_eq!(b.phase(), Phase::Dismissing);
    }

    #[test]
    fn click_on_row_picks_by_position() {
        let mut b = shown();
        // Row 3 is the header, rows 4.. are items.
        let msgs = emitted(b.update(click(10, 6)));
        assert_eq!(msgs, vec![Message::Picked(2)]);
        assert_eq!(b.phase(), Phase::Dismissing);
    }

    #[test]
    fn click_on_header_or_empty_list_space_does_nothing() {
        let mut b = shown();
        assert!(emitted(b.update(click(10, 3))).is_empty());
        assert!(emitted(b.update(click(10, 9))).is_empty());
        assert_eq!(b.phase(), Phase::Shown);
    }

    #[test]
    fn click_outside_list_dismisses() {
        let mut b = shown();
        assert!(emitted(b.update(click(5, 0))).is_empty());
        assert_eq!(b.phase(), Phase::Dismissing);
    }

    #[test]
    fn click_on_dismiss_button_dismisses() {
        let mut b = shown();
        b.update(click(29, 1));
        assert_eq!(b.phase(), Phase::Dismissing);
    }

    #[test]
    fn wheel_scrolls_long_lists() {
        let many: Vec<Item> = (0..20).map(|i| Item::new(format!("P{i}"), i)).collect();
        let mut b = Bouquet::new("bouquets", "Bouquet", many, BouquetConfig::default());
        b.show(SURFACE, ANCHOR, BUTTON);
        b.update(Message::Tick(later()));
        b.update(Message::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 3,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }));
        // Six visible rows; after one wheel step the first row shown is P1.
        let msgs = emitted(b.update(click(3, 4)));
        assert_eq!(msgs, vec![Message::Picked(1)]);
    }

    #[test]
    fn header_stays_pinned_while_rows_scroll() {
        let many: Vec<Item> = (0..20).map(|i| Item::new(format!("P{i}"), i)).collect();
        let mut b = Bouquet::new("bouquets", "Bouquet", many, BouquetConfig::default());
        b.show(SURFACE, ANCHOR, BUTTON);
        b.update(Message::Tick(later()));
        for _ in 0..5 {
            b.update(Message::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 3,
                row: 6,
                modifiers: KeyModifiers::NONE,
            }));
        }

        let out = render(&b);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[3].starts_with("  Bouquet"));
        assert!(lines[4].starts_with("  P5 "));
        assert!(lines[9].starts_with("  P10 "));
    }

    #[test]
    fn renders_header_rows_and_dismiss_button() {
        let b = shown();
        let out = render(&b);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains(DISMISS_GLYPH));
        assert!(lines[3].starts_with("  Bouquet"));
        assert!(lines[4].starts_with("  X"));
        assert!(lines[4].trim_end().ends_with('1'));
        assert!(lines[6].starts_with("  Z"));
        assert!(lines[6].trim_end().ends_with("30"));
    }

    #[test]
    fn renders_nothing_when_hidden() {
        let b = Bouquet::new("bouquets", "Bouquet", items(), BouquetConfig::default());
        assert!(render(&b).chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn picked_index_refers_to_snapshot() {
        let mut b = shown();
        let msgs = emitted(b.update(click(10, 5)));
        assert_eq!(msgs, vec![Message::Picked(1)]);
        assert_eq!(b.items()[1].name(), "Y");
    }
}
