//! The inline bouquet control: a label plus a chevron that opens a
//! [`Bouquet`] overlay listing playlists.
//!
//! The control owns at most one overlay at a time. The host tells it where
//! it sits ([`set_area`](Control::set_area)) and which surface overlays are
//! drawn over ([`attach`](Control::attach)), routes input to it while
//! [`focused`](Component::focused), and listens for
//! [`Message::ItemSelected`].
//!
//! ```rust,ignore
//! let mut control = Control::new("bouquets")
//!     .with_on_select(|name| tracing::info!(name, "picked"));
//! control.attach(frame_area);
//! control.set_area(Rect::new(2, 1, 30, 1));
//! control.configure("Bouquet", vec![Item::new("News", 12)]);
//! ```

use crate::bouquet::{self, Bouquet, Phase};
use crate::config::BouquetConfig;
use crate::geometry::{anchor_below, hit, trailing_button, BUTTON_WIDTH};
use crate::item::{dedup_by_name, Item};
use crate::row::truncate;
use bouquet_core::command::Command;
use bouquet_core::component::Component;
use bouquet_core::subscription::Subscription;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;

/// Chevron drawn in the trigger button.
pub const CHEVRON: &str = "▾";

/// Messages for the bouquet control.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Open the overlay, as if the trigger was pressed.
    Activate,
    /// A key press routed to the control.
    Key(KeyEvent),
    /// A mouse event routed to the control (screen coordinates).
    Mouse(MouseEvent),
    /// Traffic to and from the open overlay.
    Bouquet(bouquet::Message),
    /// Emitted after a row was picked, carrying the item's name.
    ItemSelected(String),
}

/// Callback invoked with the picked item's name.
pub type OnSelect = Box<dyn Fn(&str) + Send>;

/// A compact selector showing the current playlist and opening the full
/// list on demand.
pub struct Control {
    id: &'static str,
    title: Option<String>,
    items: Vec<Item>,
    selected_text: Option<String>,
    config: BouquetConfig,
    surface: Option<Rect>,
    area: Rect,
    keyboard_focus: bool,
    overlay: Option<Bouquet>,
    on_select: Option<OnSelect>,
}

impl Control {
    /// An unconfigured control: no title, no items, not interactive.
    ///
    /// `id` names the fade timer of the overlays this control opens. Give
    /// every control on screen its own id.
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            title: None,
            items: Vec::new(),
            selected_text: None,
            config: BouquetConfig::default(),
            surface: None,
            area: Rect::default(),
            keyboard_focus: false,
            overlay: None,
            on_select: None,
        }
    }

    /// Set the style used by the label and the overlays it opens.
    pub fn with_config(mut self, config: BouquetConfig) -> Self {
        self.config = config;
        self
    }

    /// Style used by the label and by overlays opened from now on.
    pub fn set_config(&mut self, config: BouquetConfig) {
        self.config = config;
    }

    /// Register a callback run with the item's name on every pick, before
    /// [`Message::ItemSelected`] is emitted.
    pub fn with_on_select(mut self, f: impl Fn(&str) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Provide the surface overlays cover, normally the whole frame.
    pub fn attach(&mut self, surface: Rect) {
        self.surface = Some(surface);
        self.relayout();
    }

    /// Forget the surface. An open overlay has nowhere to draw and is dropped.
    pub fn detach_surface(&mut self) {
        self.surface = None;
        if self.overlay.take().is_some() {
            tracing::debug!("surface detached; dropping open bouquet");
        }
    }

    /// Where the control itself is drawn.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.relayout();
    }

    /// Mark the control as holding the host's keyboard focus, so Enter,
    /// Space and Down open it. Unrelated to [`Component::focused`], which
    /// reports whether an open overlay captures all input.
    pub fn set_keyboard_focus(&mut self, focus: bool) {
        self.keyboard_focus = focus;
    }

    /// Replace the title and the list. Duplicate names keep their first
    /// occurrence.
    pub fn configure(&mut self, title: impl Into<String>, items: impl IntoIterator<Item = Item>) {
        self.title = Some(title.into());
        self.replace_items(items);
    }

    /// Replace the list, keeping the title.
    pub fn update_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.replace_items(items);
    }

    fn replace_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items = dedup_by_name(items);
        if self.items.is_empty() {
            self.selected_text = None;
            if let Some(overlay) = &mut self.overlay {
                overlay.dismiss();
            }
        }
        tracing::trace!(items = self.items.len(), "bouquet items replaced");
    }

    /// Open the overlay below the control.
    ///
    /// Does nothing while the list is empty, before a surface or title is
    /// known, or while an overlay is already on screen. An overlay that is
    /// fading out is dropped and replaced.
    pub fn activate(&mut self) -> Command<Message> {
        if !self.is_interactive() {
            tracing::debug!("bouquet has no items; ignoring activation");
            return Command::none();
        }
        let (Some(surface), Some(title)) = (self.surface, self.title.as_deref()) else {
            tracing::debug!(
                surface = self.surface.is_some(),
                title = self.title.is_some(),
                "bouquet not ready; ignoring activation"
            );
            return Command::none();
        };
        if let Some(overlay) = &self.overlay {
            if overlay.phase() != Phase::Dismissing {
                return Command::none();
            }
            tracing::debug!("replacing bouquet that was still fading out");
        }

        let mut overlay = Bouquet::new(self.id, title, self.items.clone(), self.config.clone());
        overlay.show(
            surface,
            anchor_below(self.area, surface),
            trailing_button(self.area),
        );
        self.overlay = (overlay.phase() != Phase::Hidden).then_some(overlay);
        Command::none()
    }

    /// The title given to [`configure`](Control::configure), if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The current list, already de-duplicated.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Name of the last picked item.
    pub fn selected_text(&self) -> Option<&str> {
        self.selected_text.as_deref()
    }

    /// What the label shows: the selection, else the title, else nothing.
    pub fn display_text(&self) -> &str {
        self.selected_text
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or_default()
    }

    /// False while the list is empty; the chevron is hidden and input ignored.
    pub fn is_interactive(&self) -> bool {
        !self.items.is_empty()
    }

    /// Whether an overlay is attached (including while it fades out).
    pub fn is_open(&self) -> bool {
        self.overlay.is_some()
    }

    /// The open overlay, if any.
    pub fn overlay(&self) -> Option<&Bouquet> {
        self.overlay.as_ref()
    }

    fn relayout(&mut self) {
        let (Some(surface), Some(overlay)) = (self.surface, self.overlay.as_mut()) else {
            return;
        };
        overlay.relayout(
            surface,
            anchor_below(self.area, surface),
            trailing_button(self.area),
        );
    }

    fn on_bouquet(&mut self, msg: bouquet::Message) -> Command<Message> {
        match msg {
            bouquet::Message::Picked(index) => {
                if !self.is_interactive() {
                    tracing::debug!(index, "list emptied while open; ignoring pick");
                    return Command::none();
                }
                let Some(name) = self
                    .overlay
                    .as_ref()
                    .and_then(|o| o.items().get(index))
                    .map(|item| item.name().to_string())
                else {
                    tracing::warn!(index, "picked row is not in the open bouquet");
                    return Command::none();
                };
                tracing::info!(name = %name, "bouquet item selected");
                if let Some(f) = &self.on_select {
                    f(&name);
                }
                self.selected_text = Some(name.clone());
                Command::message(Message::ItemSelected(name))
            }
            bouquet::Message::Detached => {
                // A replacement overlay may already be showing.
                if self
                    .overlay
                    .as_ref()
                    .is_some_and(|o| o.phase() == Phase::Hidden)
                {
                    self.overlay = None;
                }
                Command::none()
            }
            other => match &mut self.overlay {
                Some(overlay) => overlay.update(other).map(Message::Bouquet),
                None => Command::none(),
            },
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Command<Message> {
        if self.overlay.is_some() {
            return self.on_bouquet(bouquet::Message::Key(key));
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down if self.keyboard_focus => self.activate(),
            _ => Command::none(),
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Command<Message> {
        if self.overlay.is_some() {
            return self.on_bouquet(bouquet::Message::Mouse(mouse));
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if hit(self.area, mouse.column, mouse.row) => {
                self.activate()
            }
            _ => Command::none(),
        }
    }
}

impl Component for Control {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Activate => self.activate(),
            Message::Key(key) => self.on_key(key),
            Message::Mouse(mouse) => self.on_mouse(mouse),
            Message::Bouquet(inner) => self.on_bouquet(inner),
            Message::ItemSelected(_) => Command::none(),
        }
    }

    /// Draws the label in `area` and, when open, the overlay over the frame.
    fn view(&self, frame: &mut Frame, area: Rect) {
        let area = area.intersection(frame.area());
        if !area.is_empty() {
            let buf = frame.buffer_mut();
            let button = trailing_button(area);
            // One blank cell between the label and the chevron.
            let label_width = area.width.saturating_sub(BUTTON_WIDTH + 1);
            buf.set_string(
                area.x,
                area.y,
                truncate(self.display_text(), usize::from(label_width)),
                self.config.trigger_style(),
            );
            if self.is_interactive() {
                buf.set_string(
                    button.x,
                    button.y,
                    CHEVRON,
                    Style::default().fg(self.config.text_color),
                );
            }
        }

        if let Some(overlay) = &self.overlay {
            let full = frame.area();
            overlay.view(frame, full);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        self.overlay
            .as_ref()
            .map(|o| {
                o.subscriptions()
                    .into_iter()
                    .map(|sub| sub.map(Message::Bouquet))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// True while an overlay is attached: it captures every key and mouse
    /// event, whether or not the control holds keyboard focus.
    fn focused(&self) -> bool {
        self.overlay.is_some()
    }
}
