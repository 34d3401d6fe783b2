//! # Playlists Demo
//!
//! A bouquet control embedded in a small app:
//! - Forwarding key and mouse events to a [`Control`]
//! - Keeping the control's area and surface in sync with the terminal size
//! - Reacting to [`control::Message::ItemSelected`]
//!
//! Set `BOUQUET_LOG=/tmp/bouquet.log` to write traces to a file (filtered by
//! `RUST_LOG`, default `debug`).
//!
//! Run with: `cargo run --example playlists`

use std::fs::File;
use std::sync::Mutex;

use bouquet::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use bouquet::ratatui::layout::{Constraint, Layout, Rect};
use bouquet::ratatui::style::{Color, Modifier, Style};
use bouquet::ratatui::text::{Line, Span};
use bouquet::ratatui::widgets::Paragraph;
use bouquet::ratatui::Frame;
use bouquet::widgets::{control, BouquetConfig, Control, Item};
use bouquet::{
    terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent,
};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

const PLAYLISTS: &[(&str, u32)] = &[
    ("Favourites", 24),
    ("News", 12),
    ("Sports", 31),
    ("Movies", 58),
    ("Kids", 17),
    ("Documentaries", 22),
    ("Music", 40),
    ("Regional", 9),
    ("News", 99),
];

struct App {
    picker: Control,
    last_pick: Option<String>,
    rotation: usize,
}

#[derive(Debug)]
enum Msg {
    Picker(control::Message),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Header row, the picker row, and the body.
fn layout(surface: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(surface)
}

/// The picker sits inset within its row, capped in width.
fn picker_area(row: Rect) -> Rect {
    Rect {
        x: row.x + 2,
        width: row.width.saturating_sub(4).min(36),
        ..row
    }
}

fn playlists(rotation: usize) -> Vec<Item> {
    let mut items: Vec<Item> = PLAYLISTS.iter().copied().map(Item::from).collect();
    let len = items.len();
    items.rotate_left(rotation % len);
    items
}

impl App {
    fn resize(&mut self, width: u16, height: u16) {
        let surface = Rect::new(0, 0, width, height);
        let [_, row, _] = layout(surface);
        self.picker.attach(surface);
        self.picker.set_area(picker_area(row));
    }
}

impl Model for App {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let config = BouquetConfig::default()
            .with_header_background_color(Color::Rgb(28, 28, 30))
            .with_count_color(Color::Rgb(10, 132, 255));
        let mut picker = Control::new("playlists")
            .with_config(config)
            .with_on_select(|name| tracing::info!(name, "playlist switched"));
        picker.configure("Bouquet", playlists(0));
        picker.set_keyboard_focus(true);

        let mut app = App {
            picker,
            last_pick: None,
            rotation: 0,
        };
        let (width, height) = bouquet::crossterm::terminal::size().unwrap_or((80, 24));
        app.resize(width, height);
        (app, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Picker(control::Message::ItemSelected(name)) => {
                self.last_pick = Some(name);
            }
            Msg::Picker(m) => return self.picker.update(m).map(Msg::Picker),
            Msg::Key(key) if self.picker.focused() => {
                return self
                    .picker
                    .update(control::Message::Key(key))
                    .map(Msg::Picker);
            }
            Msg::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Command::quit(),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Command::quit()
                }
                KeyCode::Char('r') => {
                    self.rotation += 1;
                    self.picker.update_items(playlists(self.rotation));
                }
                KeyCode::Char('x') => self.picker.update_items(Vec::new()),
                _ => {
                    return self
                        .picker
                        .update(control::Message::Key(key))
                        .map(Msg::Picker)
                }
            },
            Msg::Mouse(mouse) => {
                return self
                    .picker
                    .update(control::Message::Mouse(mouse))
                    .map(Msg::Picker)
            }
            Msg::Resize(width, height) => self.resize(width, height),
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame) {
        let [header, row, body] = layout(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Playlists",
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            header,
        );

        let status = match &self.last_pick {
            Some(name) => format!("Now watching: {name}"),
            None => "Nothing picked yet".to_string(),
        };
        let help = Line::from(vec![
            Span::styled("enter/click", Style::default().fg(Color::Cyan)),
            Span::raw(" open  "),
            Span::styled("r", Style::default().fg(Color::Cyan)),
            Span::raw(" reload  "),
            Span::styled("x", Style::default().fg(Color::Cyan)),
            Span::raw(" clear  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]);
        frame.render_widget(
            Paragraph::new(vec![Line::raw(""), Line::raw(format!(" {status}")), help]),
            body,
        );

        // Last, so the overlay covers everything else.
        self.picker.view(frame, picker_area(row));
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => Some(Msg::Key(key)),
            TerminalEvent::Mouse(mouse) => Some(Msg::Mouse(mouse)),
            TerminalEvent::Resize(w, h) => Some(Msg::Resize(w, h)),
        })];
        subs.extend(
            self.picker
                .subscriptions()
                .into_iter()
                .map(|s| s.map(Msg::Picker)),
        );
        subs
    }
}

fn init_tracing() -> std::io::Result<()> {
    let Some(path) = std::env::var_os("BOUQUET_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[bouquet::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;
    let options = ProgramOptions {
        title: Some("bouquet".to_string()),
        ..ProgramOptions::default()
    };
    let app = bouquet::run_with::<App>((), options).await?;
    if let Some(name) = app.last_pick {
        tracing::info!(name, "exited");
    }
    Ok(())
}
