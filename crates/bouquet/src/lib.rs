//! **bouquet** -- a playlist dropdown for [`ratatui`] applications.
//!
//! This is the umbrella crate that re-exports everything needed to embed the
//! control from a single dependency:
//!
//! ```toml
//! [dependencies]
//! bouquet = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`bouquet_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Subscription`], [`Program`],
//!   [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`bouquet_widgets`]
//!   ([`Control`](widgets::Control), [`Bouquet`](widgets::Bouquet),
//!   [`Item`](widgets::Item), [`BouquetConfig`](widgets::BouquetConfig)).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use bouquet::widgets::{control, Control, Item};
//! use bouquet::{Command, Component, Model};
//! use bouquet::ratatui::layout::Rect;
//! use bouquet::ratatui::Frame;
//!
//! struct App {
//!     picker: Control,
//! }
//!
//! enum Msg {
//!     Picker(control::Message),
//! }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let mut picker = Control::new("picker");
//!         picker.configure("Bouquet", vec![Item::new("News", 12)]);
//!         (App { picker }, Command::none())
//!     }
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Picker(m) => self.picker.update(m).map(Msg::Picker),
//!         }
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         self.picker.view(frame, Rect::new(0, 0, 30, 1));
//!     }
//! }
//! ```

pub use bouquet_core::*;
pub mod widgets {
    pub use bouquet_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
