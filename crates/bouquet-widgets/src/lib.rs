//! Widgets for picking a playlist ("bouquet") in a **bouquet** TUI.
//!
//! [`Control`](control::Control) implements [`bouquet_core::Component`], so
//! it can be embedded inside any [`bouquet_core::Model`] and laid out with
//! [`ratatui`]. It opens a [`Bouquet`](bouquet::Bouquet) overlay that covers
//! the frame, fades in, and reports the picked row.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`control`] | Inline label and chevron that opens the overlay |
//! | [`bouquet`] | Full-surface list overlay with fade transitions |
//! | [`row`] | Row and header renderers |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | [`BouquetConfig`](config::BouquetConfig) style bag |
//! | [`item`] | Playlist entries and name de-duplication |
//! | [`fade`] | Opacity transitions emulated by color blending |
//! | [`geometry`] | Anchoring and hit testing |
//! | [`selection`] | Cursor and scroll offset for the row list |

pub mod bouquet;
pub mod config;
pub mod control;
pub mod fade;
pub mod geometry;
pub mod item;
pub mod row;
pub mod selection;

pub use bouquet::Bouquet;
pub use config::BouquetConfig;
pub use control::Control;
pub use item::Item;
