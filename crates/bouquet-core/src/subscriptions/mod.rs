//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]) -- keyboard, mouse and resize
//!   events from the terminal.
//! - **Frame timer** ([`Every`]) -- a repeating timer, used by the bouquet
//!   overlay to step its fades.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
