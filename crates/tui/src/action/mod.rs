//! Action protocol for the kiosk event loop.
//!
//! Actions represent user inputs (raw terminal events and the intents they
//! map to) and housekeeping events such as ticks and quit.
//!
//! # Module Structure
//!
//! - `redaction`: Logging wrapper that never prints typed text (`RedactedAction`)
//! - `variants`: Action enum definitions (`Action`)
//!
//! # Security Note
//!
//! When logging Actions, use `RedactedAction(&action)` instead of `?action`.
//! Key events and key presses carry what the user is typing, which may be a
//! password.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by `App::update`)
//! - Mapping terminal events to actions (handled by `input` and `App::handle_mouse`)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::{Action, FieldMove};
