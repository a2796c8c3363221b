//! UI rendering modules for the kiosk.
//!
//! This module contains widgets that are separated from the main app state
//! management.

pub mod form;
pub mod keyboard;
pub mod theme;
pub mod toast;

pub use toast::{Toast, ToastLevel, newest_active, push_toast};
