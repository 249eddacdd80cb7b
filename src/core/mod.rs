//! Core viewer logic, independent of the DOM.
//!
//! This module provides:
//! - [`Gallery`] ordered image list with the active selection
//! - [`DragState`] and [`SwipeState`] gesture state machines
//! - [`hotkey_slot`] / [`hotkey_label`] digit hotkey mapping

pub mod error;
mod gallery;
mod gesture;
mod keyboard;

pub use gallery::{EntryId, Gallery};
pub use gesture::{DragState, SwipeState};
pub use keyboard::{hotkey_label, hotkey_slot};
