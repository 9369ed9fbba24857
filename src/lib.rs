//! Macro Tab Library
//!
//! This library provides the macro binding logic of a keyboard keymap
//! editor: projecting the macro list into selector options, converting
//! between play-macro key actions and the selection, and composing the
//! back link used when jumping to the macro editor.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod tab;
