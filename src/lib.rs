//! Tercüman: a client for a multi-model machine translation service.
//!
//! The library models one translation page (`session::TranslationSession`):
//! model and language pickers, the input and output boxes, the on-screen
//! keyboard, and copying the result. `repl` drives a session from a terminal.

pub mod catalog;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod i18n;
pub mod keyboard;
pub mod metrics;
pub mod repl;
pub mod route;
pub mod session;
