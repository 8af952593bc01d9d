// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits between the display surface and the domain/services
// - The controller owns all mutable session state
// - Shell commands only translate text into UI events

pub mod bootstrap;
pub mod commands;
pub mod controller;
pub mod debounce;
pub mod error_handling;
pub mod events;
pub mod fetcher;

#[cfg(test)]
mod controller_tests;

pub use bootstrap::build_controller;
pub use commands::{parse_command, ShellCommand, HELP_TEXT};
pub use controller::{CatalogController, FetchTicket};
pub use debounce::SearchDebouncer;
pub use events::{Key, UiEvent};
pub use fetcher::{spawn_fetch, FetchCompletion};
