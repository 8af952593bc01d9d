// src/view/mod.rs
//
// View layer
//
// Retained view model plus a text drawing for terminal surfaces.
// The renderer never talks to the network or storage.

pub mod model;
pub mod notifications;
pub mod renderer;
pub mod text;

pub use model::{
    capitalize_first, CharacterCard, DetailView, GridContent, PaginationView, Placeholder,
    ADD_FAVORITE_LABEL, REMOVE_FAVORITE_LABEL,
};
pub use notifications::{Notification, NotificationKind, NotificationTray};
pub use renderer::ViewRenderer;
pub use text::render_screen;
