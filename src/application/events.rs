// src/application/events.rs
//
// User interactions delivered by the display surface

use crate::domain::{CharacterId, CharacterStatus, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Raw search box input; debounced before it reaches the query
    SearchInput(String),
    ClearSearch,
    StatusFilterChanged(Option<CharacterStatus>),
    SpeciesFilterChanged(Option<String>),
    PrevPage,
    NextPage,
    Retry,
    SwitchTab(Tab),
    /// Click on a card body (not its favorite toggle)
    CardClicked(CharacterId),
    /// Click on a favorite toggle, in a card or in the detail panel
    FavoriteToggled(CharacterId),
    CloseClicked,
    OverlayClicked,
    KeyPressed(Key),
}
