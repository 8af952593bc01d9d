// src/application/commands.rs
//
// Shell Command Parsing
//
// RULES:
// - Commands are thin adapters between the terminal and the controller
// - One input line maps to at most one UI event
// - Parsing never touches controller state

use crate::domain::{CharacterId, CharacterStatus, Tab};

use super::events::{Key, UiEvent};

pub const HELP_TEXT: &str = "\
commands:
  search <term>         type into the search box (debounced)
  clear                 clear the search box
  status [alive|dead|unknown|all]
  species [name]        empty clears the filter
  next | prev           change page
  retry                 re-issue the last catalog request
  tab <catalog|favorites>
  open <id>             open the detail panel
  fav <id>              toggle favorite
  close | esc | overlay close the detail panel
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Ui(UiEvent),
    Help,
    Quit,
}

/// Parses one shell line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => ShellCommand::Ui(UiEvent::SearchInput(rest.to_string())),
        "clear" => ShellCommand::Ui(UiEvent::ClearSearch),
        "status" => ShellCommand::Ui(UiEvent::StatusFilterChanged(parse_status(rest)?)),
        "species" => {
            let species = (!rest.is_empty()).then(|| rest.to_string());
            ShellCommand::Ui(UiEvent::SpeciesFilterChanged(species))
        }
        "next" | "n" => ShellCommand::Ui(UiEvent::NextPage),
        "prev" | "p" => ShellCommand::Ui(UiEvent::PrevPage),
        "retry" => ShellCommand::Ui(UiEvent::Retry),
        "tab" => {
            let tab = Tab::parse(rest).ok_or_else(|| format!("Unknown tab: {:?}", rest))?;
            ShellCommand::Ui(UiEvent::SwitchTab(tab))
        }
        "open" => ShellCommand::Ui(UiEvent::CardClicked(parse_id(rest)?)),
        "fav" | "f" => ShellCommand::Ui(UiEvent::FavoriteToggled(parse_id(rest)?)),
        "close" => ShellCommand::Ui(UiEvent::CloseClicked),
        "esc" => ShellCommand::Ui(UiEvent::KeyPressed(Key::Escape)),
        "overlay" => ShellCommand::Ui(UiEvent::OverlayClicked),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command: {}", other)),
    };

    Ok(Some(command))
}

fn parse_status(value: &str) -> Result<Option<CharacterStatus>, String> {
    match value.to_ascii_lowercase().as_str() {
        "" | "all" | "any" => Ok(None),
        other => CharacterStatus::parse(other).map(Some).ok_or_else(|| {
            let known: Vec<&str> = CharacterStatus::ALL
                .iter()
                .map(CharacterStatus::as_query_value)
                .collect();
            format!("Unknown status: {} (expected {} or all)", other, known.join(", "))
        }),
    }
}

fn parse_id(value: &str) -> Result<CharacterId, String> {
    value
        .parse::<CharacterId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| format!("Invalid character id: {:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui(line: &str) -> UiEvent {
        match parse_command(line) {
            Ok(Some(ShellCommand::Ui(event))) => event,
            other => panic!("expected a UI event for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_search_keeps_inner_spaces() {
        assert_eq!(ui("search  rick sanchez "), UiEvent::SearchInput("rick sanchez".to_string()));
        assert_eq!(ui("search"), UiEvent::SearchInput(String::new()));
    }

    #[test]
    fn test_filters() {
        assert_eq!(ui("status Dead"), UiEvent::StatusFilterChanged(Some(CharacterStatus::Dead)));
        assert_eq!(ui("status all"), UiEvent::StatusFilterChanged(None));
        assert_eq!(ui("status"), UiEvent::StatusFilterChanged(None));
        assert_eq!(
            parse_command("status zombie"),
            Err("Unknown status: zombie (expected alive, dead, unknown or all)".to_string())
        );

        assert_eq!(ui("species Alien"), UiEvent::SpeciesFilterChanged(Some("Alien".to_string())));
        assert_eq!(ui("species"), UiEvent::SpeciesFilterChanged(None));
    }

    #[test]
    fn test_navigation_and_modal() {
        assert_eq!(ui("next"), UiEvent::NextPage);
        assert_eq!(ui("PREV"), UiEvent::PrevPage);
        assert_eq!(ui("tab favorites"), UiEvent::SwitchTab(Tab::Favorites));
        assert_eq!(ui("open 2"), UiEvent::CardClicked(2));
        assert_eq!(ui("fav 2"), UiEvent::FavoriteToggled(2));
        assert_eq!(ui("esc"), UiEvent::KeyPressed(Key::Escape));
        assert_eq!(ui("overlay"), UiEvent::OverlayClicked);
        assert_eq!(ui("close"), UiEvent::CloseClicked);
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_command("open").is_err());
        assert!(parse_command("fav 0").is_err());
        assert!(parse_command("fav abc").is_err());
        assert!(parse_command("tab settings").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_shell_commands() {
        assert_eq!(parse_command("quit"), Ok(Some(ShellCommand::Quit)));
        assert_eq!(parse_command("help"), Ok(Some(ShellCommand::Help)));
    }
}
