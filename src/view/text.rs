// src/view/text.rs
//
// Plain-text drawing of the retained view for terminal surfaces

use std::fmt::Write;

use crate::domain::Tab;

use super::model::{CharacterCard, DetailView, GridContent, Placeholder};
use super::renderer::ViewRenderer;

fn status_dot(status_class: &str) -> &'static str {
    match status_class {
        "status-alive" => "🟢",
        "status-dead" => "🔴",
        _ => "⚪",
    }
}

fn write_card(out: &mut String, card: &CharacterCard) {
    let heart = if card.favorited { "♥" } else { "♡" };
    let _ = writeln!(
        out,
        "  {} #{:<4} {:<32} {} {:<8} {}",
        heart,
        card.id,
        card.name,
        status_dot(&card.status_class),
        card.status_label,
        card.species
    );
}

fn write_placeholder(out: &mut String, placeholder: &Placeholder) {
    let _ = writeln!(out, "  [{}] {}", placeholder.icon, placeholder.title);
    let _ = writeln!(out, "  {}", placeholder.message);
    if placeholder.retry {
        let _ = writeln!(out, "  (type `retry` to try again)");
    }
}

fn write_grid(out: &mut String, grid: &GridContent) {
    match grid {
        GridContent::Cards(cards) => cards.iter().for_each(|card| write_card(out, card)),
        GridContent::Empty(placeholder) | GridContent::Error(placeholder) => {
            write_placeholder(out, placeholder)
        }
    }
}

fn write_detail(out: &mut String, detail: &DetailView) {
    let _ = writeln!(out, "┌─ {} ─ {}", detail.name, detail.image);
    let _ = writeln!(
        out,
        "│ {} {} · {}",
        status_dot(&detail.status_class),
        detail.status_label,
        detail.species
    );
    let _ = writeln!(out, "│ [{}]", detail.toggle_label);
    let _ = writeln!(out, "│ General info");
    let _ = writeln!(out, "│   Gender:   {}", detail.gender);
    let _ = writeln!(out, "│   Origin:   {}", detail.origin);
    let _ = writeln!(out, "│   Location: {}", detail.location);
    let _ = writeln!(
        out,
        "│ Appears in {} episode(s)",
        detail.appearance_count
    );
    let _ = writeln!(out, "│ Created on {}", detail.created_on);
    let _ = writeln!(out, "└─ (`close` or `esc` to dismiss)");
}

/// Draws every region of the view
pub fn render_screen(view: &ViewRenderer) -> String {
    let mut out = String::new();

    let (catalog_tab, favorites_tab) = match view.active_tab() {
        Tab::Catalog => ("[Characters]", " Favorites "),
        Tab::Favorites => (" Characters ", "[Favorites]"),
    };
    let _ = write!(
        out,
        "{} ({})  {} ({})",
        catalog_tab,
        view.characters_count(),
        favorites_tab,
        view.favorites_count()
    );
    if view.is_loading() {
        let _ = write!(out, "  loading…");
    }
    out.push('\n');

    write_grid(&mut out, view.active_grid());

    if view.active_tab() == Tab::Catalog {
        let pagination = view.pagination();
        let _ = writeln!(
            out,
            "  {} prev | {} | next {}",
            if pagination.prev_disabled { "·" } else { "◀" },
            pagination.label(),
            if pagination.next_disabled { "·" } else { "▶" }
        );
    }

    if let Some(detail) = view.detail() {
        write_detail(&mut out, detail);
    }

    for notification in view.notifications().active() {
        let _ = writeln!(out, "{} {}", notification.kind.glyph(), notification.message);
    }

    out
}
