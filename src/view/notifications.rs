// src/view/notifications.rs
//
// Transient notifications (toasts)
//
// Each notification carries its own deadline; expiring one never
// affects the others.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
            NotificationKind::Warning => "exclamation-triangle",
            NotificationKind::Info => "info-circle",
        }
    }

    /// Single-glyph marker for text surfaces
    pub fn glyph(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
            NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct NotificationTray {
    next_id: u64,
    lifetime: Duration,
    items: Vec<Notification>,
}

impl NotificationTray {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            next_id: 1,
            lifetime,
            items: Vec::new(),
        }
    }

    /// Stacks a new notification that expires `lifetime` after `now`
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
            expires_at: now + self.lifetime,
        });
        id
    }

    /// Drops every notification whose deadline has passed; returns how many
    pub fn dismiss_expired(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.expires_at > now);
        before - self.items.len()
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.items.iter().map(|n| n.expires_at).min()
    }

    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    pub fn count_of(&self, kind: NotificationKind) -> usize {
        self.items.iter().filter(|n| n.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
