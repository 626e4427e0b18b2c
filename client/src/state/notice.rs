//! Transient success/error banners.
//!
//! DESIGN
//! ======
//! `NoticeState` is a plain ordered queue so its behavior is testable without
//! a reactive runtime. `Notifications` wraps it in a signal, implements the
//! request layer's `Notifier` seam, and schedules auto-dismissal in the
//! browser.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

use crate::net::request::{Notifier, UNKNOWN_ERROR};

/// Text shown by a success banner with no description of its own.
pub const DONE: &str = "done";

/// How long a banner stays visible in the browser.
pub const DISPLAY_MILLIS: u32 = 4_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// One banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub description: String,
}

/// Ordered queue of visible banners.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue an error banner, returning its id.
    pub fn push_error(&mut self, reason: &str) -> u64 {
        self.push(NoticeKind::Error, non_empty_or(reason, UNKNOWN_ERROR))
    }

    /// Queue a success banner, returning its id.
    pub fn push_success(&mut self, text: &str) -> u64 {
        self.push(NoticeKind::Success, non_empty_or(text, DONE))
    }

    /// Remove the banner with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    fn push(&mut self, kind: NoticeKind, description: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, description: description.to_owned() });
        id
    }
}

fn non_empty_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.trim().is_empty() { fallback } else { text }
}

/// Context handle for the banner queue.
#[derive(Clone, Copy)]
pub struct Notifications {
    state: RwSignal<NoticeState>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(NoticeState::default()) }
    }

    /// Visible banners, oldest first; tracked.
    #[must_use]
    pub fn items(&self) -> Vec<Notice> {
        self.state.with(|s| s.items.clone())
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }

    fn show(&self, push: impl FnOnce(&mut NoticeState) -> u64) {
        let mut id = 0;
        self.state.update(|s| id = push(s));
        self.schedule_dismiss(id);
    }

    fn schedule_dismiss(&self, id: u64) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DISPLAY_MILLIS).await;
                state.update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

impl Notifier for Notifications {
    fn error(&self, reason: &str) {
        leptos::logging::warn!("error notice: {reason}");
        self.show(|s| s.push_error(reason));
    }

    fn success(&self, text: &str) {
        self.show(|s| s.push_success(text));
    }
}
