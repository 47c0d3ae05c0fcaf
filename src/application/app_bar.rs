// src/application/app_bar.rs
use crate::application::signal::{Signal, SignalSender};
use crate::domain::ViewFilter;
use tracing::debug;

pub const APP_TITLE: &str = "Notes App";

/// Two-button view toggle. The highlight moves on click, before the
/// controller has fetched anything; it carries no data.
#[derive(Debug, Clone)]
pub struct AppBar {
    highlighted: ViewFilter,
    signals: SignalSender,
}

impl AppBar {
    pub fn new(signals: SignalSender) -> Self {
        Self {
            highlighted: ViewFilter::Active,
            signals,
        }
    }

    pub fn highlighted(&self) -> ViewFilter {
        self.highlighted
    }

    pub fn click(&mut self, filter: ViewFilter) {
        debug!(%filter, "App bar button clicked");
        self.highlighted = filter;
        self.signals.emit(match filter {
            ViewFilter::Active => Signal::ShowActive,
            ViewFilter::Archived => Signal::ShowArchived,
        });
    }

    /// Move the highlight without announcing anything, e.g. after the
    /// controller forced the active view.
    pub fn sync(&mut self, filter: ViewFilter) {
        self.highlighted = filter;
    }
}
