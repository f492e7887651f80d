//! View lifecycle state and top-level navigation.
//!
//! Each view owns a [`LoadState`] for its data. The only state shared across
//! views is the active tab, held by a [`Navigator`] that the embedding shell
//! owns and drives with [`NavEvent`]s.

use std::fmt;
use std::str::FromStr;

use crate::error::{ErrorKind, RankingError, Result};

// ---------------------------------------------------------------------------
// LoadState
// ---------------------------------------------------------------------------

/// Why a view failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&RankingError> for LoadFailure {
    fn from(error: &RankingError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Fetch lifecycle of a single view.
///
/// `Loading -> Ready` on success, `Loading -> Failed` on any error, and
/// `Ready | Failed -> Loading` on refresh. There is no partial state: a
/// failed load keeps none of the data from the requests that did succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(LoadFailure),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Move to `Loading` for a refresh or retry, dropping any loaded data or
    /// failure.
    pub fn start_refresh(&mut self) {
        *self = LoadState::Loading;
    }

    /// Settle a load. Failures are logged against `view`.
    pub fn resolve(&mut self, view: ViewKind, result: Result<T>) {
        *self = match result {
            Ok(data) => LoadState::Ready(data),
            Err(error) => {
                tracing::warn!(view = %view, kind = %error.kind(), error = %error, "view load failed");
                LoadState::Failed(LoadFailure::from(&error))
            }
        };
    }
}

// ---------------------------------------------------------------------------
// ViewKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Dashboard,
    Rankings,
    Insights,
    Chat,
    Reports,
    Settings,
}

impl ViewKind {
    /// Tabs in navigation order.
    pub const ALL: [ViewKind; 6] = [
        ViewKind::Dashboard,
        ViewKind::Rankings,
        ViewKind::Insights,
        ViewKind::Chat,
        ViewKind::Reports,
        ViewKind::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Dashboard => "Dashboard",
            ViewKind::Rankings => "Rankings",
            ViewKind::Insights => "Insights",
            ViewKind::Chat => "AI Chat",
            ViewKind::Reports => "Reports",
            ViewKind::Settings => "Settings",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewKind::Dashboard => "dashboard",
            ViewKind::Rankings => "rankings",
            ViewKind::Insights => "insights",
            ViewKind::Chat => "chat",
            ViewKind::Reports => "reports",
            ViewKind::Settings => "settings",
        };
        f.write_str(name)
    }
}

impl FromStr for ViewKind {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self> {
        ViewKind::ALL
            .iter()
            .copied()
            .find(|v| v.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RankingError::InvalidArgument(format!("Unknown view: '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Select(ViewKind),
    /// Next tab, wrapping around.
    Next,
    /// Previous tab, wrapping around.
    Previous,
}

/// Owner of the active tab.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: ViewKind,
}

impl Default for ViewKind {
    fn default() -> Self {
        ViewKind::Dashboard
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewKind {
        self.current
    }

    /// Apply an event. Returns `true` if the active tab changed.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        let len = ViewKind::ALL.len();
        let next = match event {
            NavEvent::Select(view) => view,
            NavEvent::Next => ViewKind::ALL[(self.current.position() + 1) % len],
            NavEvent::Previous => ViewKind::ALL[(self.current.position() + len - 1) % len],
        };
        let changed = next != self.current;
        self.current = next;
        changed
    }
}
