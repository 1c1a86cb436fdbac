//! User input events.

use serde::{Deserialize, Serialize};

use vitrine_core::CategoryId;

/// Behavior attached to an activatable node of the view tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Action {
    /// Flip the expansion state of one category section.
    ToggleCategory(CategoryId),
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Action::ToggleCategory(id) => write!(f, "toggle:{id}"),
        }
    }
}

/// A discrete event delivered by the host display layer.
///
/// The payload only identifies which activatable node fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    Activate(Action),
}

impl From<Action> for UiEvent {
    fn from(action: Action) -> Self {
        UiEvent::Activate(action)
    }
}
