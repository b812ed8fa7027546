use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::detection::DetectionHandle;
use crate::filter::FilterState;
use crate::session::Screen;

/// Every state change in a session produces an Event.
/// Front-ends render from state; events are for logs and `--json` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ScreenChanged {
        from: Screen,
        to: Screen,
        at: DateTime<Utc>,
    },
    IngredientAdded {
        name: String,
        index: usize,
        at: DateTime<Utc>,
    },
    IngredientRemoved {
        name: String,
        index: usize,
        at: DateTime<Utc>,
    },
    /// Pantry emptied when leaving the ingredients screen for home.
    PantryCleared {
        removed: usize,
        at: DateTime<Utc>,
    },
    DetectionScheduled {
        handle: DetectionHandle,
        due_at_ms: u64,
        at: DateTime<Utc>,
    },
    /// Detector output replaced the pantry.
    DetectionCompleted {
        ingredients: Vec<String>,
        at: DateTime<Utc>,
    },
    /// Detector failed; the user is sent to manual entry.
    DetectionFailed {
        reason: String,
        retryable: bool,
        at: DateTime<Utc>,
    },
    FiltersChanged {
        filters: FilterState,
        at: DateTime<Utc>,
    },
    RecipeSelectionChanged {
        selected: Option<u32>,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        screen: Screen,
        ingredients: Vec<String>,
        filters: FilterState,
        selected_recipe: Option<u32>,
        visible_recipes: usize,
        pending_detections: usize,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_type() {
        let event = Event::ScreenChanged {
            from: Screen::Home,
            to: Screen::Scanning,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ScreenChanged");
        assert_eq!(json["from"], "home");
        assert_eq!(json["to"], "scanning");
    }
}
