//! Screen state and the pure transition function.
//!
//! ## Screen flow
//!
//! ```text
//! Home --scan--> Scanning --(detection)--> Ingredients
//! Home --manual--------------------------> Ingredients
//! Ingredients --back (clears pantry)-----> Home
//! Ingredients --search (non-empty)-------> Recipes
//! Ingredients --rescan-------------------> Scanning
//! Recipes --back-------------------------> Ingredients
//! Recipes --shopping list----------------> Shopping
//! Shopping --back------------------------> Recipes
//! ```
//!
//! Detection results are applied from any screen and always land on
//! Ingredients. Any other (screen, action) pair leaves the state untouched.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::DetectionError;
use crate::events::Event;
use crate::filter::{DifficultyFilter, FilterState, SelectionState, TimeFilter};
use crate::pantry::Pantry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Scanning,
    Ingredients,
    Recipes,
    Shopping,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::Scanning => "scanning",
            Screen::Ingredients => "ingredients",
            Screen::Recipes => "recipes",
            Screen::Shopping => "shopping",
        };
        f.write_str(name)
    }
}

/// User actions and detector callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Home: photograph the fridge.
    StartDetection,
    /// Home: skip scanning and type ingredients in.
    AddManually,
    Back,
    /// Ingredients: go to recipes. Ignored while the pantry is empty.
    SearchRecipes,
    /// Ingredients: photograph again.
    ScanAgain,
    /// Recipes: open the shopping list.
    ViewShoppingList,
    AddIngredient(String),
    RemoveIngredient(usize),
    SetTimeFilter(TimeFilter),
    SetDifficultyFilter(DifficultyFilter),
    /// Expand a recipe card, or collapse it if already expanded.
    ToggleRecipe(u32),
    /// A scan finished; replaces the pantry.
    DetectionCompleted(Vec<String>),
    /// A scan failed; falls back to manual entry with the pantry as-is.
    DetectionFailed(DetectionError),
}

/// Side effects the controller must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartDetection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub screen: Screen,
    pub pantry: Pantry,
    pub filters: FilterState,
    pub selection: SelectionState,
}

/// Result of applying one action.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
    pub events: Vec<Event>,
}

impl Transition {
    /// True when the action was a no-op.
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty() && self.events.is_empty()
    }
}

/// Apply `action` to `state` without touching anything else.
pub fn transition(state: &AppState, action: Action) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();
    let mut events = Vec::new();
    let at = Utc::now();

    match (state.screen, action) {
        (_, Action::DetectionCompleted(items)) => {
            next.pantry.replace_all(&items);
            next.screen = Screen::Ingredients;
            events.push(Event::DetectionCompleted {
                ingredients: next.pantry.as_slice().to_vec(),
                at,
            });
        }
        (_, Action::DetectionFailed(error)) => {
            next.screen = Screen::Ingredients;
            events.push(Event::DetectionFailed {
                reason: error.to_string(),
                retryable: error.is_retryable(),
                at,
            });
        }
        (Screen::Home, Action::StartDetection) | (Screen::Ingredients, Action::ScanAgain) => {
            next.screen = Screen::Scanning;
            effects.push(Effect::StartDetection);
        }
        (Screen::Home, Action::AddManually) => {
            next.screen = Screen::Ingredients;
        }
        (Screen::Ingredients, Action::Back) => {
            let removed = next.pantry.len();
            next.pantry.clear();
            next.screen = Screen::Home;
            events.push(Event::PantryCleared { removed, at });
        }
        (Screen::Ingredients, Action::SearchRecipes) if !state.pantry.is_empty() => {
            next.screen = Screen::Recipes;
        }
        (Screen::Ingredients, Action::AddIngredient(name)) => {
            if let Some(added) = next.pantry.add(&name).map(str::to_string) {
                let index = next.pantry.len() - 1;
                events.push(Event::IngredientAdded {
                    name: added,
                    index,
                    at,
                });
            }
        }
        (Screen::Ingredients, Action::RemoveIngredient(index)) => {
            if let Some(name) = next.pantry.remove_at(index) {
                events.push(Event::IngredientRemoved { name, index, at });
            }
        }
        (Screen::Recipes, Action::Back) => {
            next.screen = Screen::Ingredients;
        }
        (Screen::Recipes, Action::ViewShoppingList) => {
            next.screen = Screen::Shopping;
        }
        (Screen::Recipes, Action::SetTimeFilter(time)) if time != state.filters.time => {
            next.filters.time = time;
            events.push(Event::FiltersChanged {
                filters: next.filters,
                at,
            });
        }
        (Screen::Recipes, Action::SetDifficultyFilter(difficulty))
            if difficulty != state.filters.difficulty =>
        {
            next.filters.difficulty = difficulty;
            events.push(Event::FiltersChanged {
                filters: next.filters,
                at,
            });
        }
        (Screen::Recipes, Action::ToggleRecipe(id)) => {
            let selected = next.selection.toggle(id);
            events.push(Event::RecipeSelectionChanged { selected, at });
        }
        (Screen::Shopping, Action::Back) => {
            next.screen = Screen::Recipes;
        }
        (screen, action) => {
            tracing::debug!(%screen, ?action, "action has no effect on this screen");
        }
    }

    if next.screen != state.screen {
        tracing::info!(from = %state.screen, to = %next.screen, "screen changed");
        events.push(Event::ScreenChanged {
            from: state.screen,
            to: next.screen,
            at,
        });
    }

    Transition {
        state: next,
        effects,
        events,
    }
}
