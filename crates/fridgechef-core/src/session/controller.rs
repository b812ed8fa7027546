//! Session controller.
//!
//! Owns the [`AppState`], runs actions through [`transition`] and carries out
//! the resulting effects. It has no internal thread: the caller invokes
//! `tick()` to deliver detections whose delay has elapsed.
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = Session::new(SystemClock);
//! session.start_detection();
//! // In a loop:
//! session.tick(); // Delivers the scan once 2 s have passed
//! ```

use chrono::Utc;

use super::state::{transition, Action, AppState, Effect, Screen};
use crate::catalog::{Catalog, Recipe};
use crate::config::Config;
use crate::detection::{
    Clock, DetectionScheduler, Detector, ImagePayload, SimulatedDetector, SystemClock,
    DETECTION_DELAY_MS,
};
use crate::events::Event;
use crate::filter::{DifficultyFilter, FilterState, RecipeView, TimeFilter};
use crate::pantry::Pantry;
use crate::shopping::{self, ShoppingItem};

pub struct Session<C: Clock = SystemClock> {
    state: AppState,
    catalog: Catalog,
    scheduler: DetectionScheduler,
    detector: Box<dyn Detector>,
    capture: ImagePayload,
    clock: C,
    delay_ms: u64,
}

impl<C: Clock> Session<C> {
    /// Fresh session on the home screen with the bundled catalog and the
    /// simulated detector.
    pub fn new(clock: C) -> Self {
        Self {
            state: AppState::default(),
            catalog: Catalog::builtin(),
            scheduler: DetectionScheduler::new(),
            detector: Box::new(SimulatedDetector::new()),
            capture: ImagePayload::default(),
            clock,
            delay_ms: DETECTION_DELAY_MS,
        }
    }

    /// Session seeded from user preferences.
    pub fn from_config(config: &Config, clock: C) -> Self {
        Self::new(clock)
            .with_detector(SimulatedDetector::with_items(
                config.detection.canned_ingredients.clone(),
            ))
            .with_delay_ms(config.detection.delay_ms)
            .with_filters(config.filters.initial())
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_detector(mut self, detector: impl Detector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.state.filters = filters;
        self
    }

    /// Image handed to the detector when the next scan fires.
    pub fn set_capture(&mut self, image: ImagePayload) {
        self.capture = image;
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn pantry(&self) -> &Pantry {
        &self.state.pantry
    }

    pub fn filters(&self) -> FilterState {
        self.state.filters
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Recipes under the current filters, split into complete/incomplete.
    pub fn view(&self) -> RecipeView<'_> {
        RecipeView::build(&self.catalog, &self.state.filters)
    }

    pub fn shopping_list(&self) -> Vec<String> {
        shopping::shopping_list(&self.catalog)
    }

    pub fn shopping_items(&self) -> Vec<ShoppingItem> {
        shopping::shopping_items(&self.catalog)
    }

    /// The expanded recipe card, if any.
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.state
            .selection
            .selected()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn pending_detections(&self) -> usize {
        self.scheduler.pending()
    }

    /// Wall-clock time at which the next scan is delivered.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            screen: self.state.screen,
            ingredients: self.state.pantry.as_slice().to_vec(),
            filters: self.state.filters,
            selected_recipe: self.state.selection.selected(),
            visible_recipes: self.view().all.len(),
            pending_detections: self.scheduler.pending(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Apply one action and run its effects.
    pub fn dispatch(&mut self, action: Action) -> Vec<Event> {
        if let Action::ToggleRecipe(id) = &action {
            if self.catalog.get(*id).is_none() {
                tracing::debug!(id, "ignored selection of unknown recipe");
                return Vec::new();
            }
        }

        let result = transition(&self.state, action);
        self.state = result.state;
        let mut events = result.events;

        for effect in result.effects {
            match effect {
                Effect::StartDetection => {
                    let now = self.clock.now_ms();
                    let handle = self.scheduler.schedule(now, self.delay_ms);
                    let due_at_ms = now.saturating_add(self.delay_ms);
                    tracing::info!(handle = handle.id(), due_at_ms, "detection scheduled");
                    events.push(Event::DetectionScheduled {
                        handle,
                        due_at_ms,
                        at: Utc::now(),
                    });
                }
            }
        }

        events
    }

    /// Deliver every scan whose delay has elapsed.
    ///
    /// Each due scan overwrites the pantry and lands on the ingredients
    /// screen, regardless of what happened in between.
    pub fn tick(&mut self) -> Vec<Event> {
        let now = self.clock.now_ms();
        let mut events = Vec::new();
        for handle in self.scheduler.poll_due(now) {
            let action = match self.detector.detect(&self.capture) {
                Ok(items) => {
                    tracing::info!(
                        handle = handle.id(),
                        count = items.len(),
                        "detection completed"
                    );
                    Action::DetectionCompleted(items)
                }
                Err(error) => {
                    tracing::warn!(handle = handle.id(), %error, "detection failed");
                    Action::DetectionFailed(error)
                }
            };
            events.extend(self.dispatch(action));
        }
        events
    }

    pub fn start_detection(&mut self) -> Vec<Event> {
        self.dispatch(Action::StartDetection)
    }

    pub fn add_manually(&mut self) -> Vec<Event> {
        self.dispatch(Action::AddManually)
    }

    pub fn back(&mut self) -> Vec<Event> {
        self.dispatch(Action::Back)
    }

    pub fn search_recipes(&mut self) -> Vec<Event> {
        self.dispatch(Action::SearchRecipes)
    }

    pub fn scan_again(&mut self) -> Vec<Event> {
        self.dispatch(Action::ScanAgain)
    }

    pub fn view_shopping_list(&mut self) -> Vec<Event> {
        self.dispatch(Action::ViewShoppingList)
    }

    pub fn add_ingredient(&mut self, name: &str) -> Vec<Event> {
        self.dispatch(Action::AddIngredient(name.to_string()))
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Vec<Event> {
        self.dispatch(Action::RemoveIngredient(index))
    }

    pub fn set_time_filter(&mut self, time: TimeFilter) -> Vec<Event> {
        self.dispatch(Action::SetTimeFilter(time))
    }

    pub fn set_difficulty_filter(&mut self, difficulty: DifficultyFilter) -> Vec<Event> {
        self.dispatch(Action::SetDifficultyFilter(difficulty))
    }

    pub fn toggle_recipe(&mut self, id: u32) -> Vec<Event> {
        self.dispatch(Action::ToggleRecipe(id))
    }
}
