//! # Fridgechef Core Library
//!
//! This library provides the core logic for Fridgechef, a recipe assistant
//! that "photographs" a fridge, lets the user edit the detected ingredients,
//! and suggests recipes from a bundled catalog. The CLI binary is a thin
//! front-end over the same library.
//!
//! ## Architecture
//!
//! - **Session**: A screen state machine (home, scanning, ingredients,
//!   recipes, shopping) driven by actions; the caller invokes `tick()` to
//!   deliver pending scans
//! - **Detection**: A simulated recognizer behind a `Detector` trait, with an
//!   injectable clock so delays can be tested without sleeping
//! - **Catalog / Filter / Shopping**: Pure functions over a static recipe list
//! - **Config**: TOML-based preferences
//!
//! ## Key Components
//!
//! - [`Session`]: Screen controller
//! - [`Pantry`]: The user's ingredient list
//! - [`Catalog`]: Bundled recipes
//! - [`RecipeView`]: Filtered recipes split into complete/incomplete
//! - [`Config`]: Application configuration management

pub mod catalog;
pub mod config;
pub mod detection;
pub mod error;
pub mod events;
pub mod filter;
pub mod pantry;
pub mod session;
pub mod shopping;

pub use catalog::{Catalog, Difficulty, Recipe};
pub use config::Config;
pub use detection::{
    Clock, DetectionHandle, DetectionScheduler, Detector, ImagePayload, ManualClock,
    SimulatedDetector, SystemClock, CANNED_INGREDIENTS, DETECTION_DELAY_MS,
};
pub use error::{ConfigError, CoreError, DetectionError, Result, ValidationError};
pub use events::Event;
pub use filter::{
    filter_recipes, DifficultyFilter, FilterState, RecipeTab, RecipeView, SelectionState,
    TimeFilter,
};
pub use pantry::Pantry;
pub use session::{transition, Action, AppState, Effect, Screen, Session, Transition};
pub use shopping::{shopping_items, shopping_list, ShoppingItem};
