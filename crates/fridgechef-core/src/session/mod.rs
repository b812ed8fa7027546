//! Screen controller: which screen is showing and how actions move between
//! screens.

mod controller;
mod state;

pub use controller::Session;
pub use state::{transition, Action, AppState, Effect, Screen, Transition};
