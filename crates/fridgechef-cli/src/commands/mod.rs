pub mod config;
pub mod detect;
pub mod recipes;
pub mod session;
pub mod shopping;
