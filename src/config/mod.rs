//! Configuration loading for PassKeep.

pub mod settings;

pub use settings::{home_dir, Settings};
