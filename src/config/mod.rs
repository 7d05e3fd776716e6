//! Configuration module
//!
//! Path resolution for the data directory and persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
