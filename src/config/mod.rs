//! Configuration loaded from `.mppass.toml`.

pub mod settings;

pub use settings::Settings;
