pub use taskpad_tui::cli;
pub use taskpad_tui::commands;
pub use taskpad_tui::config;
pub use taskpad_tui::tui;
pub use taskpad_tui::AppConfig;

pub use taskpad_core as core;
pub use taskpad_core::model;
pub use taskpad_core::storage;
pub use taskpad_core::store;
pub use taskpad_core::theme;
pub use taskpad_core::view;
