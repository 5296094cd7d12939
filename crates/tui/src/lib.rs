pub mod cli;
pub mod commands;
pub mod config;
pub mod tui;

pub use taskpad_core as core;
pub use taskpad_core::model;
pub use taskpad_core::storage;
pub use taskpad_core::store;
pub use taskpad_core::theme;
pub use taskpad_core::view;

pub use taskpad_core::AppConfig;
