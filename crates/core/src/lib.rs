pub mod commands;
pub mod config;
pub mod model;
pub mod storage;
pub mod store;
pub mod theme;
pub mod view;

pub use commands::{clear_tasks, delete_tasks};
pub use config::AppConfig;
pub use model::*;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{TaskStore, TASKS_KEY};
pub use theme::{Theme, ThemeState, THEME_KEY};
pub use view::ViewState;
