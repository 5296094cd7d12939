use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(200);

pub(crate) const STATUS_ENTER_ADD: &str = "Type a task • Enter to add • Esc to cancel";
pub(crate) const STATUS_ENTER_EDIT: &str = "Edit the task text • Enter to save • Esc to cancel";
pub(crate) const STATUS_ENTER_SEARCH: &str =
    "Search as you type • Enter keeps the search • Esc restores the previous one";
pub(crate) const STATUS_HELP: &str = "Keyboard reference — Enter/Esc to close";
pub(crate) const STATUS_CONFIRM_CLEAR: &str =
    "Confirm clearing the list — arrows choose, Enter confirms, Esc cancels";
