use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::style::{Color, Style};
use ratatui::widgets::TableState;

use super::buffer::InputBuffer;
use super::constants::*;
use crate::config::AppConfig;
use crate::model::{FilterMode, Task, TaskId};
use crate::store::TaskStore;
use crate::theme::ThemeState;
use crate::view::ViewState;

mod input;
mod render;
#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
struct FilterTab {
    label: &'static str,
    mode: FilterMode,
    description: &'static str,
}

impl FilterTab {
    fn new(label: &'static str, mode: FilterMode, description: &'static str) -> Self {
        Self {
            label,
            mode,
            description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Add,
    Edit,
    Search,
    Help,
    ConfirmClear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmChoice {
    Yes,
    No,
}

impl ConfirmChoice {
    fn toggle(self) -> Self {
        match self {
            ConfirmChoice::Yes => ConfirmChoice::No,
            ConfirmChoice::No => ConfirmChoice::Yes,
        }
    }
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Error,
}

pub(crate) struct App {
    config: AppConfig,
    store: TaskStore,
    view: ViewState,
    theme: ThemeState,
    first_run: bool,
    tabs: Vec<FilterTab>,
    tab_index: usize,
    visible: Vec<Task>,
    selected: usize,
    table_state: TableState,
    input_mode: InputMode,
    input: InputBuffer,
    search_backup: String,
    status: Option<StatusMessage>,
    confirm_choice: ConfirmChoice,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(
        config: AppConfig,
        store: TaskStore,
        theme: ThemeState,
        first_run: bool,
    ) -> Self {
        let tabs = vec![
            FilterTab::new("📋 All", FilterMode::All, "All tasks"),
            FilterTab::new("✅ Done", FilterMode::Done, "Completed tasks"),
            FilterTab::new("🕒 Pending", FilterMode::Pending, "Tasks still open"),
        ];

        let mut app = Self {
            config,
            store,
            view: ViewState::default(),
            theme,
            first_run,
            tabs,
            tab_index: 0,
            visible: Vec::new(),
            selected: 0,
            table_state: TableState::default(),
            input_mode: InputMode::Normal,
            input: InputBuffer::new(),
            search_backup: String::new(),
            status: None,
            confirm_choice: ConfirmChoice::No,
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Recompute the visible projection from the store and the view state.
    pub(crate) fn refresh(&mut self) {
        self.view.set_filter(self.tabs[self.tab_index].mode);
        self.visible = self.store.filtered(&self.view.task_filter());

        if self.first_run && !self.store.tasks().is_empty() {
            self.first_run = false;
        }

        if self.visible.is_empty() {
            self.selected = 0;
            self.table_state.select(None);
        } else {
            if self.selected >= self.visible.len() {
                self.selected = self.visible.len() - 1;
            }
            self.table_state.select(Some(self.selected));
        }
    }

    pub(crate) fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.created_at.elapsed() > Duration::from_secs(5) {
                self.status = None;
            }
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn selected_task(&self) -> Option<&Task> {
        self.visible.get(self.selected)
    }

    fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.visible.len() - 1);
        self.table_state.select(Some(self.selected));
    }

    fn select_prev(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.table_state.select(Some(self.selected));
    }

    fn select_task_by_id(&mut self, id: TaskId) {
        if let Some((idx, _)) = self
            .visible
            .iter()
            .enumerate()
            .find(|(_, task)| task.id == id)
        {
            self.selected = idx;
            self.table_state.select(Some(idx));
        }
    }

    fn next_tab(&mut self) {
        self.tab_index = (self.tab_index + 1) % self.tabs.len();
        self.refresh();
    }

    fn prev_tab(&mut self) {
        if self.tab_index == 0 {
            self.tab_index = self.tabs.len() - 1;
        } else {
            self.tab_index -= 1;
        }
        self.refresh();
    }

    fn start_add(&mut self) {
        self.input_mode = InputMode::Add;
        self.input.clear();
        self.view.set_draft("");
        self.set_status_info(STATUS_ENTER_ADD);
    }

    fn start_edit_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            self.set_status_info("Nothing to edit");
            return;
        };
        self.view.begin_edit(&task);
        self.input.set(self.view.draft());
        self.input_mode = InputMode::Edit;
        self.set_status_info(STATUS_ENTER_EDIT);
    }

    /// Shared submit path for the draft buffer: saves the edit target when
    /// one is set, otherwise adds a new task. Blank text changes nothing.
    fn submit_input(&mut self) -> Result<()> {
        if self.input.is_blank() {
            self.set_status_error("Enter some text before saving");
            return Ok(());
        }
        let text = self.input.as_str().trim().to_string();

        let focus = if let Some(id) = self.view.editing() {
            match self.store.rename(id, &text)? {
                Some(task) => {
                    self.set_status_info(format!("Updated task: {}", task.text));
                    Some(id)
                }
                None => {
                    self.set_status_error("Task not found");
                    None
                }
            }
        } else {
            let outcome = self.store.add(&text)?;
            match outcome {
                Some(outcome) => {
                    self.set_status_info(format!("Added task: {}", outcome.text));
                    Some(outcome.id)
                }
                None => None,
            }
        };

        self.view.cancel_edit();
        self.input.clear();
        self.input_mode = InputMode::Normal;
        self.refresh();
        if let Some(id) = focus {
            self.select_task_by_id(id);
        }
        Ok(())
    }

    fn cancel_input(&mut self) {
        self.view.cancel_edit();
        self.input.clear();
        self.input_mode = InputMode::Normal;
        self.status = None;
    }

    fn toggle_selected(&mut self) -> Result<()> {
        let Some(task) = self.selected_task() else {
            self.set_status_info("Nothing to toggle");
            return Ok(());
        };
        let id = task.id;
        let update = self.store.toggle(id)?;
        if update.changed {
            match self.store.get(id) {
                Some(task) if task.completed => self.set_status_info("Marked task as done ✅"),
                Some(_) => self.set_status_info("Marked task as pending 🕒"),
                None => {}
            }
        }
        self.refresh();
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<()> {
        let Some(task) = self.selected_task() else {
            self.set_status_info("Nothing to delete");
            return Ok(());
        };
        let id = task.id;
        let result = self.store.remove(id)?;
        if result.deleted {
            self.view.edit_target_removed(id);
            self.set_status_info("Deleted task 🗑️");
        } else {
            self.set_status_info("Task not found");
        }
        self.refresh();
        Ok(())
    }

    fn start_search(&mut self) {
        self.search_backup = self.view.search().to_string();
        self.input.set(self.view.search());
        self.input_mode = InputMode::Search;
        self.set_status_info(STATUS_ENTER_SEARCH);
    }

    fn sync_search(&mut self) {
        self.view.set_search(self.input.as_str());
        self.refresh();
    }

    fn commit_search(&mut self) {
        self.input_mode = InputMode::Normal;
        let search = self.view.search();
        let status = if search.is_empty() {
            String::from("Search cleared")
        } else {
            format!("Searching for '{}'", search)
        };
        self.set_status_info(status);
    }

    fn cancel_search(&mut self) {
        self.view.set_search(self.search_backup.clone());
        self.input.clear();
        self.input_mode = InputMode::Normal;
        self.status = None;
        self.refresh();
    }

    fn prompt_clear(&mut self) {
        if self.store.tasks().is_empty() {
            self.set_status_info("Nothing to clear");
            return;
        }
        self.confirm_choice = ConfirmChoice::No;
        self.input_mode = InputMode::ConfirmClear;
        self.set_status_info(STATUS_CONFIRM_CLEAR);
    }

    fn perform_clear(&mut self) -> Result<()> {
        let dropped = self.store.clear()?;
        self.view.reset();
        self.input.clear();
        self.set_status_info(format!(
            "Cleared {} task{}",
            dropped,
            if dropped == 1 { "" } else { "s" }
        ));
        self.refresh();
        Ok(())
    }

    fn toggle_theme(&mut self) -> Result<()> {
        let theme = self.theme.toggle()?;
        self.set_status_info(format!("Switched to {} mode", theme));
        Ok(())
    }

    fn show_help_overlay(&mut self) {
        self.input_mode = InputMode::Help;
        self.set_status_info(STATUS_HELP);
    }

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("ℹ️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Info));
    }

    pub(crate) fn set_status_error<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("⚠️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Error));
    }
}
