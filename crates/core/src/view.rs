use crate::model::{FilterMode, Task, TaskFilter, TaskId};

/// Transient UI state kept apart from the task data: active filter, search
/// text, the task being edited (at most one), and the shared draft buffer
/// used for both new-task entry and in-place edits.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    filter: FilterMode,
    search: String,
    editing: Option<TaskId>,
    draft: String,
}

impl ViewState {
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Start editing a task, loading its current text into the draft.
    /// Any prior edit target is replaced without being saved.
    pub fn begin_edit(&mut self, task: &Task) {
        self.editing = Some(task.id);
        self.draft = task.text.clone();
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    /// Exit edit mode and clear the draft; filter and search stay put.
    /// Invoked alongside `TaskStore::clear`.
    pub fn reset(&mut self) {
        self.cancel_edit();
    }

    /// Drop the edit target if the given task was just removed.
    pub fn edit_target_removed(&mut self, id: TaskId) {
        if self.editing == Some(id) {
            self.cancel_edit();
        }
    }

    /// The projection predicate for the current filter and search.
    pub fn task_filter(&self) -> TaskFilter {
        TaskFilter {
            mode: self.filter,
            search: self.search.clone(),
        }
    }
}
