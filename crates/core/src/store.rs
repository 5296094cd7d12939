use std::sync::Arc;

use anyhow::{Context, Result};

use crate::model::{AddOutcome, DeleteResult, StatusUpdate, Task, TaskCounts, TaskFilter, TaskId};
use crate::storage::Storage;

/// Storage key the serialized task list lives under.
pub const TASKS_KEY: &str = "todos";

/// Ordered task list plus its persistence contract: every successful
/// mutation re-serializes the full list and writes it back.
pub struct TaskStore {
    storage: Arc<dyn Storage>,
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskStore {
    /// Restore the persisted list. An absent key is an empty list; an
    /// unreadable payload is an error for the caller to surface.
    pub fn open(storage: Arc<dyn Storage>) -> Result<Self> {
        let tasks: Vec<Task> = match storage.get(TASKS_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).context("stored task list is not valid JSON")?
            }
            None => Vec::new(),
        };
        // Ids stay monotonic across restarts: always seed past the highest
        // persisted id.
        let next_id = tasks.iter().map(|task| task.id).max().map_or(1, |id| id + 1);
        Ok(Self {
            storage,
            tasks,
            next_id,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a new pending task. Blank text is discarded without touching
    /// the list or the storage.
    pub fn add(&mut self, text: &str) -> Result<Option<AddOutcome>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let task = Task::new(self.next_id, trimmed);
        self.next_id += 1;
        let outcome = AddOutcome {
            id: task.id,
            text: task.text.clone(),
        };
        self.tasks.push(task);
        self.persist()?;
        Ok(Some(outcome))
    }

    /// Replace the text of an existing task, leaving its position and
    /// completion untouched. Blank text or an unknown id is a no-op.
    pub fn rename(&mut self, id: TaskId, text: &str) -> Result<Option<Task>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.text = trimmed.to_string();
        let updated = task.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    pub fn toggle(&mut self, id: TaskId) -> Result<StatusUpdate> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(StatusUpdate { id, changed: false });
        };
        task.completed = !task.completed;
        self.persist()?;
        Ok(StatusUpdate { id, changed: true })
    }

    pub fn remove(&mut self, id: TaskId) -> Result<DeleteResult> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(DeleteResult { id, deleted: false });
        }
        self.persist()?;
        Ok(DeleteResult { id, deleted: true })
    }

    /// Empty the whole list, returning how many tasks were dropped.
    pub fn clear(&mut self) -> Result<usize> {
        let dropped = self.tasks.len();
        self.tasks.clear();
        self.persist()?;
        Ok(dropped)
    }

    /// Pure projection of the list through a filter; insertion order is
    /// preserved and nothing is mutated.
    pub fn filtered(&self, filter: &TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> TaskCounts {
        let done = self.tasks.iter().filter(|task| task.completed).count();
        TaskCounts {
            total: self.tasks.len(),
            done,
            pending: self.tasks.len() - done,
        }
    }

    fn persist(&self) -> Result<()> {
        let payload =
            serde_json::to_string(&self.tasks).context("failed to serialize task list")?;
        self.storage.set(TASKS_KEY, &payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterMode;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn store() -> (TaskStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let store = TaskStore::open(storage.clone()).unwrap();
        (store, storage)
    }

    #[test]
    fn add_appends_pending_tasks_in_order() {
        let (mut store, _) = store();
        store.add("Buy milk").unwrap();
        store.add("Walk dog").unwrap();

        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk", "Walk dog"]);
        assert!(store.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn add_rejects_whitespace_only_text() {
        let (mut store, storage) = store();
        assert!(store.add("   ").unwrap().is_none());
        assert!(store.tasks().is_empty());
        assert!(storage.get(TASKS_KEY).unwrap().is_none());
    }

    #[test]
    fn rename_preserves_position_and_completion() {
        let (mut store, _) = store();
        let first = store.add("Buy milk").unwrap().unwrap();
        let second = store.add("Walk dog").unwrap().unwrap();
        store.toggle(first.id).unwrap();

        let updated = store.rename(first.id, "Buy oat milk").unwrap().unwrap();
        assert_eq!(updated.text, "Buy oat milk");
        assert!(updated.completed);
        assert_eq!(store.tasks()[0].id, first.id);
        assert_eq!(store.tasks()[1].id, second.id);
    }

    #[test]
    fn rename_ignores_blank_text_and_unknown_ids() {
        let (mut store, _) = store();
        let added = store.add("Buy milk").unwrap().unwrap();

        assert!(store.rename(added.id, "  ").unwrap().is_none());
        assert!(store.rename(999, "Other").unwrap().is_none());
        assert_eq!(store.tasks()[0].text, "Buy milk");
    }

    #[test]
    fn toggle_twice_restores_completion() {
        let (mut store, _) = store();
        let added = store.add("Buy milk").unwrap().unwrap();

        assert!(store.toggle(added.id).unwrap().changed);
        assert!(store.get(added.id).unwrap().completed);
        store.toggle(added.id).unwrap();
        assert!(!store.get(added.id).unwrap().completed);
    }

    #[test]
    fn remove_of_unknown_id_leaves_list_unchanged() {
        let (mut store, _) = store();
        store.add("Buy milk").unwrap();

        let result = store.remove(999).unwrap();
        assert!(!result.deleted);
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn filtered_pending_preserves_order() {
        let (mut store, _) = store();
        let a = store.add("a").unwrap().unwrap();
        let b = store.add("b").unwrap().unwrap();
        let c = store.add("c").unwrap().unwrap();
        store.toggle(b.id).unwrap();

        let pending = store.filtered(&TaskFilter::for_mode(FilterMode::Pending));
        let ids: Vec<TaskId> = pending.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn reopening_restores_an_equal_list() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = TaskStore::open(storage.clone()).unwrap();
        store.add("Buy milk").unwrap();
        let done = store.add("Walk dog").unwrap().unwrap();
        store.toggle(done.id).unwrap();
        let original = store.tasks().to_vec();

        let reopened = TaskStore::open(storage).unwrap();
        assert_eq!(reopened.tasks(), original.as_slice());
    }

    #[test]
    fn ids_stay_monotonic_across_reopen() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = TaskStore::open(storage.clone()).unwrap();
        let last = store.add("Buy milk").unwrap().unwrap();

        let mut reopened = TaskStore::open(storage).unwrap();
        let next = reopened.add("Walk dog").unwrap().unwrap();
        assert_eq!(next.id, last.id + 1);
    }

    #[test]
    fn clear_empties_every_projection() {
        let (mut store, _) = store();
        store.add("Buy milk").unwrap();
        let done = store.add("Walk dog").unwrap().unwrap();
        store.toggle(done.id).unwrap();

        assert_eq!(store.clear().unwrap(), 2);
        for mode in [FilterMode::All, FilterMode::Done, FilterMode::Pending] {
            assert!(store.filtered(&TaskFilter::for_mode(mode)).is_empty());
        }
    }

    #[test]
    fn corrupt_payload_fails_open() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TASKS_KEY, "not json").unwrap();
        assert!(TaskStore::open(storage).is_err());
    }

    #[test]
    fn counts_summarize_the_full_list() {
        let (mut store, _) = store();
        store.add("a").unwrap();
        let b = store.add("b").unwrap().unwrap();
        store.toggle(b.id).unwrap();

        let counts = store.counts();
        assert_eq!((counts.total, counts.done, counts.pending), (2, 1, 1));
    }
}
