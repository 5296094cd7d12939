use anyhow::Result;

use crate::config::AppConfig;
use crate::model::{DeleteResult, TaskId};
use crate::store::TaskStore;

/// Delete the tasks with the provided ids and return per-id results.
pub fn delete_tasks(config: &AppConfig, ids: &[TaskId]) -> Result<Vec<DeleteResult>> {
    let mut store = TaskStore::open(config.open_storage())?;
    ids.iter().map(|id| store.remove(*id)).collect()
}

/// Remove every task, returning how many were dropped.
pub fn clear_tasks(config: &AppConfig) -> Result<usize> {
    let mut store = TaskStore::open(config.open_storage())?;
    store.clear()
}
