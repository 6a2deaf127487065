//! JSON document loaders.

use crate::dataset::{DatasetError, DatasetResult};
use crate::model::backlog::BacklogItem;
use crate::model::sprint::SprintTask;
use log::debug;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Loads the backlog table from a JSON array document.
pub fn load_backlog(path: impl AsRef<Path>) -> DatasetResult<Vec<BacklogItem>> {
    let items: Vec<BacklogItem> = load_array(path.as_ref())?;
    debug!(
        "event=dataset_loaded module=dataset kind=backlog path={} rows={}",
        path.as_ref().display(),
        items.len()
    );
    Ok(items)
}

/// Loads one sprint table from a JSON array document.
pub fn load_sprint(path: impl AsRef<Path>) -> DatasetResult<Vec<SprintTask>> {
    let tasks: Vec<SprintTask> = load_array(path.as_ref())?;
    debug!(
        "event=dataset_loaded module=dataset kind=sprint path={} rows={}",
        path.as_ref().display(),
        tasks.len()
    );
    Ok(tasks)
}

/// Loads and concatenates several sprint tables in argument order.
///
/// Used when validating the whole project history against the backlog, whose
/// totals span every sprint.
pub fn load_sprints<P: AsRef<Path>>(paths: &[P]) -> DatasetResult<Vec<SprintTask>> {
    let mut all = Vec::new();
    for path in paths {
        all.extend(load_sprint(path)?);
    }
    Ok(all)
}

fn load_array<T: DeserializeOwned>(path: &Path) -> DatasetResult<Vec<T>> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
