//! Enumerating and parsing raw task files from split directories.

use crate::types::{ArcDatasetError, DatasetResult, RawTask};
use std::fs;
use std::path::{Path, PathBuf};

/// Which split directories to read under the dataset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    Training,
    Evaluation,
    /// Evaluation tasks followed by training tasks.
    Both,
}

/// One raw task record together with the file it came from, for error
/// reporting and skip accounting.
#[derive(Debug, Clone)]
pub struct SourcedTask {
    pub path: PathBuf,
    pub raw: RawTask,
}

/// Enumerate and parse every task file for the given split mode.
///
/// Files are read one at a time (open, read, close) in sorted path order so
/// enumeration is deterministic across runs.
pub fn list_tasks(root: &Path, mode: SplitMode) -> DatasetResult<Vec<SourcedTask>> {
    match mode {
        SplitMode::Training => list_split(&root.join("training")),
        SplitMode::Evaluation => list_split(&root.join("evaluation")),
        SplitMode::Both => {
            let mut tasks = list_split(&root.join("evaluation"))?;
            tasks.extend(list_split(&root.join("training"))?);
            Ok(tasks)
        }
    }
}

fn list_split(dir: &Path) -> DatasetResult<Vec<SourcedTask>> {
    let entries = fs::read_dir(dir).map_err(|e| ArcDatasetError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut tasks = Vec::with_capacity(paths.len());
    for path in paths {
        let raw_bytes = fs::read(&path).map_err(|e| ArcDatasetError::Io {
            path: path.clone(),
            source: e,
        })?;
        let raw: RawTask = serde_json::from_slice(&raw_bytes).map_err(|e| ArcDatasetError::Json {
            path: path.clone(),
            source: e,
        })?;
        tasks.push(SourcedTask { path, raw });
    }
    Ok(tasks)
}
