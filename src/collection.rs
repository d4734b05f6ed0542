//! Eagerly assembled, index-addressable collection of normalized tasks.

use crate::assemble::{assemble_task, PipelineConfig};
use crate::source::{list_tasks, SourcedTask, SplitMode};
use crate::types::{ArcDatasetError, DatasetResult, LoadPolicy, TaskTensor};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// A task that failed to assemble under [`LoadPolicy::SkipAndReport`].
#[derive(Debug, Clone)]
pub struct SkippedTask {
    pub path: PathBuf,
    pub reason: String,
}

/// Every task assembled once at construction and held immutably for random
/// access by index.
#[derive(Debug)]
pub struct TaskCollection {
    tasks: Vec<TaskTensor>,
    skipped: Vec<SkippedTask>,
    config: PipelineConfig,
}

impl TaskCollection {
    /// Read every task under `root` for the given split and assemble it
    /// eagerly. Under `FailFast` the first bad task aborts construction with
    /// the offending path; under `SkipAndReport` bad tasks are warned about
    /// and recorded on the collection.
    pub fn load(
        root: &Path,
        mode: SplitMode,
        config: PipelineConfig,
        policy: LoadPolicy,
    ) -> DatasetResult<Self> {
        let sourced = list_tasks(root, mode)?;
        Self::from_tasks(sourced, config, policy)
    }

    /// Assemble already-sourced tasks; lets tests bypass the filesystem.
    pub fn from_tasks(
        sourced: Vec<SourcedTask>,
        config: PipelineConfig,
        policy: LoadPolicy,
    ) -> DatasetResult<Self> {
        config.validate()?;

        // Tasks are independent, so assembly is parallel; collect preserves
        // source-enumeration order.
        let assembled: Vec<(PathBuf, DatasetResult<TaskTensor>)> = sourced
            .par_iter()
            .map(|task| (task.path.clone(), assemble_task(&task.raw, &config)))
            .collect();

        let mut tasks = Vec::with_capacity(assembled.len());
        let mut skipped = Vec::new();
        for (path, result) in assembled {
            match result {
                Ok(task) => tasks.push(task),
                Err(e) => match policy {
                    LoadPolicy::FailFast => {
                        return Err(ArcDatasetError::Assemble {
                            path,
                            source: Box::new(e),
                        });
                    }
                    LoadPolicy::SkipAndReport => {
                        eprintln!("Warning: skipping task {}: {e}", path.display());
                        skipped.push(SkippedTask {
                            path,
                            reason: e.to_string(),
                        });
                    }
                },
            }
        }

        if !skipped.is_empty() {
            eprintln!(
                "[dataset] assembled={} skipped={}",
                tasks.len(),
                skipped.len()
            );
        }

        Ok(Self {
            tasks,
            skipped,
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&TaskTensor> {
        self.tasks.get(idx)
    }

    pub fn tasks(&self) -> &[TaskTensor] {
        &self.tasks
    }

    pub fn skipped(&self) -> &[SkippedTask] {
        &self.skipped
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
