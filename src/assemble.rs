//! End-to-end task assembly: raw record to normalized task tensor.

use crate::normalize::{normalize_pair_count, CanvasPair};
use crate::pad::pad_grid;
use crate::types::{
    ArcDatasetError, BackfillPolicy, DatasetResult, FillPolicy, Grid, RawTask, TaskTensor,
};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Fixed pair count every task is normalized to.
    pub demo_budget: usize,
    /// Canvas side length; every grid must fit within it.
    pub pad_size: usize,
    /// Encode cells as 3-channel palette colors instead of raw values.
    pub use_color_encoding: bool,
    /// Append the occupancy mask as an extra channel (raw canvases only).
    pub include_mask_channel: bool,
    pub fill: FillPolicy,
    pub backfill: BackfillPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            demo_budget: 6,
            pad_size: 30,
            use_color_encoding: true,
            include_mask_channel: false,
            fill: FillPolicy::Sentinel,
            backfill: BackfillPolicy::CycleExisting,
        }
    }
}

impl PipelineConfig {
    /// Channel count of every canvas this config produces.
    pub fn channels(&self) -> usize {
        if self.use_color_encoding {
            3
        } else if self.include_mask_channel {
            2
        } else {
            1
        }
    }

    pub fn validate(&self) -> DatasetResult<()> {
        if self.demo_budget == 0 {
            return Err(ArcDatasetError::Config {
                msg: "demo_budget must be at least 1".to_string(),
            });
        }
        if self.pad_size == 0 {
            return Err(ArcDatasetError::Config {
                msg: "pad_size must be at least 1".to_string(),
            });
        }
        if self.use_color_encoding && self.include_mask_channel {
            return Err(ArcDatasetError::Config {
                msg: "mask channel is only available without color encoding".to_string(),
            });
        }
        Ok(())
    }
}

/// Assemble one raw task into a normalized tensor.
///
/// Demonstration pairs are concatenated ahead of held-out pairs, every grid
/// is validated and padded (encoded when configured), the pair count is
/// normalized to the demo budget, and the result is split into parallel
/// input/output sequences. Truncation operates on the concatenated sequence,
/// so held-out pairs are dropped first when the budget falls inside the
/// demonstration range.
pub fn assemble_task(raw: &RawTask, cfg: &PipelineConfig) -> DatasetResult<TaskTensor> {
    cfg.validate()?;
    if raw.train.is_empty() {
        return Err(ArcDatasetError::MalformedTask {
            msg: "task has no demonstration pairs".to_string(),
        });
    }
    if raw.test.is_empty() {
        return Err(ArcDatasetError::MalformedTask {
            msg: "task has no held-out pairs".to_string(),
        });
    }

    let mut padded: Vec<CanvasPair> = Vec::with_capacity(raw.train.len() + raw.test.len());
    for pair in raw.train.iter().chain(raw.test.iter()) {
        let input = Grid::from_rows(&pair.input)?;
        let output = Grid::from_rows(&pair.output)?;
        padded.push((pad_grid(&input, cfg)?, pad_grid(&output, cfg)?));
    }

    let normalized = normalize_pair_count(padded, cfg)?;
    let (inputs, outputs) = normalized.into_iter().unzip();
    Ok(TaskTensor { inputs, outputs })
}
