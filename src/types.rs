//! Core types, error definitions, and data structures for arc_dataset.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub type DatasetResult<T> = Result<T, ArcDatasetError>;

#[derive(Debug, Error)]
pub enum ArcDatasetError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json parse error at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed task: {msg}")]
    MalformedTask { msg: String },
    #[error("grid {height}x{width} exceeds pad size {pad_size}")]
    Shape {
        height: usize,
        width: usize,
        pad_size: usize,
    },
    #[error("category value {value} outside encoder domain [0, 10]")]
    Encoding { value: u8 },
    #[error("normalization failed: {msg}")]
    Normalization { msg: String },
    #[error("invalid pipeline config: {msg}")]
    Config { msg: String },
    #[error("task {path} failed to assemble: {source}")]
    Assemble {
        path: PathBuf,
        #[source]
        source: Box<ArcDatasetError>,
    },
}

/// A validated rectangular grid of puzzle colors, row-major.
///
/// Every cell is in `[0, 9]`; the pad sentinel never appears in a `Grid`,
/// only in canvases produced by padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub const MAX_COLOR: u8 = 9;

    /// Validate and convert raw nested rows into a `Grid`.
    ///
    /// Fails on empty grids, ragged rows, and cell values outside `[0, 9]`.
    pub fn from_rows(rows: &[Vec<i64>]) -> DatasetResult<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ArcDatasetError::MalformedTask {
                msg: "empty grid".to_string(),
            });
        }
        let width = rows[0].len();
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ArcDatasetError::MalformedTask {
                    msg: format!(
                        "non-rectangular grid: row {r} has {} cells, expected {width}",
                        row.len()
                    ),
                });
            }
            for &v in row {
                if !(0..=i64::from(Self::MAX_COLOR)).contains(&v) {
                    return Err(ArcDatasetError::MalformedTask {
                        msg: format!("cell value {v} outside [0, 9]"),
                    });
                }
                cells.push(v as u8);
            }
        }
        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.width + col]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// One grid embedded in a fixed-size padded canvas, plus its occupancy mask.
///
/// `data` is CHW, length `channels * pad_size * pad_size`. `mask` is
/// `pad_size * pad_size`, 1.0 inside the source region and 0.0 outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub channels: usize,
    pub pad_size: usize,
    pub data: Vec<f32>,
    pub mask: Vec<f32>,
}

impl Canvas {
    /// An all-pad canvas: zero data, zero mask.
    pub fn zeros(channels: usize, pad_size: usize) -> Self {
        Self {
            channels,
            pad_size,
            data: vec![0.0; channels * pad_size * pad_size],
            mask: vec![0.0; pad_size * pad_size],
        }
    }

    pub fn get(&self, channel: usize, row: usize, col: usize) -> f32 {
        self.data[(channel * self.pad_size + row) * self.pad_size + col]
    }

    pub fn mask_at(&self, row: usize, col: usize) -> f32 {
        self.mask[row * self.pad_size + col]
    }
}

/// One raw input/output pair as found on disk, unvalidated.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPair {
    pub input: Vec<Vec<i64>>,
    pub output: Vec<Vec<i64>>,
}

/// One raw task file: demonstration pairs under `train`, held-out pairs
/// under `test`. Field names match the on-disk ARC JSON schema.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    pub train: Vec<RawPair>,
    pub test: Vec<RawPair>,
}

/// A task normalized to the demo budget: parallel input and output canvas
/// sequences of identical length. Every task in a collection uses this
/// representation.
#[derive(Debug, Clone)]
pub struct TaskTensor {
    pub inputs: Vec<Canvas>,
    pub outputs: Vec<Canvas>,
}

impl TaskTensor {
    /// Number of pairs, always equal to the configured demo budget.
    pub fn pair_count(&self) -> usize {
        self.inputs.len()
    }
}

/// What value fills canvas cells outside the placed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPolicy {
    /// Pad with the sentinel color 10 (encoded: the palette's mask color).
    Sentinel,
    /// Pad with 0.0 in every channel.
    Zero,
}

/// How tasks with fewer pairs than the demo budget are brought up to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackfillPolicy {
    /// Repeat existing pairs cyclically starting from the first.
    CycleExisting,
    /// Append all-pad (zero canvas, zero mask) filler pairs.
    ZeroPairs,
}

/// What collection construction does with a task that fails to assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Abort construction on the first bad task.
    FailFast,
    /// Skip bad tasks, warn, and record them on the collection.
    SkipAndReport,
}

impl LoadPolicy {
    pub fn from_env() -> Self {
        match std::env::var("ARC_DATASET_PERMISSIVE")
            .ok()
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            Some("1") | Some("true") | Some("on") => LoadPolicy::SkipAndReport,
            _ => LoadPolicy::FailFast,
        }
    }
}
