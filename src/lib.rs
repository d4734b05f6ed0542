//! ARC task loading and fixed-shape normalization.
//!
//! This crate provides utilities for:
//! - Enumerating raw task files from split directories
//! - Grid validation, color encoding, and canvas padding with masks
//! - Demo-budget normalization (truncation and backfill)
//! - Eagerly assembled task collections with index access
//! - Burn-compatible batch iteration

// Module declarations
pub mod assemble;
pub mod collection;
pub mod encode;
pub mod normalize;
pub mod pad;
pub mod source;
pub mod types;

#[cfg(feature = "burn-runtime")]
pub mod batch;

// Re-export public API
pub use assemble::{assemble_task, PipelineConfig};
pub use collection::{SkippedTask, TaskCollection};
pub use encode::{decode, encode, PAD_COLOR, PALETTE};
pub use normalize::{normalize_pair_count, CanvasPair};
pub use pad::pad_grid;
pub use source::{list_tasks, SourcedTask, SplitMode};
pub use types::*;

#[cfg(feature = "burn-runtime")]
pub use batch::{BatchIter, TaskBatch};
