//! Pair-count normalization against the demo budget.

use crate::assemble::PipelineConfig;
use crate::types::{ArcDatasetError, BackfillPolicy, Canvas, DatasetResult};

/// One padded (input, output) pair.
pub type CanvasPair = (Canvas, Canvas);

/// Force `pairs` to exactly `cfg.demo_budget` entries.
///
/// Longer sequences are truncated to the first `demo_budget` pairs in order.
/// Shorter sequences are backfilled per the configured policy: either by
/// cyclically repeating existing pairs from the first, or by appending
/// all-pad filler pairs. An empty sequence cannot be backfilled and fails.
pub fn normalize_pair_count(
    pairs: Vec<CanvasPair>,
    cfg: &PipelineConfig,
) -> DatasetResult<Vec<CanvasPair>> {
    if pairs.is_empty() {
        return Err(ArcDatasetError::Normalization {
            msg: "cannot backfill an empty pair sequence".to_string(),
        });
    }
    let budget = cfg.demo_budget;
    let mut out = pairs;
    if out.len() >= budget {
        out.truncate(budget);
        return Ok(out);
    }
    match cfg.backfill {
        BackfillPolicy::CycleExisting => {
            let original = out.len();
            for i in 0..budget - original {
                out.push(out[i % original].clone());
            }
        }
        BackfillPolicy::ZeroPairs => {
            let filler = (
                Canvas::zeros(cfg.channels(), cfg.pad_size),
                Canvas::zeros(cfg.channels(), cfg.pad_size),
            );
            while out.len() < budget {
                out.push(filler.clone());
            }
        }
    }
    Ok(out)
}
