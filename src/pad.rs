//! Embedding grids into fixed-size canvases with occupancy masks.

use crate::assemble::PipelineConfig;
use crate::encode;
use crate::types::{ArcDatasetError, Canvas, DatasetResult, FillPolicy, Grid};

/// Place `grid` at the top-left corner of a `pad_size`-square canvas and
/// build its occupancy mask.
///
/// The anchor is fixed: row 0, column 0. Cells outside the placed region
/// take the configured fill value. With color encoding the canvas is the
/// 3-channel palette image of the grid; without it, channel 0 carries the
/// raw category values and an optional second channel carries the mask.
pub fn pad_grid(grid: &Grid, cfg: &PipelineConfig) -> DatasetResult<Canvas> {
    let p = cfg.pad_size;
    if grid.height() > p || grid.width() > p {
        return Err(ArcDatasetError::Shape {
            height: grid.height(),
            width: grid.width(),
            pad_size: p,
        });
    }

    let mut mask = vec![0.0f32; p * p];
    for r in 0..grid.height() {
        for c in 0..grid.width() {
            mask[r * p + c] = 1.0;
        }
    }

    let channels = cfg.channels();
    let plane = p * p;
    let mut data = vec![0.0f32; channels * plane];

    if cfg.use_color_encoding {
        let fill = match cfg.fill {
            FillPolicy::Sentinel => encode::encode(encode::PAD_COLOR)?,
            FillPolicy::Zero => [0.0; 3],
        };
        for (ch, component) in fill.iter().enumerate() {
            data[ch * plane..(ch + 1) * plane].fill(*component);
        }
        for r in 0..grid.height() {
            for c in 0..grid.width() {
                let rgb = encode::encode(grid.get(r, c))?;
                for ch in 0..3 {
                    data[ch * plane + r * p + c] = rgb[ch];
                }
            }
        }
    } else {
        let fill = match cfg.fill {
            FillPolicy::Sentinel => f32::from(encode::PAD_COLOR),
            FillPolicy::Zero => 0.0,
        };
        data[..plane].fill(fill);
        for r in 0..grid.height() {
            for c in 0..grid.width() {
                data[r * p + c] = f32::from(grid.get(r, c));
            }
        }
        if cfg.include_mask_channel {
            data[plane..2 * plane].copy_from_slice(&mask);
        }
    }

    Ok(Canvas {
        channels,
        pad_size: p,
        data,
        mask,
    })
}
