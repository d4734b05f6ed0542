//! Categorical color encoding.

use crate::types::{ArcDatasetError, DatasetResult};

/// Sentinel color marking padded cells. Only appears after padding, never in
/// raw grids.
pub const PAD_COLOR: u8 = 10;

/// RGB triples for the ten puzzle colors plus the pad sentinel.
///
/// This table is the single source of truth for encoding; every call site
/// goes through [`encode`] so canvases stay comparable.
pub const PALETTE: [[f32; 3]; 11] = [
    [0.0, 0.0, 0.0], // 0 black
    [0.0, 0.0, 1.0], // 1 blue
    [1.0, 0.0, 0.0], // 2 red
    [0.0, 1.0, 0.0], // 3 green
    [1.0, 1.0, 0.0], // 4 yellow
    [0.7, 0.6, 0.5], // 5 grey
    [1.0, 0.0, 1.0], // 6 magenta
    [0.5, 0.5, 0.1], // 7 orange
    [0.0, 1.0, 1.0], // 8 cyan
    [0.5, 0.1, 0.1], // 9 maroon
    [1.0, 1.0, 1.0], // 10 pad
];

/// Encode a category value as its palette triple.
///
/// Total over `[0, 10]`; anything else fails with an encoding error.
pub fn encode(value: u8) -> DatasetResult<[f32; 3]> {
    PALETTE
        .get(usize::from(value))
        .copied()
        .ok_or(ArcDatasetError::Encoding { value })
}

/// Inverse of [`encode`]: the palette index nearest to `rgb` by squared
/// distance. Exact on any triple produced by [`encode`].
pub fn decode(rgb: [f32; 3]) -> u8 {
    let mut best = 0u8;
    let mut best_dist = f32::INFINITY;
    for (i, entry) in PALETTE.iter().enumerate() {
        let dist = entry
            .iter()
            .zip(rgb.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f32>();
        if dist < best_dist {
            best_dist = dist;
            best = i as u8;
        }
    }
    best
}

#[cfg(test)]
mod encode_tests {
    use super::{decode, encode, PAD_COLOR, PALETTE};
    use crate::types::ArcDatasetError;

    #[test]
    fn encoding_is_total_over_domain_and_stable() {
        for v in 0..=PAD_COLOR {
            let first = encode(v).unwrap();
            let second = encode(v).unwrap();
            assert_eq!(first, second);
            assert_eq!(first, PALETTE[usize::from(v)]);
        }
    }

    #[test]
    fn encoding_fails_outside_domain() {
        for v in [11u8, 42, u8::MAX] {
            match encode(v) {
                Err(ArcDatasetError::Encoding { value }) => assert_eq!(value, v),
                other => panic!("expected encoding error for {v}, got {other:?}"),
            }
        }
    }

    #[test]
    fn decode_inverts_encode() {
        for v in 0..=PAD_COLOR {
            assert_eq!(decode(encode(v).unwrap()), v);
        }
    }
}
