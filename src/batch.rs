//! Burn tensor conversion and batch iteration over assembled tasks.

use crate::collection::TaskCollection;
use crate::types::TaskTensor;
use rand::{seq::SliceRandom, SeedableRng};

/// One batch of normalized tasks as Burn tensors.
///
/// `inputs`/`outputs` are `[batch, demo_budget, channels, pad, pad]`;
/// the mask tensors are `[batch, demo_budget, pad, pad]`.
pub struct TaskBatch<B: burn::tensor::backend::Backend> {
    pub inputs: burn::tensor::Tensor<B, 5>,
    pub outputs: burn::tensor::Tensor<B, 5>,
    pub input_masks: burn::tensor::Tensor<B, 4>,
    pub output_masks: burn::tensor::Tensor<B, 4>,
}

/// Cursor-style iteration over a [`TaskCollection`], optionally shuffled.
pub struct BatchIter<'a> {
    collection: &'a TaskCollection,
    order: Vec<usize>,
    cursor: usize,
    inputs_buf: Vec<f32>,
    outputs_buf: Vec<f32>,
    input_masks_buf: Vec<f32>,
    output_masks_buf: Vec<f32>,
}

impl<'a> BatchIter<'a> {
    pub fn new(collection: &'a TaskCollection, shuffle: bool, seed: Option<u64>) -> Self {
        let mut order: Vec<usize> = (0..collection.len()).collect();
        if shuffle {
            let mut rng = match seed {
                Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
                None => rand::rngs::StdRng::from_rng(&mut rand::rng()),
            };
            order.shuffle(&mut rng);
        }
        Self {
            collection,
            order,
            cursor: 0,
            inputs_buf: Vec::new(),
            outputs_buf: Vec::new(),
            input_masks_buf: Vec::new(),
            output_masks_buf: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Rewind to the start without reshuffling.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn next_batch<B: burn::tensor::backend::Backend>(
        &mut self,
        batch_size: usize,
        device: &B::Device,
    ) -> Option<TaskBatch<B>> {
        if self.cursor >= self.order.len() || batch_size == 0 {
            return None;
        }
        let end = (self.cursor + batch_size).min(self.order.len());
        let slice = &self.order[self.cursor..end];
        self.cursor = end;

        self.inputs_buf.clear();
        self.outputs_buf.clear();
        self.input_masks_buf.clear();
        self.output_masks_buf.clear();

        let cfg = self.collection.config();
        let (k, c, p) = (cfg.demo_budget, cfg.channels(), cfg.pad_size);
        for &idx in slice {
            let task: &TaskTensor = self
                .collection
                .get(idx)
                .expect("order indices are within collection bounds");
            for canvas in &task.inputs {
                self.inputs_buf.extend_from_slice(&canvas.data);
                self.input_masks_buf.extend_from_slice(&canvas.mask);
            }
            for canvas in &task.outputs {
                self.outputs_buf.extend_from_slice(&canvas.data);
                self.output_masks_buf.extend_from_slice(&canvas.mask);
            }
        }

        let batch_len = slice.len();
        let data_shape = [batch_len, k, c, p, p];
        let mask_shape = [batch_len, k, p, p];
        let inputs = burn::tensor::Tensor::<B, 1>::from_floats(self.inputs_buf.as_slice(), device)
            .reshape(data_shape);
        let outputs =
            burn::tensor::Tensor::<B, 1>::from_floats(self.outputs_buf.as_slice(), device)
                .reshape(data_shape);
        let input_masks =
            burn::tensor::Tensor::<B, 1>::from_floats(self.input_masks_buf.as_slice(), device)
                .reshape(mask_shape);
        let output_masks =
            burn::tensor::Tensor::<B, 1>::from_floats(self.output_masks_buf.as_slice(), device)
                .reshape(mask_shape);

        Some(TaskBatch {
            inputs,
            outputs,
            input_masks,
            output_masks,
        })
    }
}
