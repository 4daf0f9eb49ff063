//! Row-aligned sample-attribute storage.
//!
//! This module defines `Dataset`, the typed record of per-sample
//! attributes (`targets`, `chunks`, `partitions`) consumed by the mappers,
//! with helpers for boolean-mask selection and masked attribute updates.
use std::collections::HashSet;

use ndarray::Array1;

use crate::error::MapperError;

/// Class label attached to a sample.
pub type Target = String;

/// A collection of samples described only by their per-sample attributes.
///
/// All three attribute vectors are row-aligned: index `i` in each refers
/// to the same sample. `chunks` holds 1-based fold/group identifiers;
/// `partitions` holds the role flags assigned by an external
/// partitioning step for the current cross-validation split.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub targets: Array1<Target>,
    pub chunks: Array1<i32>,
    pub partitions: Array1<i32>,
}

impl Dataset {
    /// Build a dataset from its attribute vectors, rejecting misaligned
    /// lengths.
    pub fn new(
        targets: Array1<Target>,
        chunks: Array1<i32>,
        partitions: Array1<i32>,
    ) -> Result<Self, MapperError> {
        let n_samples = targets.len();
        if chunks.len() != n_samples {
            return Err(MapperError::LengthMismatch {
                field: "chunks",
                expected: n_samples,
                found: chunks.len(),
            });
        }
        if partitions.len() != n_samples {
            return Err(MapperError::LengthMismatch {
                field: "partitions",
                expected: n_samples,
                found: partitions.len(),
            });
        }
        Ok(Dataset {
            targets,
            chunks,
            partitions,
        })
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Boolean mask of samples whose partition flag equals `flag`.
    pub fn partition_mask(&self, flag: i32) -> Array1<bool> {
        self.partitions.mapv(|p| p == flag)
    }

    /// Filter the dataset by applying a boolean mask to all row-aligned
    /// attributes.
    ///
    /// # Arguments
    ///
    /// * `mask` - A boolean mask (`Array1<bool>`) of the same length as the
    ///   number of samples
    ///
    /// # Returns
    ///
    /// A new `Dataset` instance with only rows where `mask[i] == true`
    pub fn filter(&self, mask: &Array1<bool>) -> Dataset {
        let selected_indices: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| if m { Some(i) } else { None })
            .collect();

        Dataset {
            targets: selected_indices
                .iter()
                .map(|&i| self.targets[i].clone())
                .collect(),
            chunks: selected_indices.iter().map(|&i| self.chunks[i]).collect(),
            partitions: selected_indices
                .iter()
                .map(|&i| self.partitions[i])
                .collect(),
        }
    }

    /// Overwrite `targets` with one label everywhere the mask is true.
    pub fn set_targets_where(
        &mut self,
        mask: &Array1<bool>,
        label: &Target,
    ) -> Result<(), MapperError> {
        if mask.len() != self.len() {
            return Err(MapperError::LengthMismatch {
                field: "mask",
                expected: self.len(),
                found: mask.len(),
            });
        }
        for (target, &selected) in self.targets.iter_mut().zip(mask.iter()) {
            if selected {
                *target = label.clone();
            }
        }
        Ok(())
    }

    /// Replace the partition attribute wholesale. This is the bookkeeping
    /// hook an external partitioning driver writes through between folds.
    pub fn set_partitions(&mut self, partitions: Array1<i32>) -> Result<(), MapperError> {
        if partitions.len() != self.len() {
            return Err(MapperError::LengthMismatch {
                field: "partitions",
                expected: self.len(),
                found: partitions.len(),
            });
        }
        self.partitions = partitions;
        Ok(())
    }

    pub fn log_summary(&self) {
        let chunk_ids: HashSet<i32> = self.chunks.iter().copied().collect();
        log::debug!(
            "Dataset with {} samples across {} chunks ({} distinct partition flags)",
            self.len(),
            chunk_ids.len(),
            self.partitions
                .iter()
                .copied()
                .collect::<HashSet<i32>>()
                .len()
        );
    }
}
