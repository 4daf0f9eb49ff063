use ndarray::Array1;

use crate::config::{ChunkPolicy, RelabelConfig};
use crate::dataset::{Dataset, Target};
use crate::error::MapperError;
use crate::mappers::mapper_trait::Mapper;

/// Rewrites the targets of the held-out partition of a cross-validation
/// split, substituting one replacement label per fold.
///
/// The replacement is chosen from a fixed label table indexed by the
/// held-out chunk id (chunk ids are 1-based in the source data, the table
/// is 0-based). The mapper is stateless aside from that table and its
/// config, so one instance can serve every fold of a cross-validation run.
pub struct RelabelMapper {
    new_labels: Vec<Target>,
    config: RelabelConfig,
}

impl RelabelMapper {
    /// The label table is not validated here; a table shorter than the
    /// largest chunk id only fails at `forward` time.
    pub fn new(new_labels: Vec<Target>) -> Self {
        RelabelMapper {
            new_labels,
            config: RelabelConfig::default(),
        }
    }

    pub fn with_config(new_labels: Vec<Target>, config: RelabelConfig) -> Self {
        RelabelMapper { new_labels, config }
    }

    /// Resolve the chunk id of the held-out subset.
    ///
    /// `FirstSample` reads the chunk of the first held-out sample in
    /// existing order. `Strict` additionally requires every held-out
    /// sample to agree on that chunk.
    fn held_out_chunk(
        &self,
        dataset: &Dataset,
        mask: &Array1<bool>,
    ) -> Result<i32, MapperError> {
        let mut held_out = dataset
            .chunks
            .iter()
            .zip(mask.iter())
            .filter_map(|(&chunk, &selected)| if selected { Some(chunk) } else { None });

        let first = held_out.next().ok_or(MapperError::EmptyTestSelection)?;

        if self.config.chunk_policy == ChunkPolicy::Strict {
            if let Some(other) = held_out.find(|&chunk| chunk != first) {
                return Err(MapperError::MixedChunks {
                    expected: first,
                    found: other,
                });
            }
        }

        Ok(first)
    }

    fn replacement_label(&self, chunk: i32) -> Result<&Target, MapperError> {
        // chunk ids are 1-based, the table is 0-based
        let index = chunk.checked_sub(1).and_then(|i| usize::try_from(i).ok());
        index
            .and_then(|i| self.new_labels.get(i))
            .ok_or(MapperError::LabelIndexOutOfRange {
                chunk,
                table_len: self.new_labels.len(),
            })
    }
}

impl Mapper for RelabelMapper {
    fn forward(&self, dataset: &Dataset) -> Result<Dataset, MapperError> {
        let mask = dataset.partition_mask(self.config.test_partition);
        let chunk = self.held_out_chunk(dataset, &mask)?;
        let label = self.replacement_label(chunk)?.clone();

        log::debug!(
            "Relabeling held-out chunk {} to '{}' ({} of {} samples)",
            chunk,
            label,
            mask.iter().filter(|&&m| m).count(),
            dataset.len()
        );

        let mut relabeled = dataset.clone();
        relabeled.set_targets_where(&mask, &label)?;
        Ok(relabeled)
    }

    fn name(&self) -> &str {
        "relabel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn two_sample_dataset() -> Dataset {
        Dataset::new(
            Array1::from_vec(vec!["X".to_string(), "Y".to_string()]),
            Array1::from_vec(vec![2, 1]),
            Array1::from_vec(vec![2, 1]),
        )
        .unwrap()
    }

    #[test]
    fn test_relabel_held_out_sample() {
        let mapper = RelabelMapper::new(vec!["B".to_string(), "A".to_string()]);
        let dataset = two_sample_dataset();

        let relabeled = mapper.forward(&dataset).unwrap();

        // chunk 2 selects the second table entry
        assert_eq!(relabeled.targets[0], "A");
        assert_eq!(relabeled.targets[1], "Y");
    }

    #[test]
    fn test_empty_table_is_a_bounds_failure() {
        let mapper = RelabelMapper::new(Vec::new());
        let dataset = two_sample_dataset();

        let err = mapper.forward(&dataset).unwrap_err();
        assert_eq!(
            err,
            MapperError::LabelIndexOutOfRange {
                chunk: 2,
                table_len: 0
            }
        );
    }

    #[test]
    fn test_nonpositive_chunk_is_a_bounds_failure() {
        let mapper = RelabelMapper::new(vec!["A".to_string()]);
        let dataset = Dataset::new(
            Array1::from_vec(vec!["X".to_string()]),
            Array1::from_vec(vec![0]),
            Array1::from_vec(vec![2]),
        )
        .unwrap();

        let err = mapper.forward(&dataset).unwrap_err();
        assert_eq!(
            err,
            MapperError::LabelIndexOutOfRange {
                chunk: 0,
                table_len: 1
            }
        );
    }
}
