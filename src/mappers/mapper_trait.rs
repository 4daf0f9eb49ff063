use crate::dataset::Dataset;
use crate::error::MapperError;

/// A small trait abstraction for dataset transformation steps. Anything
/// implementing `forward` can be chained into a processing pipeline, so
/// mapper implementations can live next to each other in this module
/// while sharing one contract.
pub trait Mapper {
    /// Transform a dataset snapshot into a new one. The input is never
    /// mutated; implementations return an independent copy.
    fn forward(&self, dataset: &Dataset) -> Result<Dataset, MapperError>;

    /// Optional human readable name for the mapper
    fn name(&self) -> &str {
        "mapper"
    }
}
