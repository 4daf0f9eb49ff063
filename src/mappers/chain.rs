use crate::dataset::Dataset;
use crate::error::MapperError;
use crate::mappers::mapper_trait::Mapper;

/// Runs a sequence of mappers front to back, feeding each stage the
/// output of the previous one. The first failing stage aborts the chain.
pub struct ChainMapper {
    stages: Vec<Box<dyn Mapper>>,
}

impl ChainMapper {
    pub fn new(stages: Vec<Box<dyn Mapper>>) -> Self {
        ChainMapper { stages }
    }

    pub fn push(&mut self, stage: Box<dyn Mapper>) {
        self.stages.push(stage);
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Mapper for ChainMapper {
    fn forward(&self, dataset: &Dataset) -> Result<Dataset, MapperError> {
        let mut current = dataset.clone();
        for stage in &self.stages {
            log::trace!("Running mapper stage '{}'", stage.name());
            current = stage.forward(&current)?;
        }
        Ok(current)
    }

    fn name(&self) -> &str {
        "chain"
    }
}
