use crate::config::RelabelConfig;
use crate::dataset::Target;
use crate::mappers::mapper_trait::Mapper;
use crate::mappers::relabel::RelabelMapper;

/// Build a boxed relabel mapper from a `RelabelConfig`.
/// Currently this is a thin factory implemented as a single function.
pub fn build_relabel_mapper(config: RelabelConfig, new_labels: Vec<Target>) -> Box<dyn Mapper> {
    Box::new(RelabelMapper::with_config(new_labels, config))
}
