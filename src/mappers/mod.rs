pub mod chain;
pub mod relabel;

pub mod factory;
pub mod mapper_trait;
