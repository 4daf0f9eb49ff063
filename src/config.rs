use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for relabeling mappers.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RelabelConfig {
    /// Partition flag marking a sample as held-out/testing.
    pub test_partition: i32,

    pub chunk_policy: ChunkPolicy,
}

/// How the held-out chunk id is resolved when a fold is relabeled.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChunkPolicy {
    /// Take the chunk of the first held-out sample in existing order,
    /// without verifying that the remaining held-out samples agree.
    FirstSample,
    /// Require all held-out samples to share one chunk id and fail
    /// otherwise.
    Strict,
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        ChunkPolicy::FirstSample
    }
}

impl FromStr for ChunkPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "first_sample" => Ok(ChunkPolicy::FirstSample),
            "strict" => Ok(ChunkPolicy::Strict),
            _ => Err(format!(
                "Unknown chunk policy: {}. Expected 'first' or 'strict'",
                s
            )),
        }
    }
}

impl RelabelConfig {
    pub fn new(test_partition: i32, chunk_policy: ChunkPolicy) -> Self {
        Self {
            test_partition,
            chunk_policy,
        }
    }
}

impl Default for RelabelConfig {
    fn default() -> Self {
        Self {
            test_partition: 2,
            chunk_policy: ChunkPolicy::FirstSample,
        }
    }
}
