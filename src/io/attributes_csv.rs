//! Delimited sample-attribute table reader.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;
use ndarray::Array1;

use crate::dataset::Dataset;

/// Configuration for reading sample-attribute tables.
#[derive(Debug, Clone)]
pub struct AttributesReaderConfig {
    /// Column name holding class labels.
    pub target_column: String,
    /// Column name holding 1-based chunk identifiers.
    pub chunk_column: String,
    /// Column name holding partition flags.
    pub partition_column: String,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for AttributesReaderConfig {
    fn default() -> Self {
        Self {
            target_column: "target".to_string(),
            chunk_column: "chunk".to_string(),
            partition_column: "partition".to_string(),
            delimiter: b',',
        }
    }
}

/// Read a sample-attribute table into a `Dataset`.
pub fn read_attributes_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    read_attributes_csv_with_config(path, &AttributesReaderConfig::default())
}

/// Read a sample-attribute table using a custom configuration.
pub fn read_attributes_csv_with_config<P: AsRef<Path>>(
    path: P,
    config: &AttributesReaderConfig,
) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .from_path(&path)
        .with_context(|| {
            format!(
                "Failed to open attribute table: {}",
                path.as_ref().display()
            )
        })?;

    let headers = reader
        .headers()
        .context("Failed to read attribute table header row")?
        .clone();

    let target_idx = find_column(&headers, &config.target_column)
        .ok_or_else(|| anyhow!("Missing target column '{}'", config.target_column))?;
    let chunk_idx = find_column(&headers, &config.chunk_column)
        .ok_or_else(|| anyhow!("Missing chunk column '{}'", config.chunk_column))?;
    let partition_idx = find_column(&headers, &config.partition_column)
        .ok_or_else(|| anyhow!("Missing partition column '{}'", config.partition_column))?;

    let mut targets = Vec::new();
    let mut chunks = Vec::new();
    let mut partitions = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let target = record
            .get(target_idx)
            .ok_or_else(|| anyhow!("Missing target value at row {}", row_idx + 1))?;
        targets.push(target.trim().to_string());

        chunks.push(parse_i32(&record, chunk_idx, &config.chunk_column, row_idx)?);
        partitions.push(parse_i32(
            &record,
            partition_idx,
            &config.partition_column,
            row_idx,
        )?);
    }

    let dataset = Dataset::new(
        Array1::from_vec(targets),
        Array1::from_vec(chunks),
        Array1::from_vec(partitions),
    )?;

    Ok(dataset)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}

fn parse_i32(record: &StringRecord, idx: usize, column: &str, row_idx: usize) -> Result<i32> {
    let value = record
        .get(idx)
        .ok_or_else(|| anyhow!("Missing '{}' value at row {}", column, row_idx + 1))?;
    value
        .trim()
        .parse::<i32>()
        .with_context(|| format!("Invalid '{}' value '{}' at row {}", column, value, row_idx + 1))
}
