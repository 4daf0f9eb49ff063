use std::io::Write;

use foldmap::io::attributes_csv::{
    read_attributes_csv, read_attributes_csv_with_config, AttributesReaderConfig,
};
use foldmap::mappers::mapper_trait::Mapper;
use foldmap::mappers::relabel::RelabelMapper;

fn write_table(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

#[test]
fn test_read_default_attribute_table() {
    let _ = env_logger::builder().is_test(true).try_init();

    let file = write_table("target,chunk,partition\nX,2,2\nY,1,1\n");
    let ds = read_attributes_csv(file.path()).unwrap();
    ds.log_summary();

    assert_eq!(ds.len(), 2);
    assert_eq!(ds.targets[0], "X");
    assert_eq!(ds.chunks[0], 2);
    assert_eq!(ds.partitions[1], 1);
}

#[test]
fn test_header_lookup_is_case_insensitive() {
    let file = write_table("Target,Chunk,Partition\nX,1,2\n");
    let ds = read_attributes_csv(file.path()).unwrap();

    assert_eq!(ds.targets[0], "X");
}

#[test]
fn test_read_tab_delimited_table_with_custom_columns() {
    let config = AttributesReaderConfig {
        target_column: "label".to_string(),
        chunk_column: "run".to_string(),
        partition_column: "role".to_string(),
        delimiter: b'\t',
    };
    let file = write_table("label\trun\trole\nface\t1\t2\nhouse\t2\t1\n");

    let ds = read_attributes_csv_with_config(file.path(), &config).unwrap();

    assert_eq!(ds.len(), 2);
    assert_eq!(ds.targets[1], "house");
    assert_eq!(ds.chunks[1], 2);
}

#[test]
fn test_missing_column_is_reported_by_name() {
    let file = write_table("target,chunk\nX,1\n");
    let err = read_attributes_csv(file.path()).unwrap_err();

    assert!(err.to_string().contains("partition"));
}

#[test]
fn test_invalid_chunk_value_is_reported_with_row() {
    let file = write_table("target,chunk,partition\nX,two,2\n");
    let err = read_attributes_csv(file.path()).unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("chunk"));
    assert!(message.contains("row 1"));
}

#[test]
fn test_loaded_table_feeds_the_mapper() {
    let file = write_table("target,chunk,partition\nX,2,2\nY,1,1\n");
    let ds = read_attributes_csv(file.path()).unwrap();

    let mapper = RelabelMapper::new(vec!["B".to_string(), "A".to_string()]);
    let relabeled = mapper.forward(&ds).unwrap();

    assert_eq!(relabeled.targets[0], "A");
    assert_eq!(relabeled.targets[1], "Y");
}
