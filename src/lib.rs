// Public API exports
pub mod config;
pub mod error;
pub mod logging;
pub mod normalizer;
pub mod partitioner;
pub mod records;
pub mod report;

// Re-export main types for convenience
pub use config::{ConfigError, SlicerConfig, SplitPolicy};

pub use error::SliceError;

pub use records::{
    read_records_from_path, AssignmentRow, AssignmentSink, CsvRecordSource, CsvSink, InputError,
    ItemRecord, JsonSink, OutputError, OutputFormat, RecordSource,
};

pub use normalizer::{normalize_quantity, normalize_records, NormalizeError};

pub use partitioner::{partition_items, GroupEntry, Partition, PartitionError, TaskGroup};

pub use report::{hash_file, PartitionReport, RunManifest, RunStats};

/// Full pipeline: round every record to a batch size, then slice into tasks
pub fn slice_records(
    records: &[ItemRecord],
    config: &SlicerConfig,
) -> Result<Partition, SliceError> {
    let normalized = normalize_records(records)?;
    Ok(partition_items(&normalized, config)?)
}
