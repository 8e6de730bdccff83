mod error;
mod sink;
mod source;


pub use error::{InputError, OutputError};
pub use sink::{CsvSink, JsonSink};
pub use source::{read_records_from_path, CsvRecordSource};

use crate::partitioner::Partition;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single line of the material list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Material identifier, compared by exact string equality
    pub kind: String,
    /// Requested (or, after normalization, batch-rounded) quantity
    pub quantity: u64,
}

impl ItemRecord {
    pub fn new(kind: impl Into<String>, quantity: u64) -> Self {
        Self {
            kind: kind.into(),
            quantity,
        }
    }
}

/// One flattened output row: which task an allocation belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRow<'a> {
    /// 1-based task number in emission order
    pub group_id: u32,
    pub kind: &'a str,
    pub quantity: u64,
}

/// Producer of the ordered material list
pub trait RecordSource {
    fn read_records(&mut self) -> Result<Vec<ItemRecord>, InputError>;
}

/// Consumer of a finished partition
pub trait AssignmentSink {
    fn write_partition(&mut self, partition: &Partition) -> Result<(), OutputError>;
}

/// Output encodings understood by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Pick a format from the file extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Csv,
        }
    }
}
