use super::{AssignmentSink, OutputError};
use crate::partitioner::Partition;
use crate::report::{PartitionReport, RunManifest};
use std::io::Write;

/// Flat `Task,Item,Quantity` table, one row per task entry
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(output: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(output),
        }
    }
}

impl<W: Write> AssignmentSink for CsvSink<W> {
    fn write_partition(&mut self, partition: &Partition) -> Result<(), OutputError> {
        self.writer.write_record(["Task", "Item", "Quantity"])?;
        for row in partition.rows() {
            self.writer.write_record([
                row.group_id.to_string(),
                row.kind.to_string(),
                row.quantity.to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Pretty-printed JSON report carrying the run manifest and nested groups
pub struct JsonSink<W: Write> {
    writer: W,
    manifest: RunManifest,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W, manifest: RunManifest) -> Self {
        Self { writer, manifest }
    }
}

impl<W: Write> AssignmentSink for JsonSink<W> {
    fn write_partition(&mut self, partition: &Partition) -> Result<(), OutputError> {
        let report = PartitionReport::new(self.manifest.clone(), partition);
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
