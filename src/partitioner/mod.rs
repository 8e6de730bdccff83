mod error;
mod packer;


pub use error::PartitionError;

use crate::config::SlicerConfig;
use crate::records::{AssignmentRow, ItemRecord};
use packer::Packer;
use serde::Serialize;
use tracing::debug;

/// One allocation inside a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupEntry {
    pub kind: String,
    pub quantity: u64,
    /// Position of the originating record in the input list
    pub item_index: usize,
}

/// A closed task: an ordered bundle of allocations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskGroup {
    /// 1-based emission number
    pub id: u32,
    pub entries: Vec<GroupEntry>,
    /// Accumulated weight tracked by the scan when the task was closed
    pub weight: u64,
}

impl TaskGroup {
    /// Full weighted cost: `quantity * coefficient` per entry plus one
    /// `type_overhead` per entry. Saturates at `u64::MAX`.
    pub fn weighted_load(&self, config: &SlicerConfig) -> u64 {
        self.entries
            .iter()
            .map(|e| {
                e.quantity
                    .saturating_mul(config.coefficient_for(&e.kind))
                    .saturating_add(config.type_overhead)
            })
            .fold(0, u64::saturating_add)
    }

    pub fn total_quantity(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| e.quantity)
            .fold(0, u64::saturating_add)
    }
}

/// Ordered tasks produced by one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub groups: Vec<TaskGroup>,
}

impl Partition {
    /// Flatten into `(group_id, kind, quantity)` rows in emission order
    pub fn rows(&self) -> impl Iterator<Item = AssignmentRow<'_>> {
        self.groups.iter().flat_map(|g| {
            g.entries.iter().map(move |e| AssignmentRow {
                group_id: g.id,
                kind: &e.kind,
                quantity: e.quantity,
            })
        })
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn total_quantity(&self) -> u64 {
        self.groups
            .iter()
            .map(TaskGroup::total_quantity)
            .fold(0, u64::saturating_add)
    }

    /// Number of input items that ended up spread over more than one task
    pub fn split_item_count(&self) -> usize {
        let mut split: Vec<usize> = Vec::new();

        for pair in self.groups.windows(2) {
            let (Some(tail), Some(head)) = (pair[0].entries.last(), pair[1].entries.first()) else {
                continue;
            };
            if tail.item_index == head.item_index && split.last() != Some(&tail.item_index) {
                split.push(tail.item_index);
            }
        }

        split.len()
    }
}

/// Pack normalized items into weight-capped tasks.
///
/// Items are consumed strictly in order; an item too large for the
/// current task is split and its remainder continues in fresh tasks.
pub fn partition_items(
    items: &[ItemRecord],
    config: &SlicerConfig,
) -> Result<Partition, PartitionError> {
    let mut packer = Packer::new(config);

    for (index, item) in items.iter().enumerate() {
        packer.place(index, item)?;
    }

    let partition = packer.finish();
    debug!(
        items = items.len(),
        groups = partition.group_count(),
        entries = partition.entry_count(),
        "Partitioned material list"
    );
    Ok(partition)
}
