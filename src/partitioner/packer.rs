use super::{GroupEntry, Partition, PartitionError, TaskGroup};
use crate::config::{SlicerConfig, SplitPolicy};
use crate::records::ItemRecord;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Scan state for a single partitioning run
pub(super) struct Packer<'a> {
    config: &'a SlicerConfig,
    groups: Vec<TaskGroup>,
    current: Vec<GroupEntry>,
    accumulated: u64,
}

impl<'a> Packer<'a> {
    pub(super) fn new(config: &'a SlicerConfig) -> Self {
        Self {
            config,
            groups: Vec::new(),
            current: Vec::new(),
            accumulated: 0,
        }
    }

    /// Place one normalized item, splitting it across as many tasks as needed.
    ///
    /// `accumulated < max_group_weight` holds on entry and on every
    /// iteration of the loop.
    pub(super) fn place(
        &mut self,
        item_index: usize,
        item: &ItemRecord,
    ) -> Result<(), PartitionError> {
        let cap = self.config.max_group_weight;
        let coefficient = self.config.coefficient_for(&item.kind);
        let mut remaining = item.quantity;

        loop {
            let candidate = remaining
                .saturating_mul(coefficient)
                .saturating_add(self.accumulated);

            match candidate.cmp(&cap) {
                Ordering::Less => {
                    self.push(item_index, &item.kind, remaining);
                    self.accumulated = candidate.saturating_add(self.config.type_overhead);
                    if self.accumulated >= cap {
                        self.close();
                    }
                    return Ok(());
                }
                Ordering::Equal => {
                    self.push(item_index, &item.kind, remaining);
                    self.accumulated = candidate;
                    self.close();
                    return Ok(());
                }
                Ordering::Greater => {
                    let headroom = cap - self.accumulated;
                    let fit = match self.config.split_policy {
                        SplitPolicy::Weighted => headroom / coefficient,
                        SplitPolicy::Unweighted => headroom,
                    }
                    .min(remaining);

                    if fit == 0 {
                        if self.config.split_policy == SplitPolicy::Weighted
                            && !self.current.is_empty()
                        {
                            trace!(
                                kind = %item.kind,
                                headroom,
                                coefficient,
                                "No room for a single unit, closing task early"
                            );
                            self.close();
                            continue;
                        }

                        return Err(PartitionError::NonPositiveAllocation {
                            kind: item.kind.clone(),
                            item_index,
                            quantity: fit,
                            headroom,
                            coefficient,
                        });
                    }

                    debug!(
                        kind = %item.kind,
                        item_index,
                        fit,
                        remaining = remaining - fit,
                        "Splitting item across tasks"
                    );

                    self.push(item_index, &item.kind, fit);
                    self.accumulated = self
                        .accumulated
                        .saturating_add(fit.saturating_mul(coefficient));
                    self.close();

                    // Only an unweighted split can consume the whole
                    // remainder here. The zero remainder still goes through
                    // the below-cap arm, opening the next task with a
                    // zero-quantity entry that carries the type overhead.
                    remaining -= fit;
                }
            }
        }
    }

    /// Flush the trailing task, if any, and hand back the numbered tasks
    pub(super) fn finish(mut self) -> Partition {
        if !self.current.is_empty() {
            self.close();
        }
        Partition {
            groups: self.groups,
        }
    }

    fn push(&mut self, item_index: usize, kind: &str, quantity: u64) {
        self.current.push(GroupEntry {
            kind: kind.to_string(),
            quantity,
            item_index,
        });
    }

    /// Emit the in-progress task as the next numbered group
    fn close(&mut self) {
        let id = self.groups.len() as u32 + 1;
        let entries = std::mem::take(&mut self.current);
        let weight = std::mem::take(&mut self.accumulated);

        debug!(group = id, entries = entries.len(), weight, "Closed task");

        self.groups.push(TaskGroup {
            id,
            entries,
            weight,
        });
    }
}
