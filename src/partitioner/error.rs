use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PartitionError {
    #[error(
        "Cannot allocate {kind} (item {item_index}): split would assign {quantity} units \
         (headroom {headroom}, coefficient {coefficient})"
    )]
    NonPositiveAllocation {
        kind: String,
        item_index: usize,
        quantity: u64,
        headroom: u64,
        coefficient: u64,
    },
}
