use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NormalizeError {
    #[error(
        "Cannot round {kind} (item {item_index}): quantity {quantity} has no batch size \
         representable as u64"
    )]
    QuantityOverflow {
        kind: String,
        item_index: usize,
        quantity: u64,
    },
}
