use crate::normalizer::NormalizeError;
use crate::partitioner::PartitionError;
use thiserror::Error;

/// Failure of the full normalize-then-partition pipeline
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SliceError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Partition(#[from] PartitionError),
}
