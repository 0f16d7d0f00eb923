use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The item's fingerprint is already in one of its candidate buckets
    #[error("item is already present in the filter")]
    AlreadyPresent,
    /// The eviction chain ran out of kicks, the filter is overloaded
    #[error("not enough space to store this item after {kicks} kicks")]
    NotEnoughSpace { kicks: usize },
    #[error("bucket slot index {index} is out of range")]
    SlotOutOfRange { index: usize },
}
