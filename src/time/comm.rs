//! Cross-partition reductions.

/// Collective operations over all partitions of a distributed run.
///
/// Every partition must call each collective the same number of times and
/// in the same order; the call blocks until all partitions have joined.
pub trait Communicator {
    /// Minimum of `value` over all partitions.
    fn all_reduce_min(&self, value: f64) -> f64;

    /// Rank of this partition.
    fn rank(&self) -> usize {
        0
    }

    /// Number of partitions.
    fn size(&self) -> usize {
        1
    }
}

/// Single-partition communicator: every reduction is the identity.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialCommunicator;

impl Communicator for SerialCommunicator {
    #[inline]
    fn all_reduce_min(&self, value: f64) -> f64 {
        value
    }
}
