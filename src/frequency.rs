use indexmap::IndexMap;

use crate::block::BlockId;

/// Per-block dynamic execution-count estimates, supplied by whatever profile
/// loader or static estimator the driver runs. The mix analysis only ever
/// asks this one question.
pub trait ExecutionCounts {
    /// Estimated number of times the block executes. A block the estimator
    /// knows nothing about reports 0, it does not fail.
    fn execution_count(&self, block: BlockId) -> u64;
}

/// Table-backed counts, typically filled from a measured profile. Blocks
/// missing from the table are cold and count as 0.
#[derive(Debug, Clone, Default)]
pub struct ProfileCounts {
    counts: IndexMap<BlockId, u64>,
}

impl ProfileCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, block: BlockId, count: u64) {
        self.counts.insert(block, count);
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Blocks with recorded counts, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, u64)> + '_ {
        self.counts.iter().map(|(block, count)| (*block, *count))
    }
}

impl ExecutionCounts for ProfileCounts {
    fn execution_count(&self, block: BlockId) -> u64 {
        self.counts.get(&block).copied().unwrap_or(0)
    }
}

impl FromIterator<(BlockId, u64)> for ProfileCounts {
    fn from_iter<T: IntoIterator<Item = (BlockId, u64)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Every block executes the same number of times. Useful as a stand-in when
/// no profile exists: the mix degenerates to the static instruction mix.
#[derive(Debug, Clone, Copy)]
pub struct UniformCounts(pub u64);

impl ExecutionCounts for UniformCounts {
    fn execution_count(&self, _block: BlockId) -> u64 {
        self.0
    }
}
