use indexmap::{IndexMap, IndexSet};

use crate::{
    block::{BlockId, Frequency},
    function::Function,
};

/// Per-block branch-direction judgment, supplied by whatever branch
/// probability analysis the driver runs. Only consulted for blocks whose
/// terminator actually transfers control.
pub trait BranchBias {
    /// True iff the block has an identifiably likely-taken successor.
    /// Blocks the analysis knows nothing about report false.
    fn has_hot_successor(&self, block: BlockId) -> bool;
}

/// Table-backed bias judgments. Missing blocks default to unbiased.
#[derive(Debug, Clone, Default)]
pub struct BiasTable {
    bias: IndexMap<BlockId, bool>,
}

impl BiasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, block: BlockId, has_hot_successor: bool) {
        self.bias.insert(block, has_hot_successor);
    }
}

impl BranchBias for BiasTable {
    fn has_hot_successor(&self, block: BlockId) -> bool {
        self.bias.get(&block).copied().unwrap_or(false)
    }
}

impl FromIterator<(BlockId, bool)> for BiasTable {
    fn from_iter<T: IntoIterator<Item = (BlockId, bool)>>(iter: T) -> Self {
        Self {
            bias: iter.into_iter().collect(),
        }
    }
}

/// Bias judgments derived from the function's own successor-edge hints:
/// a block has a hot successor iff its edges mix Normal and Rare, which
/// singles out the Normal side as the expected direction. A block whose
/// edges all carry the same hint has no identifiable direction.
///
/// This is a default heuristic source for when no real branch probability
/// analysis ran; it predicts nothing.
#[derive(Debug, Clone)]
pub struct EdgeHintBias {
    hot: IndexSet<BlockId>,
}

impl EdgeHintBias {
    pub fn new(func: &Function) -> Self {
        let mut hot = IndexSet::new();

        for block in func.blocks() {
            let succs = block.successor_list();

            if succs.len() < 2 {
                continue;
            }

            let normal = succs.iter().filter(|(_, f)| *f == Frequency::Normal).count();
            let rare = succs.len() - normal;

            if normal > 0 && rare > 0 {
                hot.insert(block.id());
            }
        }

        Self { hot }
    }
}

impl BranchBias for EdgeHintBias {
    fn has_hot_successor(&self, block: BlockId) -> bool {
        self.hot.contains(&block)
    }
}
