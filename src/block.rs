use std::ops::{Deref, DerefMut};

use tinyvec::TinyVec;

use crate::opcode::Opcode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub usize);

impl Default for BlockId {
    fn default() -> Self {
        Self(usize::MAX)
    }
}

impl From<usize> for BlockId {
    fn from(x: usize) -> Self {
        BlockId(x)
    }
}

impl From<BlockId> for usize {
    fn from(x: BlockId) -> Self {
        x.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BB{}", self.0)
    }
}

/// Static hint for how often a successor edge is taken relative to its
/// siblings. When merging hints, never choose Rare; the profiler punishes
/// Rare edges hard when deriving a bias judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// No hypothesis about this edge. The common case.
    Normal,
    /// The edge is expected to be taken super rarely.
    Rare,
}

impl Default for Frequency {
    fn default() -> Self {
        Self::Normal
    }
}

pub type FrequentBlock = (BlockId, Frequency);

/// A straight-line run of instructions ending in at most one terminator.
/// Instructions carry no operands here: the mix analysis only ever reads
/// opcodes, so the block stores them directly.
pub struct BasicBlock {
    pub(crate) index: usize,
    pub(crate) insts: Vec<Opcode>,
    pub(crate) predecessor_list: TinyVec<[BlockId; 4]>,
    pub(crate) successor_list: TinyVec<[FrequentBlock; 2]>,
}

impl BasicBlock {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            insts: Vec::new(),
            predecessor_list: TinyVec::new(),
            successor_list: TinyVec::new(),
        }
    }

    pub fn id(&self) -> BlockId {
        BlockId(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn append(&mut self, op: Opcode) {
        self.insts.push(op);
    }

    /// The terminator, if the block currently ends in one.
    pub fn terminator(&self) -> Option<Opcode> {
        self.insts.last().copied().filter(|op| op.is_terminator())
    }

    pub fn taken(&self) -> FrequentBlock {
        self.successor_list[0]
    }

    pub fn not_taken(&self) -> FrequentBlock {
        self.successor_list[1]
    }

    pub fn successor_list(&self) -> &[FrequentBlock] {
        &self.successor_list
    }

    pub fn predecessor_list(&self) -> &[BlockId] {
        &self.predecessor_list
    }

    pub fn set_successors(&mut self, target: FrequentBlock) {
        self.successor_list.clear();
        self.successor_list.push(target);
    }

    pub fn set_successors2(&mut self, target1: FrequentBlock, target2: FrequentBlock) {
        self.successor_list.clear();
        self.successor_list.push(target1);
        self.successor_list.push(target2);
    }

    pub fn append_successor(&mut self, target: FrequentBlock) {
        self.successor_list.push(target);
    }

    pub fn add_predecessor(&mut self, predecessor: BlockId) -> bool {
        if self.predecessor_list.contains(&predecessor) {
            false
        } else {
            self.predecessor_list.push(predecessor);
            true
        }
    }

    pub(crate) fn fmt<W: std::fmt::Write>(&self, f: &mut W) -> std::fmt::Result {
        writeln!(f, "BB{}:", self.index)?;

        if !self.predecessor_list.is_empty() {
            write!(f, "  Predecessors: ")?;
            for (i, pred) in self.predecessor_list.iter().enumerate() {
                write!(f, "BB{}", pred.0)?;

                if i < self.predecessor_list.len() - 1 {
                    write!(f, ", ")?;
                }
            }
            writeln!(f)?;
        }

        for op in &self.insts {
            writeln!(f, "    {}", op)?;
        }

        if !self.successor_list.is_empty() {
            write!(f, "  Successors: ")?;
            for (i, (succ, freq)) in self.successor_list.iter().enumerate() {
                write!(f, "BB{}", succ.0)?;

                if let Frequency::Rare = freq {
                    write!(f, " (rare)")?;
                }

                if i < self.successor_list.len() - 1 {
                    write!(f, ", ")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Deref for BasicBlock {
    type Target = Vec<Opcode>;

    fn deref(&self) -> &Self::Target {
        &self.insts
    }
}

impl DerefMut for BasicBlock {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.insts
    }
}
