use crate::{
    block::{BasicBlock, BlockId, FrequentBlock, Frequency},
    opcode::Opcode,
};

/// A named body of blocks. Blocks are numbered densely in creation order and
/// BB0 is the entry.
pub struct Function {
    pub(crate) name: String,
    pub(crate) blocks: Vec<BasicBlock>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_block(&mut self) -> BlockId {
        let id = BlockId(self.blocks.len());
        self.blocks.push(BasicBlock::new(id.0));
        id
    }

    pub fn block(&self, id: BlockId) -> &BasicBlock {
        &self.blocks[id.0]
    }

    pub fn block_mut(&mut self, id: BlockId) -> &mut BasicBlock {
        &mut self.blocks[id.0]
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn blocks(&self) -> impl Iterator<Item = &BasicBlock> {
        self.blocks.iter()
    }

    pub fn add_to_block(&mut self, block: BlockId, op: Opcode) {
        self.blocks[block.0].append(op);
    }

    pub fn add_successor(&mut self, block: BlockId, successor: BlockId) {
        self.blocks[block.0].append_successor((successor, Frequency::Normal));
        self.blocks[successor.0].add_predecessor(block);
    }

    pub fn entry(&self) -> Option<BlockId> {
        if self.blocks.is_empty() {
            None
        } else {
            Some(BlockId(0))
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "function {}:", self.name)?;
        for block in &self.blocks {
            block.fmt(f)?;
        }
        Ok(())
    }
}

/// Convenience for assembling block bodies in tests and drivers. Appends to
/// `block` until you `switch_to_block` something else.
pub struct BasicBlockBuilder<'a> {
    pub func: &'a mut Function,
    pub block: BlockId,
}

impl<'a> BasicBlockBuilder<'a> {
    pub fn new(func: &'a mut Function, block: BlockId) -> Self {
        Self { func, block }
    }

    pub fn switch_to_block(&mut self, block: BlockId) {
        self.block = block;
    }

    pub fn append(&mut self, op: Opcode) {
        debug_assert!(
            self.func.block(self.block).terminator().is_none(),
            "appending past a terminator in BB{}",
            self.block.0
        );
        self.func.add_to_block(self.block, op);
    }

    pub fn jump(&mut self, to: BlockId) {
        self.append(Opcode::Br);
        self.func.block_mut(self.block).set_successors((to, Frequency::Normal));
        self.func.block_mut(to).add_predecessor(self.block);
    }

    pub fn branch(&mut self, taken: BlockId, not_taken: FrequentBlock) {
        self.append(Opcode::Br);
        self.func
            .block_mut(self.block)
            .set_successors2((taken, Frequency::Normal), not_taken);
        self.func.block_mut(taken).add_predecessor(self.block);
        self.func.block_mut(not_taken.0).add_predecessor(self.block);
    }

    pub fn switch(&mut self, cases: &[FrequentBlock]) {
        self.append(Opcode::Switch);
        let block = self.block;
        self.func.block_mut(block).successor_list.clear();
        for case in cases {
            self.func.block_mut(block).append_successor(*case);
            self.func.block_mut(case.0).add_predecessor(block);
        }
    }

    pub fn ret(&mut self) {
        self.append(Opcode::Ret);
    }
}
