pub mod block;
pub mod branch_bias;
pub mod frequency;
pub mod function;
pub mod instruction_mix;
pub mod opcode;

pub use block::{BasicBlock, BlockId, FrequentBlock, Frequency};
pub use branch_bias::{BiasTable, BranchBias, EdgeHintBias};
pub use frequency::{ExecutionCounts, ProfileCounts, UniformCounts};
pub use function::{BasicBlockBuilder, Function};
pub use instruction_mix::{bucket_for, compute_instruction_mix, Bucket, MixCounts, MixReport};
pub use opcode::Opcode;
