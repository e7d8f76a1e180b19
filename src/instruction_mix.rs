use once_cell::sync::Lazy;

use crate::{
    branch_bias::BranchBias,
    frequency::ExecutionCounts,
    function::Function,
    opcode::Opcode,
};

/// The buckets an executed operation can fall into. A complete,
/// non-overlapping partition of the opcode set: every instruction lands in
/// exactly one, so the per-bucket fractions of a report sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Bucket {
    IntAlu,
    FloatAlu,
    Memory,
    BiasedBranch,
    UnbiasedBranch,
    Other,
}

impl Bucket {
    /// Report order. Fixed; renderers and consumers rely on it.
    pub const ALL: [Bucket; 6] = [
        Bucket::IntAlu,
        Bucket::FloatAlu,
        Bucket::Memory,
        Bucket::BiasedBranch,
        Bucket::UnbiasedBranch,
        Bucket::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Bucket::IntAlu => "ialu",
            Bucket::FloatAlu => "falu",
            Bucket::Memory => "mem",
            Bucket::BiasedBranch => "biased_branch",
            Bucket::UnbiasedBranch => "unbiased_branch",
            Bucket::Other => "other",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bucket for every opcode that classifies without a bias judgment. Control
/// transfers are in here as UnbiasedBranch but `bucket_for` never reads
/// those entries; everything unlisted decays to Other.
static STATIC_BUCKET: Lazy<[Bucket; Opcode::COUNT]> = Lazy::new(|| {
    let mut table = [Bucket::Other; Opcode::COUNT];

    for op in Opcode::ALL {
        table[op as usize] = if op.is_int_alu() {
            Bucket::IntAlu
        } else if op.is_float_alu() {
            Bucket::FloatAlu
        } else if op.is_memory_access() {
            Bucket::Memory
        } else if op.is_control_transfer() {
            Bucket::UnbiasedBranch
        } else {
            Bucket::Other
        };
    }

    table
});

/// Classify one opcode. Control transfers route on the owning block's bias
/// judgment; everything else ignores it.
pub fn bucket_for(op: Opcode, has_hot_successor: bool) -> Bucket {
    if op.is_control_transfer() {
        if has_hot_successor {
            Bucket::BiasedBranch
        } else {
            Bucket::UnbiasedBranch
        }
    } else {
        STATIC_BUCKET[op as usize]
    }
}

/// Running totals for one function. Fresh per invocation, consumed once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MixCounts {
    buckets: [u64; 6],
    dyn_op_count: u64,
}

impl MixCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one instruction executing `weight` times. The grand total
    /// counts every instruction, Other included.
    pub fn add(&mut self, bucket: Bucket, weight: u64) {
        self.dyn_op_count = self.dyn_op_count.saturating_add(weight);
        let slot = &mut self.buckets[bucket as usize];
        *slot = slot.saturating_add(weight);
    }

    pub fn bucket(&self, bucket: Bucket) -> u64 {
        self.buckets[bucket as usize]
    }

    pub fn dyn_op_count(&self) -> u64 {
        self.dyn_op_count
    }
}

/// The mix of one function: grand total plus one count per bucket.
/// Fractions come out in `Bucket::ALL` order; a zero grand total yields
/// all-zero fractions rather than NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct MixReport {
    function: String,
    counts: MixCounts,
}

impl MixReport {
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn dyn_op_count(&self) -> u64 {
        self.counts.dyn_op_count()
    }

    pub fn count(&self, bucket: Bucket) -> u64 {
        self.counts.bucket(bucket)
    }

    pub fn fraction(&self, bucket: Bucket) -> f64 {
        let total = self.counts.dyn_op_count();

        if total == 0 {
            0.0
        } else {
            self.counts.bucket(bucket) as f64 / total as f64
        }
    }

    pub fn fractions(&self) -> [f64; 6] {
        let mut result = [0.0; 6];

        for (i, bucket) in Bucket::ALL.iter().enumerate() {
            result[i] = self.fraction(*bucket);
        }

        result
    }

    /// Column names matching the `Display` line.
    pub fn csv_header() -> &'static str {
        "function, dyn_ops, ialu, falu, mem, biased_branch, unbiased_branch, other"
    }
}

impl std::fmt::Display for MixReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.function, self.counts.dyn_op_count())?;

        if self.counts.dyn_op_count() == 0 {
            return write!(f, ", {:.6}", 0.0);
        }

        for bucket in Bucket::ALL {
            write!(f, ", {:.6}", self.fraction(bucket))?;
        }

        Ok(())
    }
}

/// Compute the dynamic instruction mix of `func`.
///
/// Visits every (block, instruction) pair exactly once and adds the block's
/// execution count to the grand total and to exactly one bucket. A block with
/// count 0 contributes nothing, but its instructions are still classified.
/// The order of visitation does not matter; accumulation commutes.
pub fn compute_instruction_mix(
    func: &Function,
    counts: &impl ExecutionCounts,
    bias: &impl BranchBias,
) -> MixReport {
    let mut mix = MixCounts::new();

    for block in func.blocks() {
        let weight = counts.execution_count(block.id());
        let hot = bias.has_hot_successor(block.id());

        for op in block.iter() {
            mix.add(bucket_for(*op, hot), weight);
        }
    }

    MixReport {
        function: func.name().to_string(),
        counts: mix,
    }
}
