#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Polymorphic integer math. Wrapping semantics; overflow checking is the
    /// producer's problem, not ours.
    Add,
    Sub,
    Mul,
    /// All bets are off as to what the producer does for x/0; we only classify.
    UDiv,
    SDiv,
    URem,
    SRem,

    /// Integer bit manipulation.
    Shl,
    /// Logical shift.
    LShr,
    /// Arithmetic shift.
    AShr,
    And,
    Or,
    Xor,

    /// Integer comparison. Returns a one-bit value.
    ICmp,

    /// Floating point math.
    FAdd,
    FSub,
    FMul,
    FDiv,
    FRem,
    FCmp,

    /// Stack allocation. Counted as memory traffic: the slot lives in memory
    /// and the address escapes into loads and stores.
    Alloca,
    Load,
    Store,
    /// Address computation over an aggregate or array. No memory is touched,
    /// but it belongs to the memory stream feeding loads and stores.
    GetElementPtr,
    /// Standalone fence, not part of another instruction.
    Fence,
    AtomicCmpXchg,
    /// Atomically read-modify-write a location and return the old value.
    AtomicRmw,

    /// Conditional or unconditional branch. Which one it is does not matter
    /// for classification; only the block's bias judgment does.
    Br,
    Switch,
    IndirectBr,

    /// Everything below lands in the catch-all bucket.
    Ret,
    Call,
    Phi,
    Select,

    /// Casts and conversions.
    Trunc,
    ZExt,
    SExt,
    FPTrunc,
    FPExt,
    FPToUI,
    FPToSI,
    UIToFP,
    SIToFP,
    PtrToInt,
    IntToPtr,
    BitCast,

    /// Vector shuffling and aggregate surgery.
    ExtractElement,
    InsertElement,
    ShuffleVector,
    ExtractValue,
    InsertValue,

    Freeze,
    LandingPad,
    VAArg,

    /// Terminal that indicates we never get here.
    Unreachable,
}

impl Opcode {
    /// Every opcode, in declaration order. Discriminants are contiguous from
    /// zero, so `op as usize` indexes tables sized by `COUNT`.
    pub const ALL: [Opcode; 55] = [
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::UDiv,
        Opcode::SDiv,
        Opcode::URem,
        Opcode::SRem,
        Opcode::Shl,
        Opcode::LShr,
        Opcode::AShr,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::ICmp,
        Opcode::FAdd,
        Opcode::FSub,
        Opcode::FMul,
        Opcode::FDiv,
        Opcode::FRem,
        Opcode::FCmp,
        Opcode::Alloca,
        Opcode::Load,
        Opcode::Store,
        Opcode::GetElementPtr,
        Opcode::Fence,
        Opcode::AtomicCmpXchg,
        Opcode::AtomicRmw,
        Opcode::Br,
        Opcode::Switch,
        Opcode::IndirectBr,
        Opcode::Ret,
        Opcode::Call,
        Opcode::Phi,
        Opcode::Select,
        Opcode::Trunc,
        Opcode::ZExt,
        Opcode::SExt,
        Opcode::FPTrunc,
        Opcode::FPExt,
        Opcode::FPToUI,
        Opcode::FPToSI,
        Opcode::UIToFP,
        Opcode::SIToFP,
        Opcode::PtrToInt,
        Opcode::IntToPtr,
        Opcode::BitCast,
        Opcode::ExtractElement,
        Opcode::InsertElement,
        Opcode::ShuffleVector,
        Opcode::ExtractValue,
        Opcode::InsertValue,
        Opcode::Freeze,
        Opcode::LandingPad,
        Opcode::VAArg,
        Opcode::Unreachable,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn is_int_alu(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Sub
                | Self::Mul
                | Self::UDiv
                | Self::SDiv
                | Self::URem
                | Self::SRem
                | Self::Shl
                | Self::LShr
                | Self::AShr
                | Self::And
                | Self::Or
                | Self::Xor
                | Self::ICmp
        )
    }

    pub const fn is_float_alu(self) -> bool {
        matches!(
            self,
            Self::FAdd | Self::FSub | Self::FMul | Self::FDiv | Self::FRem | Self::FCmp
        )
    }

    pub const fn is_memory_access(self) -> bool {
        matches!(
            self,
            Self::Alloca
                | Self::Load
                | Self::Store
                | Self::GetElementPtr
                | Self::Fence
                | Self::AtomicCmpXchg
                | Self::AtomicRmw
        )
    }

    /// True for terminators that transfer control to a successor block.
    /// `Ret` and `Unreachable` end a block but go nowhere we can bias.
    pub const fn is_control_transfer(self) -> bool {
        matches!(self, Self::Br | Self::Switch | Self::IndirectBr)
    }

    pub const fn is_terminator(self) -> bool {
        matches!(
            self,
            Self::Br | Self::Switch | Self::IndirectBr | Self::Ret | Self::Unreachable
        )
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
