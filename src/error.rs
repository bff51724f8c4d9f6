use serde::{Deserialize, Serialize};

/// Error kinds attached to an assembled or disassembled instruction.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[error("unknown instruction")]
    UnknownInstruction,
    #[error("operand not allowed")]
    OperandNotAllowed,
    #[error("overflow range")]
    OverflowRange,
    #[error("operand too far")]
    OperandTooFar,
    #[error("illegal register")]
    IllegalRegister,
    #[error("unknown operand")]
    UnknownOperand,
    #[error("missing operand")]
    MissingOperand,
    #[error("garbage at end")]
    GarbageAtEnd,
    #[error("no memory")]
    NoMemory,
}

/// An error located at a column of the source line (assembler) or at the
/// index of an operand field of the output (disassembler).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at column {at}")]
pub struct AsmError {
    pub kind: ErrorKind,
    pub at: usize,
}

impl AsmError {
    pub fn new(kind: ErrorKind, at: usize) -> Self {
        Self { kind, at }
    }
}

/// Failure of a table search.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("unknown instruction")]
    UnknownInstruction,
    /// The mnemonic exists but no entry accepts the operand at `position`
    /// (zero based).
    #[error("operand {position} not allowed")]
    OperandNotAllowed { position: usize },
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::UnknownInstruction => ErrorKind::UnknownInstruction,
            SearchError::OperandNotAllowed { .. } => ErrorKind::OperandNotAllowed,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown cpu: {0}")]
    UnknownCpu(String),
}
