//! Line assembler driver.
//!
//! The driver splits a line into mnemonic and comma-separated operands,
//! asks the architecture to parse each operand into an [`Operand`], searches
//! the table by name with the parsed modes and hands the match back to the
//! architecture for encoding.

use tracing::trace;

use crate::error::{AsmError, ErrorKind, SearchError};
use crate::insn::AsmInsn;
use crate::memory::AddressUnit;
use crate::scanner::Scanner;
use crate::table::{InsnSet, InsnTable, Matched, MAX_OPERANDS};

pub trait Assembler: Send + Sync {
    fn cpu_name(&self) -> &'static str;

    fn address_unit(&self) -> AddressUnit;

    /// Encodes `line` into `insn`. Errors are recorded on `insn`.
    fn encode(&self, line: &str, insn: &mut AsmInsn);

    fn assemble(&self, line: &str, address: u32) -> AsmInsn {
        let mut insn = AsmInsn::new(address);
        self.encode(line, &mut insn);
        insn
    }
}

/// A parsed operand: its addressing mode, register number (when the mode
/// names one), numeric value and source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand<M> {
    pub mode: M,
    pub reg: u8,
    pub val: i64,
    pub at: usize,
}

impl<M> Operand<M> {
    pub fn new(mode: M, at: usize) -> Self {
        Self {
            mode,
            reg: 0,
            val: 0,
            at,
        }
    }

    pub fn with_val(mut self, val: i64) -> Self {
        self.val = val;
        self
    }

    pub fn with_reg(mut self, reg: u8) -> Self {
        self.reg = reg;
        self
    }
}

/// Assembly hooks of an architecture.
pub trait AsmSyntax: InsnSet {
    /// Parses one operand starting at the scanner position (blanks skipped).
    fn parse_operand(&self, scan: &mut Scanner<'_>) -> Result<Operand<Self::Mode>, AsmError>;

    /// Emits the opcode and operand bytes for a matched entry. Any prefix
    /// has already been emitted.
    fn encode_operands(
        &self,
        insn: &mut AsmInsn,
        matched: Matched<Self::Opcode, Self::Mode>,
        operands: &[Operand<Self::Mode>],
    );
}

impl<S: AsmSyntax> Assembler for InsnTable<S> {
    fn cpu_name(&self) -> &'static str {
        self.isa().cpu_name()
    }

    fn address_unit(&self) -> AddressUnit {
        S::UNIT
    }

    fn encode(&self, line: &str, insn: &mut AsmInsn) {
        let mut scan = Scanner::new(line);
        scan.skip_spaces();
        let name_at = scan.pos();
        let Some(name) = scan.read_symbol() else {
            insn.set_error(AsmError::new(ErrorKind::UnknownInstruction, name_at));
            return;
        };

        let mut operands = Vec::with_capacity(MAX_OPERANDS);
        if !scan.at_end() {
            loop {
                scan.skip_spaces();
                match self.isa().parse_operand(&mut scan) {
                    Ok(op) => operands.push(op),
                    Err(e) => {
                        insn.set_error(e);
                        return;
                    }
                }
                scan.skip_spaces();
                if !scan.expect(',') {
                    break;
                }
            }
            if !scan.at_end() {
                scan.skip_spaces();
                insn.set_error(AsmError::new(ErrorKind::GarbageAtEnd, scan.pos()));
                return;
            }
        }

        let modes: Vec<S::Mode> = operands.iter().map(|op| op.mode).collect();
        match self.search_name(name, &modes) {
            Ok(matched) => {
                trace!(cpu = self.isa().cpu_name(), line, "encoding");
                if let Some(prefix) = matched.prefix {
                    insn.emit_opcode(prefix, S::ENDIAN);
                }
                self.isa().encode_operands(insn, matched, &operands);
            }
            Err(SearchError::UnknownInstruction) => {
                insn.set_error(AsmError::new(ErrorKind::UnknownInstruction, name_at));
            }
            Err(SearchError::OperandNotAllowed { position }) => {
                let error = match operands.get(position) {
                    Some(op) => AsmError::new(ErrorKind::OperandNotAllowed, op.at),
                    None => {
                        scan.skip_spaces();
                        AsmError::new(ErrorKind::MissingOperand, scan.pos())
                    }
                };
                insn.set_error(error);
            }
        }
    }
}
