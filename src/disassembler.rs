//! Instruction decoder driver.

use tracing::debug;

use crate::entry::Entry;
use crate::error::AsmError;
use crate::insn::DisInsn;
use crate::memory::{AddressUnit, DisMemory};
use crate::table::{InsnSet, InsnTable};

pub trait Disassembler: Send + Sync {
    fn cpu_name(&self) -> &'static str;

    fn address_unit(&self) -> AddressUnit;

    /// Decodes one instruction from `memory` into `insn`.
    fn decode(&self, memory: &mut dyn DisMemory, insn: &mut DisInsn);

    fn disassemble(&self, memory: &mut dyn DisMemory) -> DisInsn {
        let mut insn = DisInsn::new(memory.address());
        self.decode(memory, &mut insn);
        insn
    }
}

/// One rendered operand. Trailing fields marked `omit` are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub text: String,
    pub omit: bool,
}

impl Field {
    pub fn show(text: impl Into<String>) -> Self {
        Self { text: text.into(), omit: false }
    }

    pub fn optional(text: impl Into<String>, omit: bool) -> Self {
        Self { text: text.into(), omit }
    }
}

/// Joins fields with `,` after dropping trailing omittable ones.
pub fn join_fields(fields: &[Field]) -> String {
    let keep = fields.iter().rposition(|f| !f.omit).map_or(0, |i| i + 1);
    fields[..keep]
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Disassembly hooks of an architecture.
pub trait DisSyntax: InsnSet {
    /// Reads any operand units that follow `opcode` and renders the operand
    /// fields of `entry`, in declaration order. Errors found here are
    /// recorded with the index of the offending field.
    fn decode_operands(
        &self,
        memory: &mut dyn DisMemory,
        insn: &mut DisInsn,
        opcode: Self::Opcode,
        entry: &Entry<Self::Opcode, Self::Mode>,
    ) -> Vec<Field>;
}

impl<S: DisSyntax> Disassembler for InsnTable<S> {
    fn cpu_name(&self) -> &'static str {
        self.isa().cpu_name()
    }

    fn address_unit(&self) -> AddressUnit {
        S::UNIT
    }

    fn decode(&self, memory: &mut dyn DisMemory, insn: &mut DisInsn) {
        let mut opcode: S::Opcode = insn.read_opcode(memory, S::ENDIAN);
        if !insn.is_ok() {
            return;
        }
        let mut prefix = None;
        if self.is_prefix(opcode) {
            prefix = Some(opcode);
            opcode = insn.read_opcode(memory, S::ENDIAN);
            if !insn.is_ok() {
                return;
            }
        }
        match self.search_opcode(prefix, opcode) {
            Ok(entry) => {
                insn.set_name(entry.name());
                let fields = self.isa().decode_operands(memory, insn, opcode, entry);
                insn.set_operands(join_fields(&fields));
            }
            Err(e) => {
                debug!(cpu = self.isa().cpu_name(), address = insn.address(), opcode = ?opcode, "unknown opcode");
                insn.set_error(AsmError::new(e.kind(), 0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_omittable_fields_are_dropped() {
        let fields = vec![
            Field::show("*+"),
            Field::optional("0", true),
            Field::optional("", true),
        ];
        assert_eq!(join_fields(&fields), "*+");
        let fields = vec![
            Field::show("*+"),
            Field::optional("0", true),
            Field::show("1"),
        ];
        assert_eq!(join_fields(&fields), "*+,0,1");
        assert_eq!(join_fields(&[]), "");
    }
}
