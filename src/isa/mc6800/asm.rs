use crate::assembler::{AsmSyntax, Operand};
use crate::error::{AsmError, ErrorKind};
use crate::insn::AsmInsn;
use crate::scanner::Scanner;
use crate::table::{InsnSet, Matched};

use super::{AddrMode, Mc6800};

/// Consumes `,X` if it follows.
fn index_suffix(scan: &mut Scanner<'_>) -> bool {
    let save = scan.pos();
    scan.skip_spaces();
    if scan.expect(',') {
        scan.skip_spaces();
        if scan.read_symbol().is_some_and(|s| s.eq_ignore_ascii_case("X")) {
            return true;
        }
    }
    scan.set_pos(save);
    false
}

fn fail(insn: &mut AsmInsn, kind: ErrorKind, op: &Operand<AddrMode>) {
    insn.set_error(AsmError::new(kind, op.at));
}

impl AsmSyntax for Mc6800 {
    fn parse_operand(&self, scan: &mut Scanner<'_>) -> Result<Operand<AddrMode>, AsmError> {
        let at = scan.pos();
        if scan.expect('#') {
            return match scan.read_number()? {
                Some(val) => Ok(Operand::new(AddrMode::Imm, at).with_val(val)),
                None => Err(AsmError::new(ErrorKind::UnknownOperand, scan.pos())),
            };
        }
        if scan.peek() == Some(',') {
            return if index_suffix(scan) {
                Ok(Operand::new(AddrMode::Idx, at))
            } else {
                Err(AsmError::new(ErrorKind::UnknownOperand, at))
            };
        }
        let extended = scan.expect('>');
        let Some(val) = scan.read_number()? else {
            return Err(AsmError::new(ErrorKind::UnknownOperand, at));
        };
        if !extended && index_suffix(scan) {
            return Ok(Operand::new(AddrMode::Idx, at).with_val(val));
        }
        let mode = if !extended && (0..=0xFF).contains(&val) {
            AddrMode::Dir
        } else {
            AddrMode::Ext
        };
        Ok(Operand::new(mode, at).with_val(val))
    }

    fn encode_operands(
        &self,
        insn: &mut AsmInsn,
        matched: Matched<u8, AddrMode>,
        operands: &[Operand<AddrMode>],
    ) {
        insn.emit_byte(matched.entry.opcode());
        for (op, mode) in operands.iter().zip(matched.entry.modes()) {
            let v = op.val;
            match mode {
                AddrMode::Imm => {
                    if !(-0x80..=0xFF).contains(&v) {
                        fail(insn, ErrorKind::OverflowRange, op);
                    }
                    insn.emit_byte(v as u8);
                }
                AddrMode::Imm16 => {
                    if !(-0x8000..=0xFFFF).contains(&v) {
                        fail(insn, ErrorKind::OverflowRange, op);
                    }
                    insn.emit_u16(v as u16, Self::ENDIAN);
                }
                AddrMode::Dir | AddrMode::Idx => {
                    if !(0..=0xFF).contains(&v) {
                        fail(insn, ErrorKind::OverflowRange, op);
                    }
                    insn.emit_byte(v as u8);
                }
                AddrMode::Ext => {
                    if !(0..=0xFFFF).contains(&v) {
                        fail(insn, ErrorKind::OverflowRange, op);
                    }
                    insn.emit_u16(v as u16, Self::ENDIAN);
                }
                AddrMode::Rel => {
                    if !(0..=0xFFFF).contains(&v) {
                        fail(insn, ErrorKind::OverflowRange, op);
                    }
                    let next = i64::from(insn.address()) + insn.length() as i64 + 1;
                    // branch targets wrap around the 64K address space
                    let delta = i64::from((v - next) as i16);
                    if !(-0x80..=0x7F).contains(&delta) {
                        fail(insn, ErrorKind::OperandTooFar, op);
                    }
                    insn.emit_byte(delta as u8);
                }
                AddrMode::None => {}
            }
        }
    }
}
