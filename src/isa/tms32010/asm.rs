use crate::assembler::{AsmSyntax, Operand};
use crate::error::{AsmError, ErrorKind};
use crate::insn::AsmInsn;
use crate::scanner::Scanner;
use crate::table::{InsnSet, Matched};

use super::{AddrMode, Indirect, Tms32010, Variant};

/// `AR1` or `PA3`: register prefix followed by one decimal digit.
fn register(sym: &str, prefix: &str) -> Option<u8> {
    if sym.len() != prefix.len() + 1 || !sym[..prefix.len()].eq_ignore_ascii_case(prefix) {
        return None;
    }
    let digit = sym.as_bytes()[prefix.len()];
    digit.is_ascii_digit().then_some(digit - b'0')
}

fn fail(insn: &mut AsmInsn, kind: ErrorKind, op: &Operand<AddrMode>) {
    insn.set_error(AsmError::new(kind, op.at));
}

impl AsmSyntax for Tms32010 {
    fn parse_operand(&self, scan: &mut Scanner<'_>) -> Result<Operand<AddrMode>, AsmError> {
        let at = scan.pos();
        if scan.expect('*') {
            let mode = if scan.expect('+') {
                AddrMode::Inc
            } else if scan.expect('-') {
                AddrMode::Dec
            } else {
                AddrMode::Arp
            };
            return Ok(Operand::new(mode, at));
        }
        if let Some(sym) = scan.read_symbol() {
            if let Some(n) = register(sym, "AR").filter(|&n| n <= 7) {
                if u16::from(n) > Variant::MAX_AR {
                    return Err(AsmError::new(ErrorKind::IllegalRegister, at));
                }
                return Ok(Operand::new(AddrMode::Ar, at).with_reg(n));
            }
            if let Some(n) = register(sym, "PA").filter(|&n| n <= 7) {
                return Ok(Operand::new(AddrMode::Pa, at).with_reg(n).with_val(n.into()));
            }
            return Err(AsmError::new(ErrorKind::UnknownOperand, at));
        }
        match scan.read_number()? {
            Some(val) => Ok(Operand::new(AddrMode::Const, at).with_val(val)),
            None => Err(AsmError::new(ErrorKind::UnknownOperand, at)),
        }
    }

    fn encode_operands(
        &self,
        insn: &mut AsmInsn,
        matched: Matched<u16, AddrMode>,
        operands: &[Operand<AddrMode>],
    ) {
        let variant = self.variant();
        let mut opc = matched.entry.opcode();
        let mut second = None;
        let mut indirect = false;

        for (op, mode) in operands.iter().zip(matched.entry.modes()) {
            let v = op.val;
            match mode {
                AddrMode::Mam => match Indirect::of(op.mode) {
                    Some(ind) => {
                        indirect = true;
                        opc |= ind.bits();
                    }
                    None => {
                        if !(0..=i64::from(variant.max_dma())).contains(&v) {
                            fail(insn, ErrorKind::OverflowRange, op);
                        }
                        opc |= (v & 0x7F) as u16;
                    }
                },
                AddrMode::Ls4 => {
                    if !(0..=15).contains(&v) {
                        fail(insn, ErrorKind::OverflowRange, op);
                    }
                    opc |= ((v & 0xF) as u16) << 8;
                }
                AddrMode::Ls3 => {
                    if !matches!(v, 0 | 1 | 4) {
                        fail(insn, ErrorKind::OperandNotAllowed, op);
                    }
                    opc |= ((v & 7) as u16) << 8;
                }
                AddrMode::Ls0 => {
                    if v != 0 {
                        fail(insn, ErrorKind::OperandNotAllowed, op);
                    }
                }
                AddrMode::Narp => {
                    if !indirect || !(0..=i64::from(Variant::MAX_AR)).contains(&v) {
                        fail(insn, ErrorKind::OperandNotAllowed, op);
                    } else {
                        opc = (opc & !Indirect::KEEP_ARP.bits()) | v as u16;
                    }
                }
                AddrMode::Ar => opc |= u16::from(op.reg) << 8,
                AddrMode::Pa => {
                    if !(0..=7).contains(&v) {
                        fail(insn, ErrorKind::OverflowRange, op);
                    }
                    opc |= ((v & 7) as u16) << 8;
                }
                AddrMode::Im1 => {
                    if !(0..=1).contains(&v) {
                        fail(insn, ErrorKind::OperandNotAllowed, op);
                    }
                    opc |= (v & 1) as u16;
                }
                AddrMode::Im8 => {
                    if !(0..=0xFF).contains(&v) {
                        fail(insn, ErrorKind::OverflowRange, op);
                    }
                    opc |= (v & 0xFF) as u16;
                }
                AddrMode::Im13 => {
                    if !(-0x1000..=0x0FFF).contains(&v) {
                        fail(insn, ErrorKind::OverflowRange, op);
                    }
                    opc |= (v & 0x1FFF) as u16;
                }
                AddrMode::Pma => {
                    if !(0..=0x0FFF).contains(&v) {
                        fail(insn, ErrorKind::OverflowRange, op);
                    }
                    second = Some((v & 0x0FFF) as u16);
                }
                AddrMode::None
                | AddrMode::Arp
                | AddrMode::Inc
                | AddrMode::Dec
                | AddrMode::Const => {}
            }
        }

        insn.emit_u16(opc, Self::ENDIAN);
        if let Some(word) = second {
            insn.emit_u16(word, Self::ENDIAN);
        }
    }
}
