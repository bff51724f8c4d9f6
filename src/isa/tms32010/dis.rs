use crate::disassembler::{DisSyntax, Field};
use crate::entry::Entry;
use crate::error::{AsmError, ErrorKind};
use crate::format::{intel_hex, intel_signed};
use crate::insn::DisInsn;
use crate::memory::DisMemory;
use crate::table::InsnSet;

use super::{AddrMode, Indirect, Tms32010};

impl DisSyntax for Tms32010 {
    fn decode_operands(
        &self,
        memory: &mut dyn DisMemory,
        insn: &mut DisInsn,
        opc: u16,
        entry: &Entry<u16, AddrMode>,
    ) -> Vec<Field> {
        let low = Indirect::from_bits_retain(opc & 0xFF);
        let indirect = low.contains(Indirect::INDIRECT);
        let shift = (opc >> 8) & 0xF;
        let mut fields = Vec::new();

        for mode in entry.modes() {
            let field = match mode {
                AddrMode::Mam if indirect => {
                    let text = if low.contains(Indirect::INC) {
                        "*+"
                    } else if low.contains(Indirect::DEC) {
                        "*-"
                    } else {
                        "*"
                    };
                    Field::show(text)
                }
                AddrMode::Mam => Field::show(intel_hex(u32::from(opc & 0x7F))),
                AddrMode::Ls4 => Field::optional(shift.to_string(), shift == 0),
                AddrMode::Ls3 | AddrMode::Ls0 => {
                    let s = shift & 7;
                    Field::optional(s.to_string(), s == 0)
                }
                AddrMode::Narp => {
                    let keep = !indirect || low.contains(Indirect::KEEP_ARP);
                    Field::optional((opc & 1).to_string(), keep)
                }
                AddrMode::Ar => Field::show(format!("AR{}", (opc >> 8) & 7)),
                AddrMode::Pa => Field::show(format!("PA{}", (opc >> 8) & 7)),
                AddrMode::Im1 => Field::show((opc & 1).to_string()),
                AddrMode::Im8 => Field::show(intel_hex(u32::from(opc & 0xFF))),
                AddrMode::Im13 => {
                    // sign-extend the low 13 bits
                    let v = i32::from(((opc << 3) as i16) >> 3);
                    Field::show(intel_signed(v))
                }
                AddrMode::Pma => {
                    let pma = insn.read_u16(memory, Self::ENDIAN);
                    if pma > 0x0FFF {
                        insn.set_error(AsmError::new(ErrorKind::OverflowRange, fields.len()));
                    }
                    Field::show(intel_hex(u32::from(pma)))
                }
                AddrMode::None
                | AddrMode::Arp
                | AddrMode::Inc
                | AddrMode::Dec
                | AddrMode::Const => continue,
            };
            fields.push(field);
        }
        fields
    }
}
