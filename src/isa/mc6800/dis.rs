use crate::disassembler::{DisSyntax, Field};
use crate::entry::Entry;
use crate::format::motorola_hex;
use crate::insn::DisInsn;
use crate::memory::DisMemory;
use crate::table::InsnSet;

use super::{AddrMode, Mc6800};

impl DisSyntax for Mc6800 {
    fn decode_operands(
        &self,
        memory: &mut dyn DisMemory,
        insn: &mut DisInsn,
        _opcode: u8,
        entry: &Entry<u8, AddrMode>,
    ) -> Vec<Field> {
        let mut fields = Vec::new();
        for mode in entry.modes() {
            let text = match mode {
                AddrMode::Imm => format!("#{}", motorola_hex(insn.read_byte(memory).into(), 2)),
                AddrMode::Imm16 => {
                    let w = insn.read_u16(memory, Self::ENDIAN);
                    format!("#{}", motorola_hex(w.into(), 4))
                }
                AddrMode::Dir => motorola_hex(insn.read_byte(memory).into(), 2),
                AddrMode::Ext => {
                    let w = insn.read_u16(memory, Self::ENDIAN);
                    // keep the long form when re-assembled
                    if w < 0x100 {
                        format!(">{}", motorola_hex(w.into(), 4))
                    } else {
                        motorola_hex(w.into(), 4)
                    }
                }
                AddrMode::Idx => format!("{},X", motorola_hex(insn.read_byte(memory).into(), 2)),
                AddrMode::Rel => {
                    let off = insn.read_byte(memory) as i8;
                    let target = (i64::from(insn.address()) + insn.length() as i64 + i64::from(off)) & 0xFFFF;
                    motorola_hex(target as u32, 4)
                }
                AddrMode::None => continue,
            };
            fields.push(Field::show(text));
        }
        fields
    }
}
