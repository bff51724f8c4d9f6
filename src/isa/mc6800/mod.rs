//! MC6800 family: MC6800, MC6801 and HD6301.
//!
//! Byte opcodes, big-endian operands, byte addressing. Each variant extends
//! its predecessor with a page searched ahead of the older ones, so a mode
//! added by a later CPU (e.g. `JSR` direct on the MC6801) wins over the
//! older encoding of the same mnemonic.

mod asm;
mod dis;
mod table;

use crate::entry::{AddressingMode, EntryPage};
use crate::memory::{AddressUnit, Endian};
use crate::registry::CpuModule;
use crate::table::{InsnSet, InsnTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AddrMode {
    None = 0,
    /// `#n`, 8 bits.
    Imm = 1,
    /// `#n`, 16 bits.
    Imm16 = 2,
    /// Zero-page address.
    Dir = 3,
    Ext = 4,
    /// Branch target.
    Rel = 5,
    /// `n,X`
    Idx = 6,
}

const MODES: [AddrMode; 7] = [
    AddrMode::None,
    AddrMode::Imm,
    AddrMode::Imm16,
    AddrMode::Dir,
    AddrMode::Ext,
    AddrMode::Rel,
    AddrMode::Idx,
];

impl AddressingMode for AddrMode {
    const NONE: Self = AddrMode::None;

    fn from_bits(bits: u8) -> Self {
        MODES.get(bits as usize).copied().unwrap_or(AddrMode::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Mc6800,
    Mc6801,
    Hd6301,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Mc6800 => "MC6800",
            Variant::Mc6801 => "MC6801",
            Variant::Hd6301 => "HD6301",
        }
    }
}

pub struct Mc6800 {
    variant: Variant,
}

impl Mc6800 {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }
}

impl InsnSet for Mc6800 {
    type Opcode = u8;
    type Mode = AddrMode;

    const ENDIAN: Endian = Endian::Big;
    const UNIT: AddressUnit = AddressUnit::Byte;

    fn cpu_name(&self) -> &'static str {
        self.variant.name()
    }

    fn pages(&self) -> &'static [&'static EntryPage<u8, AddrMode>] {
        match self.variant {
            Variant::Mc6800 => table::MC6800_PAGES,
            Variant::Mc6801 => table::MC6801_PAGES,
            Variant::Hd6301 => table::HD6301_PAGES,
        }
    }

    fn accept_mode(&self, supplied: AddrMode, table: AddrMode) -> bool {
        accept_mode(supplied, table)
    }
}

fn accept_mode(supplied: AddrMode, table: AddrMode) -> bool {
    use AddrMode::*;
    match supplied {
        Imm => matches!(table, Imm | Imm16),
        Dir => matches!(table, Dir | Ext | Rel),
        Ext => matches!(table, Ext | Rel),
        _ => supplied == table,
    }
}

pub fn table(variant: Variant) -> InsnTable<Mc6800> {
    InsnTable::new(Mc6800::new(variant))
}

pub(crate) fn modules() -> Vec<CpuModule> {
    vec![
        CpuModule {
            name: "MC6800",
            aliases: &["6800"],
            family: "MC6800",
            assembler: || Box::new(table(Variant::Mc6800)),
            disassembler: || Box::new(table(Variant::Mc6800)),
        },
        CpuModule {
            name: "MC6801",
            aliases: &["6801"],
            family: "MC6800",
            assembler: || Box::new(table(Variant::Mc6801)),
            disassembler: || Box::new(table(Variant::Mc6801)),
        },
        CpuModule {
            name: "HD6301",
            aliases: &["6301"],
            family: "MC6800",
            assembler: || Box::new(table(Variant::Hd6301)),
            disassembler: || Box::new(table(Variant::Hd6301)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_addresses_fit_longer_forms() {
        assert!(accept_mode(AddrMode::Dir, AddrMode::Ext));
        assert!(accept_mode(AddrMode::Dir, AddrMode::Rel));
        assert!(!accept_mode(AddrMode::Ext, AddrMode::Dir));
        assert!(accept_mode(AddrMode::Imm, AddrMode::Imm16));
        assert!(!accept_mode(AddrMode::Imm, AddrMode::Dir));
        assert!(!accept_mode(AddrMode::Idx, AddrMode::Ext));
        assert!(accept_mode(AddrMode::None, AddrMode::None));
    }

    #[test]
    fn later_variants_search_their_own_page_first() {
        let pages = Mc6800::new(Variant::Hd6301).pages();
        assert_eq!(pages.len(), 3);
        assert_eq!(Mc6800::new(Variant::Mc6801).pages().len(), 2);
        assert_eq!(Mc6800::new(Variant::Mc6800).pages().len(), 1);
    }
}
