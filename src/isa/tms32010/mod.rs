//! TMS32010 family: 16-bit instruction words, word-addressed program memory.

mod asm;
mod dis;
mod table;

use bitflags::bitflags;

use crate::entry::{AddressingMode, Entry, EntryPage};
use crate::memory::{AddressUnit, Endian};
use crate::registry::CpuModule;
use crate::table::{masked_equal, InsnSet, InsnTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AddrMode {
    None = 0,
    /// Data memory address: direct `dma` or one of the indirect forms.
    Mam = 1,
    Ar = 2,
    Pa = 3,
    /// Left shift fixed at zero.
    Ls0 = 4,
    /// Left shift of 0, 1 or 4.
    Ls3 = 5,
    /// Left shift 0..15.
    Ls4 = 6,
    /// Next auxiliary register pointer after an indirect access.
    Narp = 7,
    Im1 = 8,
    Im8 = 9,
    Im13 = 10,
    /// Program memory address in the second word.
    Pma = 11,
    /// `*`
    Arp = 12,
    /// `*+`
    Inc = 13,
    /// `*-`
    Dec = 14,
    /// A bare number, before the table decides what it is.
    Const = 15,
}

const MODES: [AddrMode; 16] = [
    AddrMode::None,
    AddrMode::Mam,
    AddrMode::Ar,
    AddrMode::Pa,
    AddrMode::Ls0,
    AddrMode::Ls3,
    AddrMode::Ls4,
    AddrMode::Narp,
    AddrMode::Im1,
    AddrMode::Im8,
    AddrMode::Im13,
    AddrMode::Pma,
    AddrMode::Arp,
    AddrMode::Inc,
    AddrMode::Dec,
    AddrMode::Const,
];

impl AddressingMode for AddrMode {
    const NONE: Self = AddrMode::None;

    fn from_bits(bits: u8) -> Self {
        MODES.get(bits as usize).copied().unwrap_or(AddrMode::None)
    }
}

impl AddrMode {
    fn within(self, lo: AddrMode, hi: AddrMode) -> bool {
        (lo as u8..=hi as u8).contains(&(self as u8))
    }
}

bitflags! {
    /// Low byte of an instruction using indirect addressing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Indirect: u16 {
        const INDIRECT = 0x80;
        const INC = 0x20;
        const DEC = 0x10;
        /// ARP is left unchanged; the low bits carry no next ARP.
        const KEEP_ARP = 0x08;
    }
}

impl Indirect {
    /// `*`, `*+` and `*-` as encoded without a next ARP.
    pub fn of(mode: AddrMode) -> Option<Indirect> {
        match mode {
            AddrMode::Arp => Some(Indirect::INDIRECT | Indirect::KEEP_ARP),
            AddrMode::Inc => Some(Indirect::INDIRECT | Indirect::INC | Indirect::KEEP_ARP),
            AddrMode::Dec => Some(Indirect::INDIRECT | Indirect::DEC | Indirect::KEEP_ARP),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Tms32010,
    Tms32015,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Tms32010 => "TMS32010",
            Variant::Tms32015 => "TMS32015",
        }
    }

    /// Highest direct data address.
    pub fn max_dma(self) -> u16 {
        match self {
            Variant::Tms32010 => 0x8F,
            Variant::Tms32015 => 0xFF,
        }
    }

    /// Highest auxiliary register number (AR0 and AR1 on both parts).
    pub const MAX_AR: u16 = 1;

    /// Low-byte bits holding the next ARP.
    const NARP_MASK: u16 = 0x01;

    /// Indirect low-byte bits that must be clear.
    const RESERVED_INDIRECT: u16 = 0x40 | (0x07 & !Self::NARP_MASK);
}

pub struct Tms32010 {
    variant: Variant,
}

impl Tms32010 {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    fn valid_field(&self, opcode: u16, mode: AddrMode) -> bool {
        let field = (opcode >> 8) & 7;
        match mode {
            AddrMode::Mam if opcode & 0x80 != 0 => {
                let low = opcode & 0xFF;
                let ind = Indirect::from_bits_retain(low);
                low & Variant::RESERVED_INDIRECT == 0
                    && !ind.contains(Indirect::INC | Indirect::DEC)
                    && !(ind.contains(Indirect::KEEP_ARP) && low & Variant::NARP_MASK != 0)
            }
            AddrMode::Ar => field <= Variant::MAX_AR,
            AddrMode::Ls0 => field == 0,
            AddrMode::Ls3 => matches!(field, 0 | 1 | 4),
            _ => true,
        }
    }
}

impl InsnSet for Tms32010 {
    type Opcode = u16;
    type Mode = AddrMode;

    const ENDIAN: Endian = Endian::Big;
    const UNIT: AddressUnit = AddressUnit::Word;

    fn cpu_name(&self) -> &'static str {
        self.variant.name()
    }

    fn pages(&self) -> &'static [&'static EntryPage<u16, AddrMode>] {
        table::PAGES
    }

    fn accept_mode(&self, supplied: AddrMode, table: AddrMode) -> bool {
        accept_mode(supplied, table)
    }

    fn match_opcode(&self, opcode: u16, entry: &Entry<u16, AddrMode>) -> bool {
        masked_equal(opcode, entry)
            && entry.modes().iter().all(|&mode| self.valid_field(opcode, mode))
    }
}

fn accept_mode(supplied: AddrMode, table: AddrMode) -> bool {
    if supplied == table {
        return true;
    }
    match supplied {
        AddrMode::None => table.within(AddrMode::Ls0, AddrMode::Narp),
        AddrMode::Arp | AddrMode::Inc | AddrMode::Dec => table == AddrMode::Mam,
        AddrMode::Const => table == AddrMode::Mam || table.within(AddrMode::Pa, AddrMode::Pma),
        _ => false,
    }
}

pub fn table(variant: Variant) -> InsnTable<Tms32010> {
    InsnTable::new(Tms32010::new(variant))
}

pub(crate) fn modules() -> Vec<CpuModule> {
    vec![
        CpuModule {
            name: "TMS32010",
            aliases: &["32010"],
            family: "TMS32010",
            assembler: || Box::new(table(Variant::Tms32010)),
            disassembler: || Box::new(table(Variant::Tms32010)),
        },
        CpuModule {
            name: "TMS32015",
            aliases: &["32015"],
            family: "TMS32010",
            assembler: || Box::new(table(Variant::Tms32015)),
            disassembler: || Box::new(table(Variant::Tms32015)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_tags_round_trip() {
        for mode in MODES {
            assert_eq!(AddrMode::from_bits(mode as u8), mode);
        }
        assert_eq!(AddrMode::from_bits(0x1F), AddrMode::None);
    }

    #[test]
    fn omitted_operands_fill_optional_positions_only() {
        assert!(accept_mode(AddrMode::None, AddrMode::Ls4));
        assert!(accept_mode(AddrMode::None, AddrMode::Narp));
        assert!(!accept_mode(AddrMode::None, AddrMode::Mam));
        assert!(!accept_mode(AddrMode::None, AddrMode::Pma));
        assert!(accept_mode(AddrMode::Inc, AddrMode::Mam));
        assert!(!accept_mode(AddrMode::Inc, AddrMode::Ls4));
        assert!(accept_mode(AddrMode::Const, AddrMode::Pa));
        assert!(accept_mode(AddrMode::Const, AddrMode::Im13));
        assert!(!accept_mode(AddrMode::Const, AddrMode::Ar));
        assert!(!accept_mode(AddrMode::Ar, AddrMode::Const));
    }

    #[test]
    fn reserved_indirect_bits_do_not_match() {
        let isa = Tms32010::new(Variant::Tms32010);
        assert!(isa.valid_field(0x00A8, AddrMode::Mam)); // *+
        assert!(isa.valid_field(0x00A1, AddrMode::Mam)); // *+,0,1
        assert!(!isa.valid_field(0x00C8, AddrMode::Mam)); // bit 6
        assert!(!isa.valid_field(0x0082, AddrMode::Mam)); // AR2
        assert!(!isa.valid_field(0x00B8, AddrMode::Mam)); // INC and DEC
        assert!(!isa.valid_field(0x0089, AddrMode::Mam)); // KEEP_ARP with next ARP
        assert!(isa.valid_field(0x0006, AddrMode::Mam)); // direct
        assert!(!isa.valid_field(0x3200, AddrMode::Ar));
        assert!(!isa.valid_field(0x5300, AddrMode::Ls3));
        assert!(isa.valid_field(0x5400, AddrMode::Ls3));
    }

    #[test]
    fn both_parts_share_auxiliary_registers() {
        assert_eq!(Variant::RESERVED_INDIRECT, 0x46);
        for variant in [Variant::Tms32010, Variant::Tms32015] {
            let isa = Tms32010::new(variant);
            assert!(isa.valid_field(0x3100, AddrMode::Ar));
            assert!(!isa.valid_field(0x3200, AddrMode::Ar));
            assert!(isa.valid_field(0x0081, AddrMode::Mam));
            assert!(!isa.valid_field(0x0082, AddrMode::Mam));
        }
    }
}
