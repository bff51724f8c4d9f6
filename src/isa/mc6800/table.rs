use crate::entry::{CodeFormat, Entry, EntryPage};

use super::AddrMode::{self, *};

type E = Entry<u8, AddrMode>;

const fn inh(opc: u8, name: &'static str) -> E {
    crate::entry::e0(opc, name)
}

const fn e1(opc: u8, name: &'static str, m1: AddrMode) -> E {
    crate::entry::e1(opc, CodeFormat::Cf0000, name, m1 as u8)
}

const fn e2(opc: u8, name: &'static str, m1: AddrMode, m2: AddrMode) -> E {
    crate::entry::e2(opc, CodeFormat::Cf0000, name, m1 as u8, m2 as u8)
}

static MC6800: &[E] = &[
    inh(0x01, "NOP"),
    inh(0x06, "TAP"),
    inh(0x07, "TPA"),
    inh(0x08, "INX"),
    inh(0x09, "DEX"),
    inh(0x0A, "CLV"),
    inh(0x0B, "SEV"),
    inh(0x0C, "CLC"),
    inh(0x0D, "SEC"),
    inh(0x0E, "CLI"),
    inh(0x0F, "SEI"),
    inh(0x10, "SBA"),
    inh(0x11, "CBA"),
    inh(0x16, "TAB"),
    inh(0x17, "TBA"),
    inh(0x19, "DAA"),
    inh(0x1B, "ABA"),
    e1(0x20, "BRA", Rel),
    e1(0x22, "BHI", Rel),
    e1(0x23, "BLS", Rel),
    e1(0x24, "BCC", Rel),
    e1(0x24, "BHS", Rel),
    e1(0x25, "BCS", Rel),
    e1(0x25, "BLO", Rel),
    e1(0x26, "BNE", Rel),
    e1(0x27, "BEQ", Rel),
    e1(0x28, "BVC", Rel),
    e1(0x29, "BVS", Rel),
    e1(0x2A, "BPL", Rel),
    e1(0x2B, "BMI", Rel),
    e1(0x2C, "BGE", Rel),
    e1(0x2D, "BLT", Rel),
    e1(0x2E, "BGT", Rel),
    e1(0x2F, "BLE", Rel),
    inh(0x30, "TSX"),
    inh(0x31, "INS"),
    inh(0x32, "PULA"),
    inh(0x33, "PULB"),
    inh(0x34, "DES"),
    inh(0x35, "TXS"),
    inh(0x36, "PSHA"),
    inh(0x37, "PSHB"),
    inh(0x39, "RTS"),
    inh(0x3B, "RTI"),
    inh(0x3E, "WAI"),
    inh(0x3F, "SWI"),
    // accumulator read-modify-write
    inh(0x40, "NEGA"),
    inh(0x43, "COMA"),
    inh(0x44, "LSRA"),
    inh(0x46, "RORA"),
    inh(0x47, "ASRA"),
    inh(0x48, "ASLA"),
    inh(0x48, "LSLA"),
    inh(0x49, "ROLA"),
    inh(0x4A, "DECA"),
    inh(0x4C, "INCA"),
    inh(0x4D, "TSTA"),
    inh(0x4F, "CLRA"),
    inh(0x50, "NEGB"),
    inh(0x53, "COMB"),
    inh(0x54, "LSRB"),
    inh(0x56, "RORB"),
    inh(0x57, "ASRB"),
    inh(0x58, "ASLB"),
    inh(0x58, "LSLB"),
    inh(0x59, "ROLB"),
    inh(0x5A, "DECB"),
    inh(0x5C, "INCB"),
    inh(0x5D, "TSTB"),
    inh(0x5F, "CLRB"),
    // memory read-modify-write
    e1(0x60, "NEG", Idx),
    e1(0x70, "NEG", Ext),
    e1(0x63, "COM", Idx),
    e1(0x73, "COM", Ext),
    e1(0x64, "LSR", Idx),
    e1(0x74, "LSR", Ext),
    e1(0x66, "ROR", Idx),
    e1(0x76, "ROR", Ext),
    e1(0x67, "ASR", Idx),
    e1(0x77, "ASR", Ext),
    e1(0x68, "ASL", Idx),
    e1(0x78, "ASL", Ext),
    e1(0x68, "LSL", Idx),
    e1(0x78, "LSL", Ext),
    e1(0x69, "ROL", Idx),
    e1(0x79, "ROL", Ext),
    e1(0x6A, "DEC", Idx),
    e1(0x7A, "DEC", Ext),
    e1(0x6C, "INC", Idx),
    e1(0x7C, "INC", Ext),
    e1(0x6D, "TST", Idx),
    e1(0x7D, "TST", Ext),
    e1(0x6E, "JMP", Idx),
    e1(0x7E, "JMP", Ext),
    e1(0x6F, "CLR", Idx),
    e1(0x7F, "CLR", Ext),
    // accumulator A
    e1(0x80, "SUBA", Imm),
    e1(0x90, "SUBA", Dir),
    e1(0xA0, "SUBA", Idx),
    e1(0xB0, "SUBA", Ext),
    e1(0x81, "CMPA", Imm),
    e1(0x91, "CMPA", Dir),
    e1(0xA1, "CMPA", Idx),
    e1(0xB1, "CMPA", Ext),
    e1(0x82, "SBCA", Imm),
    e1(0x92, "SBCA", Dir),
    e1(0xA2, "SBCA", Idx),
    e1(0xB2, "SBCA", Ext),
    e1(0x84, "ANDA", Imm),
    e1(0x94, "ANDA", Dir),
    e1(0xA4, "ANDA", Idx),
    e1(0xB4, "ANDA", Ext),
    e1(0x85, "BITA", Imm),
    e1(0x95, "BITA", Dir),
    e1(0xA5, "BITA", Idx),
    e1(0xB5, "BITA", Ext),
    e1(0x86, "LDAA", Imm),
    e1(0x96, "LDAA", Dir),
    e1(0xA6, "LDAA", Idx),
    e1(0xB6, "LDAA", Ext),
    e1(0x97, "STAA", Dir),
    e1(0xA7, "STAA", Idx),
    e1(0xB7, "STAA", Ext),
    e1(0x88, "EORA", Imm),
    e1(0x98, "EORA", Dir),
    e1(0xA8, "EORA", Idx),
    e1(0xB8, "EORA", Ext),
    e1(0x89, "ADCA", Imm),
    e1(0x99, "ADCA", Dir),
    e1(0xA9, "ADCA", Idx),
    e1(0xB9, "ADCA", Ext),
    e1(0x8A, "ORAA", Imm),
    e1(0x9A, "ORAA", Dir),
    e1(0xAA, "ORAA", Idx),
    e1(0xBA, "ORAA", Ext),
    e1(0x8B, "ADDA", Imm),
    e1(0x9B, "ADDA", Dir),
    e1(0xAB, "ADDA", Idx),
    e1(0xBB, "ADDA", Ext),
    e1(0x8C, "CPX", Imm16),
    e1(0x9C, "CPX", Dir),
    e1(0xAC, "CPX", Idx),
    e1(0xBC, "CPX", Ext),
    e1(0x8D, "BSR", Rel),
    e1(0xAD, "JSR", Idx),
    e1(0xBD, "JSR", Ext),
    e1(0x8E, "LDS", Imm16),
    e1(0x9E, "LDS", Dir),
    e1(0xAE, "LDS", Idx),
    e1(0xBE, "LDS", Ext),
    e1(0x9F, "STS", Dir),
    e1(0xAF, "STS", Idx),
    e1(0xBF, "STS", Ext),
    // accumulator B
    e1(0xC0, "SUBB", Imm),
    e1(0xD0, "SUBB", Dir),
    e1(0xE0, "SUBB", Idx),
    e1(0xF0, "SUBB", Ext),
    e1(0xC1, "CMPB", Imm),
    e1(0xD1, "CMPB", Dir),
    e1(0xE1, "CMPB", Idx),
    e1(0xF1, "CMPB", Ext),
    e1(0xC2, "SBCB", Imm),
    e1(0xD2, "SBCB", Dir),
    e1(0xE2, "SBCB", Idx),
    e1(0xF2, "SBCB", Ext),
    e1(0xC4, "ANDB", Imm),
    e1(0xD4, "ANDB", Dir),
    e1(0xE4, "ANDB", Idx),
    e1(0xF4, "ANDB", Ext),
    e1(0xC5, "BITB", Imm),
    e1(0xD5, "BITB", Dir),
    e1(0xE5, "BITB", Idx),
    e1(0xF5, "BITB", Ext),
    e1(0xC6, "LDAB", Imm),
    e1(0xD6, "LDAB", Dir),
    e1(0xE6, "LDAB", Idx),
    e1(0xF6, "LDAB", Ext),
    e1(0xD7, "STAB", Dir),
    e1(0xE7, "STAB", Idx),
    e1(0xF7, "STAB", Ext),
    e1(0xC8, "EORB", Imm),
    e1(0xD8, "EORB", Dir),
    e1(0xE8, "EORB", Idx),
    e1(0xF8, "EORB", Ext),
    e1(0xC9, "ADCB", Imm),
    e1(0xD9, "ADCB", Dir),
    e1(0xE9, "ADCB", Idx),
    e1(0xF9, "ADCB", Ext),
    e1(0xCA, "ORAB", Imm),
    e1(0xDA, "ORAB", Dir),
    e1(0xEA, "ORAB", Idx),
    e1(0xFA, "ORAB", Ext),
    e1(0xCB, "ADDB", Imm),
    e1(0xDB, "ADDB", Dir),
    e1(0xEB, "ADDB", Idx),
    e1(0xFB, "ADDB", Ext),
    e1(0xCE, "LDX", Imm16),
    e1(0xDE, "LDX", Dir),
    e1(0xEE, "LDX", Idx),
    e1(0xFE, "LDX", Ext),
    e1(0xDF, "STX", Dir),
    e1(0xEF, "STX", Idx),
    e1(0xFF, "STX", Ext),
];

static MC6801: &[E] = &[
    inh(0x04, "LSRD"),
    inh(0x05, "ASLD"),
    inh(0x05, "LSLD"),
    e1(0x21, "BRN", Rel),
    inh(0x38, "PULX"),
    inh(0x3A, "ABX"),
    inh(0x3C, "PSHX"),
    inh(0x3D, "MUL"),
    e1(0x83, "SUBD", Imm16),
    e1(0x93, "SUBD", Dir),
    e1(0xA3, "SUBD", Idx),
    e1(0xB3, "SUBD", Ext),
    e1(0x9D, "JSR", Dir),
    e1(0xC3, "ADDD", Imm16),
    e1(0xD3, "ADDD", Dir),
    e1(0xE3, "ADDD", Idx),
    e1(0xF3, "ADDD", Ext),
    e1(0xCC, "LDD", Imm16),
    e1(0xDC, "LDD", Dir),
    e1(0xEC, "LDD", Idx),
    e1(0xFC, "LDD", Ext),
    e1(0xDD, "STD", Dir),
    e1(0xED, "STD", Idx),
    e1(0xFD, "STD", Ext),
];

static HD6301: &[E] = &[
    inh(0x18, "XGDX"),
    inh(0x1A, "SLP"),
    e2(0x71, "AIM", Imm, Dir),
    e2(0x61, "AIM", Imm, Idx),
    e2(0x72, "OIM", Imm, Dir),
    e2(0x62, "OIM", Imm, Idx),
    e2(0x75, "EIM", Imm, Dir),
    e2(0x65, "EIM", Imm, Idx),
    e2(0x7B, "TIM", Imm, Dir),
    e2(0x6B, "TIM", Imm, Idx),
];

static MC6800_PAGE: EntryPage<u8, AddrMode> = EntryPage::new(MC6800);
static MC6801_PAGE: EntryPage<u8, AddrMode> = EntryPage::new(MC6801);
static HD6301_PAGE: EntryPage<u8, AddrMode> = EntryPage::new(HD6301);

pub(super) static MC6800_PAGES: &[&EntryPage<u8, AddrMode>] = &[&MC6800_PAGE];
pub(super) static MC6801_PAGES: &[&EntryPage<u8, AddrMode>] = &[&MC6801_PAGE, &MC6800_PAGE];
pub(super) static HD6301_PAGES: &[&EntryPage<u8, AddrMode>] =
    &[&HD6301_PAGE, &MC6801_PAGE, &MC6800_PAGE];
