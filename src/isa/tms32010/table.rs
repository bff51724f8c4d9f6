use crate::entry::{CodeFormat, Entry, EntryPage};

use super::AddrMode::{self, *};

use CodeFormat::*;

type E = Entry<u16, AddrMode>;

const fn e0(opc: u16, name: &'static str) -> E {
    crate::entry::e0(opc, name)
}

const fn e1(opc: u16, cf: CodeFormat, name: &'static str, m1: AddrMode) -> E {
    crate::entry::e1(opc, cf, name, m1 as u8)
}

const fn e2(opc: u16, cf: CodeFormat, name: &'static str, m1: AddrMode, m2: AddrMode) -> E {
    crate::entry::e2(opc, cf, name, m1 as u8, m2 as u8)
}

const fn e3(opc: u16, cf: CodeFormat, name: &'static str, m1: AddrMode, m2: AddrMode, m3: AddrMode) -> E {
    crate::entry::e3(opc, cf, name, m1 as u8, m2 as u8, m3 as u8)
}

static BASE: &[E] = &[
    e3(0x0000, Cf0FFF, "ADD", Mam, Ls4, Narp),
    e3(0x1000, Cf0FFF, "SUB", Mam, Ls4, Narp),
    e3(0x2000, Cf0FFF, "LAC", Mam, Ls4, Narp),
    e3(0x3000, Cf07FF, "SAR", Ar, Mam, Narp),
    e3(0x3800, Cf07FF, "LAR", Ar, Mam, Narp),
    e3(0x4000, Cf07FF, "IN", Mam, Pa, Narp),
    e3(0x4800, Cf07FF, "OUT", Mam, Pa, Narp),
    e3(0x5000, Cf07FF, "SACL", Mam, Ls0, Narp),
    e3(0x5800, Cf07FF, "SACH", Mam, Ls3, Narp),
    e2(0x6000, Cf00FF, "ADDH", Mam, Narp),
    e2(0x6100, Cf00FF, "ADDS", Mam, Narp),
    e2(0x6200, Cf00FF, "SUBH", Mam, Narp),
    e2(0x6300, Cf00FF, "SUBS", Mam, Narp),
    e2(0x6400, Cf00FF, "SUBC", Mam, Narp),
    e2(0x6500, Cf00FF, "ZALH", Mam, Narp),
    e2(0x6600, Cf00FF, "ZALS", Mam, Narp),
    e2(0x6700, Cf00FF, "TBLR", Mam, Narp),
    // MAR *,k: listed first so the decoder prefers it
    e1(0x6880, Cf0001, "LARP", Im1),
    e2(0x6800, Cf00FF, "MAR", Mam, Narp),
    e2(0x6900, Cf00FF, "DMOV", Mam, Narp),
    e2(0x6A00, Cf00FF, "LT", Mam, Narp),
    e2(0x6B00, Cf00FF, "LTD", Mam, Narp),
    e2(0x6C00, Cf00FF, "LTA", Mam, Narp),
    e2(0x6D00, Cf00FF, "MPY", Mam, Narp),
    e1(0x6E00, Cf0001, "LDPK", Im1),
    e2(0x6F00, Cf00FF, "LDP", Mam, Narp),
    e2(0x7000, Cf07FF, "LARK", Ar, Im8),
    e2(0x7800, Cf00FF, "XOR", Mam, Narp),
    e2(0x7900, Cf00FF, "AND", Mam, Narp),
    e2(0x7A00, Cf00FF, "OR", Mam, Narp),
    e2(0x7B00, Cf00FF, "LST", Mam, Narp),
    e2(0x7C00, Cf00FF, "SST", Mam, Narp),
    e2(0x7D00, Cf00FF, "TBLW", Mam, Narp),
    e1(0x7E00, Cf00FF, "LACK", Im8),
    e0(0x7F80, "NOP"),
    e0(0x7F81, "DINT"),
    e0(0x7F82, "EINT"),
    e0(0x7F88, "ABS"),
    e0(0x7F89, "ZAC"),
    e0(0x7F8A, "ROVM"),
    e0(0x7F8B, "SOVM"),
    e0(0x7F8C, "CALA"),
    e0(0x7F8D, "RET"),
    e0(0x7F8E, "PAC"),
    e0(0x7F8F, "APAC"),
    e0(0x7F90, "SPAC"),
    e0(0x7F9C, "PUSH"),
    e0(0x7F9D, "POP"),
    e1(0x8000, Cf1FFF, "MPYK", Im13),
    e1(0xF400, Cf0000, "BANZ", Pma),
    e1(0xF500, Cf0000, "BV", Pma),
    e1(0xF600, Cf0000, "BIOZ", Pma),
    e1(0xF800, Cf0000, "CALL", Pma),
    e1(0xF900, Cf0000, "B", Pma),
    e1(0xFA00, Cf0000, "BLZ", Pma),
    e1(0xFB00, Cf0000, "BLEZ", Pma),
    e1(0xFC00, Cf0000, "BGZ", Pma),
    e1(0xFD00, Cf0000, "BGEZ", Pma),
    e1(0xFE00, Cf0000, "BNZ", Pma),
    e1(0xFF00, Cf0000, "BZ", Pma),
];

static BASE_PAGE: EntryPage<u16, AddrMode> = EntryPage::new(BASE);

pub(super) static PAGES: &[&EntryPage<u16, AddrMode>] = &[&BASE_PAGE];
