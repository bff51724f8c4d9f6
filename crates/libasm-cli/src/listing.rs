//! Rendering of disassembled instructions for text and JSON output.

use libasm_rs::{DisInsn, ErrorKind, Options};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InsnOut {
    pub address: u32,
    pub bytes: Vec<u8>,
    pub text: String,
    pub error: Option<String>,
}

impl InsnOut {
    pub fn new(insn: &DisInsn, options: &Options) -> Self {
        Self {
            address: insn.address(),
            bytes: insn.bytes().to_vec(),
            text: text(insn, options),
            error: insn.error().map(|e| e.kind.to_string()),
        }
    }
}

/// Instruction text, or a data directive holding the raw bytes when the
/// opcode is not recognised.
pub fn text(insn: &DisInsn, options: &Options) -> String {
    let unknown = matches!(
        insn.error().map(|e| e.kind),
        Some(ErrorKind::UnknownInstruction | ErrorKind::NoMemory)
    ) && insn.name().is_empty();
    if !unknown {
        return insn.text_with(options);
    }
    let data: Vec<String> = insn.bytes().iter().map(|b| format!("${b:02X}")).collect();
    let directive = format!(".byte {}", data.join(","));
    if options.lowercase {
        directive.to_ascii_lowercase()
    } else {
        directive
    }
}

/// One listing line: `ADDR: [bytes]  text  [; error]`.
pub fn line(insn: &DisInsn, options: &Options) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:06X}: ", insn.address());
    if options.show_bytes {
        let mut bytes = String::new();
        for b in insn.bytes() {
            let _ = write!(bytes, "{b:02X} ");
        }
        let _ = write!(out, "{bytes:<12} ");
    }
    out.push_str(&text(insn, options));
    if let Some(e) = insn.error() {
        let _ = write!(out, "  ; {}", e.kind);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use libasm_rs::isa::tms32010::{table, Variant};
    use libasm_rs::{ArrayMemory, Disassembler, Endian};
    use pretty_assertions::assert_eq;

    fn decode(words: &[u16]) -> DisInsn {
        let mut mem = ArrayMemory::from_words(0x789, words, Endian::Big);
        table(Variant::Tms32010).disassemble(&mut mem)
    }

    #[test]
    fn listing_with_and_without_bytes() {
        let insn = decode(&[0xF800, 0x0FED]);
        let options = Options::default();
        assert_eq!(line(&insn, &options), "000789: F8 00 0F ED  CALL 0FEDh");
        let options = Options { show_bytes: false, lowercase: true };
        assert_eq!(line(&insn, &options), "000789: call 0fedh");
    }

    #[test]
    fn unknown_opcode_becomes_data() {
        let insn = decode(&[0x0086]);
        let options = Options { show_bytes: false, ..Options::default() };
        assert_eq!(line(&insn, &options), "000789: .byte $00,$86  ; unknown instruction");
        let out = InsnOut::new(&insn, &options);
        assert_eq!(out.error.as_deref(), Some("unknown instruction"));
        assert_eq!(out.bytes, vec![0x00, 0x86]);
    }
}
