//! Per-instruction records filled in by the assembler and disassembler.

use crate::config::Options;
use crate::entry::OpCode;
use crate::error::{AsmError, ErrorKind};
use crate::memory::{DisMemory, Endian};

/// An instruction being assembled at `address`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmInsn {
    address: u32,
    bytes: Vec<u8>,
    error: Option<AsmError>,
}

impl AsmInsn {
    pub fn new(address: u32) -> Self {
        Self {
            address,
            bytes: Vec::new(),
            error: None,
        }
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn length(&self) -> usize {
        self.bytes.len()
    }

    pub fn error(&self) -> Option<AsmError> {
        self.error
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Records `error` unless an earlier one is already recorded.
    pub fn set_error(&mut self, error: AsmError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn emit_byte(&mut self, b: u8) {
        self.bytes.push(b);
    }

    pub fn emit_u16(&mut self, v: u16, endian: Endian) {
        match endian {
            Endian::Big => self.bytes.extend_from_slice(&v.to_be_bytes()),
            Endian::Little => self.bytes.extend_from_slice(&v.to_le_bytes()),
        }
    }

    pub fn emit_opcode<O: OpCode>(&mut self, code: O, endian: Endian) {
        let v = code.to_u16().unwrap_or(0);
        match O::BYTES {
            1 => self.emit_byte(v as u8),
            _ => self.emit_u16(v, endian),
        }
    }
}

/// An instruction decoded from memory at `address`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisInsn {
    address: u32,
    bytes: Vec<u8>,
    name: &'static str,
    operands: String,
    error: Option<AsmError>,
}

impl DisInsn {
    pub fn new(address: u32) -> Self {
        Self {
            address,
            bytes: Vec::new(),
            name: "",
            operands: String::new(),
            error: None,
        }
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    /// Bytes consumed so far.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn length(&self) -> usize {
        self.bytes.len()
    }

    pub fn error(&self) -> Option<AsmError> {
        self.error
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn set_error(&mut self, error: AsmError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn set_name(&mut self, name: &'static str) {
        self.name = name;
    }

    pub fn operands(&self) -> &str {
        &self.operands
    }

    pub fn set_operands(&mut self, operands: String) {
        self.operands = operands;
    }

    /// Reads one byte; an exhausted cursor yields 0 and records `NoMemory`.
    pub fn read_byte(&mut self, memory: &mut dyn DisMemory) -> u8 {
        match memory.read_byte() {
            Some(b) => {
                self.bytes.push(b);
                b
            }
            None => {
                self.set_error(AsmError::new(ErrorKind::NoMemory, 0));
                0
            }
        }
    }

    pub fn read_u16(&mut self, memory: &mut dyn DisMemory, endian: Endian) -> u16 {
        let b0 = self.read_byte(memory);
        let b1 = self.read_byte(memory);
        match endian {
            Endian::Big => u16::from_be_bytes([b0, b1]),
            Endian::Little => u16::from_le_bytes([b0, b1]),
        }
    }

    pub fn read_opcode<O: OpCode>(&mut self, memory: &mut dyn DisMemory, endian: Endian) -> O {
        let v = match O::BYTES {
            1 => u16::from(self.read_byte(memory)),
            _ => self.read_u16(memory, endian),
        };
        O::from_mask(v)
    }

    /// Mnemonic and operands, or an empty string for an unknown instruction.
    pub fn text(&self) -> String {
        if self.operands.is_empty() {
            self.name.to_string()
        } else {
            format!("{} {}", self.name, self.operands)
        }
    }

    pub fn text_with(&self, options: &Options) -> String {
        if options.lowercase {
            self.text().to_ascii_lowercase()
        } else {
            self.text()
        }
    }
}
