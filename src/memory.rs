use serde::{Deserialize, Serialize};

/// Byte order of multi-byte opcodes and operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endian {
    Big,
    Little,
}

/// Addressable unit of an architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressUnit {
    Byte = 1,
    Word = 2,
}

impl AddressUnit {
    pub fn bytes(self) -> u32 {
        self as u32
    }
}

/// Read cursor the disassembler consumes instructions from.
pub trait DisMemory {
    /// Address of the next unread byte, in address units.
    fn address(&self) -> u32;
    fn has_next(&self) -> bool;
    fn read_byte(&mut self) -> Option<u8>;
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ArrayMemory {
    pub mem: Vec<u8>,
    pub base: u32,
    pub unit: AddressUnit,
    pos: usize,
}

impl ArrayMemory {
    pub fn new(base: u32, mem: Vec<u8>, unit: AddressUnit) -> Self {
        Self {
            mem,
            base,
            unit,
            pos: 0,
        }
    }

    /// Word-addressed memory holding `words` in `endian` byte order.
    pub fn from_words(base: u32, words: &[u16], endian: Endian) -> Self {
        let mut mem = Vec::with_capacity(words.len() * 2);
        for &w in words {
            match endian {
                Endian::Big => mem.extend_from_slice(&w.to_be_bytes()),
                Endian::Little => mem.extend_from_slice(&w.to_le_bytes()),
            }
        }
        Self::new(base, mem, AddressUnit::Word)
    }

    /// Moves the cursor to `addr`; returns false when `addr` is not mapped.
    pub fn seek(&mut self, addr: u32) -> bool {
        let Some(off) = addr.checked_sub(self.base) else {
            return false;
        };
        let off = off as usize * self.unit.bytes() as usize;
        if off > self.mem.len() {
            return false;
        }
        self.pos = off;
        true
    }

    /// One past the last mapped address.
    pub fn end(&self) -> u32 {
        self.base
            .wrapping_add((self.mem.len() as u32).div_ceil(self.unit.bytes()))
    }
}

impl DisMemory for ArrayMemory {
    fn address(&self) -> u32 {
        self.base
            .wrapping_add(self.pos as u32 / self.unit.bytes())
    }

    fn has_next(&self) -> bool {
        self.pos < self.mem.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        let b = *self.mem.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_memory_counts_words() {
        let mut mem = ArrayMemory::from_words(0x789, &[0xF800, 0x0FED], Endian::Big);
        assert_eq!(mem.address(), 0x789);
        assert_eq!(mem.read_byte(), Some(0xF8));
        assert_eq!(mem.read_byte(), Some(0x00));
        assert_eq!(mem.address(), 0x78A);
        assert_eq!(mem.end(), 0x78B);
        assert!(mem.seek(0x789));
        assert_eq!(mem.read_byte(), Some(0xF8));
        assert!(!mem.seek(0x788));
        assert!(!mem.seek(0x78C));
    }

    #[test]
    fn exhausted_memory_reads_none() {
        let mut mem = ArrayMemory::new(0x1000, vec![0x01], AddressUnit::Byte);
        assert!(mem.has_next());
        assert_eq!(mem.read_byte(), Some(0x01));
        assert!(!mem.has_next());
        assert_eq!(mem.read_byte(), None);
        assert_eq!(mem.address(), 0x1001);
    }
}
