pub mod assembler;
pub mod config;
pub mod disassembler;
pub mod entry;
pub mod error;
pub mod format;
pub mod insn;
pub mod memory;
pub mod registry;
pub mod scanner;
pub mod table;

pub mod isa {
    pub mod mc6800; // MC6800, MC6801, HD6301
    pub mod tms32010; // TMS32010, TMS32015
}

pub use assembler::Assembler;
pub use config::Options;
pub use disassembler::Disassembler;
pub use error::{AsmError, ErrorKind, RegistryError, SearchError};
pub use insn::{AsmInsn, DisInsn};
pub use memory::{AddressUnit, ArrayMemory, DisMemory, Endian};
pub use registry::Registry;
pub use table::InsnTable;
