//! CPU registry.
//!
//! Maps CPU names to assembler and disassembler constructors. The registry is
//! a plain value owned by the caller; `with_defaults` fills it with every
//! architecture this crate ships.

use tracing::debug;

use crate::assembler::Assembler;
use crate::disassembler::Disassembler;
use crate::error::RegistryError;
use crate::isa::{mc6800, tms32010};

pub type AsmFactory = fn() -> Box<dyn Assembler>;
pub type DisFactory = fn() -> Box<dyn Disassembler>;

#[derive(Clone, Copy)]
pub struct CpuModule {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub family: &'static str,
    pub assembler: AsmFactory,
    pub disassembler: DisFactory,
}

impl CpuModule {
    fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Debug for CpuModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuModule")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("family", &self.family)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    cpus: Vec<CpuModule>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for module in tms32010::modules().into_iter().chain(mc6800::modules()) {
            registry.register(module);
        }
        registry
    }

    /// Adds `module`. A module with the same name is replaced in place;
    /// otherwise later registrations take precedence on alias lookup.
    pub fn register(&mut self, module: CpuModule) {
        match self.cpus.iter_mut().find(|m| m.name.eq_ignore_ascii_case(module.name)) {
            Some(slot) => {
                debug!(cpu = module.name, "replacing registered cpu");
                *slot = module;
            }
            None => self.cpus.push(module),
        }
    }

    /// Registered modules in registration order.
    pub fn cpus(&self) -> impl Iterator<Item = &CpuModule> {
        self.cpus.iter()
    }

    pub fn find(&self, name: &str) -> Result<&CpuModule, RegistryError> {
        let found = self.cpus.iter().rev().find(|m| m.answers_to(name));
        debug!(cpu = name, found = found.map(|m| m.name), "registry lookup");
        found.ok_or_else(|| RegistryError::UnknownCpu(name.to_string()))
    }

    pub fn assembler(&self, name: &str) -> Result<Box<dyn Assembler>, RegistryError> {
        self.find(name).map(|m| (m.assembler)())
    }

    pub fn disassembler(&self, name: &str) -> Result<Box<dyn Disassembler>, RegistryError> {
        self.find(name).map(|m| (m.disassembler)())
    }
}
