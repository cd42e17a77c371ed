//! Verse Store
//!
//! In-memory implementations of every Verse collaborator trait, behind
//! async locks. Persistence technology is outside this workspace; this
//! crate supplies the collaborator environment for the daemon and the
//! integration suites.

#![forbid(unsafe_code)]

mod memory;

pub use memory::MemoryLibrary;
