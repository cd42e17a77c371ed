//! Verse server library
//!
//! Wiring between the in-memory collaborator environment, the queue
//! controller, and the trending engine. The binary in `main.rs` drives
//! this through its CLI.

pub mod config;
pub mod error;
pub mod state;
