//! Service implementations
//!
//! Production implementations of the collaborator traits. These are the
//! implementations the `recycle` binary wires into the orchestrator.

pub mod memory;
pub mod records;

#[cfg(test)]
mod tests;

pub use memory::InMemoryMemory;
pub use records::{JsonRecordStore, RecordCatalog};
