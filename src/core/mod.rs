//! Core state machine types and logic.
//!
//! This module contains the engine and the data it operates on:
//! - Declarative configuration (`MachineConfig`, `StateTable`, `StateDescriptor`)
//! - Undo/redo history of visited states
//! - The `StateMachine` engine itself
//!
//! Everything here is synchronous and in-memory.

mod config;
mod history;
mod machine;

pub use config::{EventId, MachineConfig, StateDescriptor, StateId, StateTable};
pub use history::TransitionHistory;
pub use machine::StateMachine;
