//! fsm-engine: a declarative finite state machine with undo/redo history
//!
//! A machine is described by plain data: an initial state and, for each
//! state, the events it reacts to and where they lead. The engine tracks the
//! current state, validates forward moves against that description, and keeps
//! a history of visited states that can be stepped back and forth.
//!
//! # Core Concepts
//!
//! - **Configuration**: `MachineConfig`, built in code, with `ConfigBuilder`,
//!   with `fsm_config!`, or parsed from JSON
//! - **Engine**: `StateMachine`, which applies transitions and owns the history
//! - **History**: undo/redo stacks; any forward move discards pending redo
//!
//! # Example
//!
//! ```rust
//! use fsm_engine::{ConfigBuilder, FsmError, StateMachine};
//!
//! let config = ConfigBuilder::new()
//!     .initial("off")
//!     .transition("off", "turnOn", "on")
//!     .transition("on", "turnOff", "off")
//!     .build()
//!     .unwrap();
//!
//! let mut fsm = StateMachine::new(config);
//! fsm.trigger("turnOn").unwrap();
//! assert_eq!(fsm.state(), "on");
//!
//! assert!(matches!(
//!     fsm.change_state("nonexistent"),
//!     Err(FsmError::InvalidState { .. })
//! ));
//! assert_eq!(fsm.state(), "on");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "off");
//! ```

pub mod builder;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{MachineConfig, StateDescriptor, StateMachine};
pub use error::FsmError;
