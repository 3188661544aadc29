//! Builder API for ergonomic configuration.
//!
//! This module provides a fluent builder and a macro for creating machine
//! configurations with minimal boilerplate.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;

use crate::core::MachineConfig;

/// Create a configuration where one event steps through `states` in order,
/// wrapping from the last back to the first. The first state is initial.
///
/// # Example
///
/// ```
/// use fsm_engine::builder::cycle;
/// use fsm_engine::StateMachine;
///
/// let config = cycle("next", &["red", "green", "yellow"]).unwrap();
/// let mut light = StateMachine::new(config);
///
/// light.trigger("next").unwrap();
/// light.trigger("next").unwrap();
/// light.trigger("next").unwrap();
/// assert_eq!(light.state(), "red");
/// ```
pub fn cycle(event: &str, states: &[&str]) -> Result<MachineConfig, BuildError> {
    let first = states.first().ok_or(BuildError::NoStates)?;

    let next = states.iter().skip(1).chain(std::iter::once(first));
    states
        .iter()
        .zip(next)
        .fold(ConfigBuilder::new().initial(*first), |builder, (from, to)| {
            builder.transition(*from, event, *to)
        })
        .build()
}
