//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{EventId, MachineConfig, StateDescriptor, StateId, StateTable};

/// Builder for [`MachineConfig`] with a fluent API.
///
/// States are declared in the order they are first mentioned, either by
/// [`state`](Self::state) or as the source of a [`transition`](Self::transition).
/// Transition targets are never declared implicitly.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: StateTable,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring a state twice keeps its transitions.
    pub fn state(mut self, id: impl Into<StateId>) -> Self {
        let id = id.into();
        if !self.states.contains(&id) {
            self.states.insert(id, StateDescriptor::new());
        }
        self
    }

    /// Add a transition from `from` on `event` to `to`, declaring `from` if needed.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        let from = from.into();
        self = self.state(from.clone());
        if let Some(descriptor) = self.states.get_mut(&from) {
            descriptor.transitions.insert(event.into(), to.into());
        }
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}
