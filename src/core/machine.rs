//! The state machine engine.

use super::config::{MachineConfig, StateId};
use super::history::TransitionHistory;
use crate::error::FsmError;
use tracing::{debug, trace};

/// Finite state machine driven by a [`MachineConfig`].
///
/// Tracks the current state and an undo/redo history of the states it has
/// left. Forward moves (`change_state`, `trigger`) are validated against the
/// configuration; `undo`, `redo` and `reset` are not.
///
/// # Example
///
/// ```rust
/// use fsm_engine::{fsm_config, StateMachine};
///
/// let mut fsm = StateMachine::new(fsm_config! {
///     initial: "off",
///     "off" => { "turnOn" => "on" },
///     "on" => { "turnOff" => "off" },
/// });
///
/// fsm.trigger("turnOn").unwrap();
/// assert_eq!(fsm.state(), "on");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "off");
///
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "on");
///
/// fsm.trigger("turnOff").unwrap();
/// assert!(!fsm.redo());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: StateId,
    history: TransitionHistory,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// The initial state is taken as given, even if it is not declared.
    pub fn new(config: MachineConfig) -> Self {
        let current = config.initial.clone();
        Self {
            config,
            current,
            history: TransitionHistory::new(),
        }
    }

    /// Create a machine from a JSON configuration document.
    ///
    /// ```rust
    /// use fsm_engine::{FsmError, StateMachine};
    ///
    /// let fsm = StateMachine::from_json(r#"{"initial": "idle", "states": {"idle": {}}}"#).unwrap();
    /// assert_eq!(fsm.state(), "idle");
    ///
    /// assert_eq!(StateMachine::from_json("null").unwrap_err(), FsmError::MissingConfiguration);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        MachineConfig::from_json(json).map(Self::new)
    }

    /// Active state.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// Configuration the machine was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Undo and redo stacks.
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Move directly to `target`.
    ///
    /// The state being left is recorded for undo and any pending redo is
    /// discarded. Fails with [`FsmError::InvalidState`] if `target` is not a
    /// declared state, in which case nothing changes.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        self.move_to(target, None)
    }

    /// Fire `event` from the current state.
    ///
    /// Equivalent to `change_state` with the event's target. Fails with
    /// [`FsmError::InvalidTransition`] if the current state has no transition
    /// for `event` (including when the current state itself is undeclared).
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self.config.target(&self.current, event) else {
            return Err(FsmError::InvalidTransition {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };

        let target = target.to_string();
        self.move_to(&target, Some(event))
    }

    /// Validated forward move, logged once after it has been applied.
    fn move_to(&mut self, target: &str, event: Option<&str>) -> Result<(), FsmError> {
        if !self.config.states.contains(target) {
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }

        let previous = std::mem::replace(&mut self.current, target.to_string());
        debug!(from = %previous, to = %target, event = ?event, "state changed");
        self.history.record(previous);
        Ok(())
    }

    /// Whether `trigger(event)` would find a transition from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.config.target(&self.current, event).is_some()
    }

    /// Events with a transition out of the current state, sorted.
    pub fn events(&self) -> Vec<&str> {
        let mut events: Vec<&str> = self
            .config
            .states
            .get(&self.current)
            .map(|s| s.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default();
        events.sort_unstable();
        events
    }

    /// Return to the initial state.
    ///
    /// Undo and redo entries are left untouched, and the initial state is
    /// not checked against the declared states.
    pub fn reset(&mut self) {
        trace!(from = %self.current, to = %self.config.initial, "reset");
        self.current = self.config.initial.clone();
    }

    /// Declared states, in declaration order.
    ///
    /// With `Some(event)`, only the states that have a transition for that
    /// event. An empty event identifier is a filter like any other.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.states.ids().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, descriptor)| descriptor.has_transition(event))
                .map(|(id, _)| id)
                .collect(),
        }
    }

    /// Go back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.step_back(self.current.clone()) else {
            return false;
        };
        trace!(from = %self.current, to = %previous, "undo");
        self.current = previous;
        true
    }

    /// Re-apply the most recently undone state. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.step_forward(self.current.clone()) else {
            return false;
        };
        trace!(from = %self.current, to = %next, "redo");
        self.current = next;
        true
    }

    /// Whether `undo` would move the machine.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether `redo` would move the machine.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget the undo history. Pending redo entries survive.
    pub fn clear_history(&mut self) {
        trace!(entries = self.history.undo_stack().len(), "clearing history");
        self.history.clear_undo();
    }
}

impl From<MachineConfig> for StateMachine {
    fn from(config: MachineConfig) -> Self {
        Self::new(config)
    }
}

impl TryFrom<Option<MachineConfig>> for StateMachine {
    type Error = FsmError;

    fn try_from(config: Option<MachineConfig>) -> Result<Self, Self::Error> {
        config.map(Self::new).ok_or(FsmError::MissingConfiguration)
    }
}
