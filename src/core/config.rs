//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and the state each event leads to. Configurations are plain
//! data: they can be built in code, with [`ConfigBuilder`](crate::builder::ConfigBuilder),
//! with the [`fsm_config!`](crate::fsm_config) macro, or deserialized from JSON.

use crate::error::FsmError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a state. Compared by exact equality only.
pub type StateId = String;

/// Identifier of an event. Compared by exact equality only.
pub type EventId = String;

/// Outgoing transitions of a single state.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::StateDescriptor;
///
/// let off = StateDescriptor::new().with_transition("turnOn", "on");
///
/// assert_eq!(off.target("turnOn"), Some("on"));
/// assert!(off.target("turnOff").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescriptor {
    /// Event identifier to target state identifier
    #[serde(default)]
    pub transitions: HashMap<EventId, StateId>,
}

impl StateDescriptor {
    /// Create a descriptor with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated descriptor.
    ///
    /// A second transition for the same event replaces the first.
    pub fn with_transition(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state reacts to it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state reacts to `event`.
    pub fn has_transition(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// State identifiers mapped to their descriptors, in declaration order.
///
/// Lookups are hashed; iteration follows the order in which states were
/// first inserted. Re-inserting a state replaces its descriptor without
/// moving it.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::{StateDescriptor, StateTable};
///
/// let mut table = StateTable::new();
/// table.insert("red", StateDescriptor::new().with_transition("next", "green"));
/// table.insert("green", StateDescriptor::new().with_transition("next", "yellow"));
/// table.insert("yellow", StateDescriptor::new().with_transition("next", "red"));
///
/// let ids: Vec<&str> = table.ids().collect();
/// assert_eq!(ids, vec!["red", "green", "yellow"]);
/// assert!(table.contains("green"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateTable {
    order: Vec<StateId>,
    entries: HashMap<StateId, StateDescriptor>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or replace a state, returning the descriptor it replaced.
    pub fn insert(
        &mut self,
        id: impl Into<StateId>,
        descriptor: StateDescriptor,
    ) -> Option<StateDescriptor> {
        let id = id.into();
        if !self.entries.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.entries.insert(id, descriptor)
    }

    /// Descriptor of state `id`, if declared.
    pub fn get(&self, id: &str) -> Option<&StateDescriptor> {
        self.entries.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut StateDescriptor> {
        self.entries.get_mut(id)
    }

    /// Whether state `id` is declared.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// State identifiers in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// States and their descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDescriptor)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|d| (id.as_str(), d)))
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no state is declared.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K: Into<StateId>> FromIterator<(K, StateDescriptor)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (K, StateDescriptor)>>(iter: I) -> Self {
        let mut table = StateTable::new();
        for (id, descriptor) in iter {
            table.insert(id, descriptor);
        }
        table
    }
}

impl Serialize for StateTable {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, descriptor) in self.iter() {
            map.serialize_entry(id, descriptor)?;
        }
        map.end()
    }
}

struct StateTableVisitor;

impl<'de> Visitor<'de> for StateTableVisitor {
    type Value = StateTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of state identifiers to state descriptors")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StateTable, A::Error> {
        let mut table = StateTable::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((id, descriptor)) = access.next_entry::<StateId, StateDescriptor>()? {
            table.insert(id, descriptor);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StateTableVisitor)
    }
}

/// Complete description of a state machine.
///
/// `initial` is expected to name a state in `states`. This is not checked:
/// a machine whose initial state is undeclared simply has no transitions
/// available from it.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{
///     "initial": "off",
///     "states": {
///         "off": { "transitions": { "turnOn": "on" } },
///         "on":  { "transitions": { "turnOff": "off" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "off");
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in and returns to on reset
    pub initial: StateId,
    /// Declared states, in declaration order
    #[serde(default)]
    pub states: StateTable,
}

impl MachineConfig {
    /// Create a configuration with an initial state and no declared states.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: StateTable::new(),
        }
    }

    /// Declare a state, returning the updated configuration.
    pub fn with_state(mut self, id: impl Into<StateId>, descriptor: StateDescriptor) -> Self {
        self.states.insert(id, descriptor);
        self
    }

    /// Parse a configuration from a JSON document.
    ///
    /// A `null` document is reported as a missing configuration; anything
    /// else that does not match the configuration shape is malformed.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        serde_json::from_str::<Option<MachineConfig>>(json)
            .map_err(|e| FsmError::MalformedConfiguration(e.to_string()))?
            .ok_or(FsmError::MissingConfiguration)
    }

    /// Target of `event` from `state`, if both are declared.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state).and_then(|s| s.target(event))
    }
}
