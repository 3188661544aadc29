//! Errors raised by the state machine engine.

use thiserror::Error;

/// Errors returned by [`StateMachine`](crate::StateMachine) operations.
///
/// Every variant describes a caller mistake rather than an environmental
/// failure. The engine checks before it mutates, so a returned error always
/// leaves the machine exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsmError {
    /// No configuration was supplied at construction.
    #[error("Configuration needed to construct a state machine")]
    MissingConfiguration,

    /// The configuration document could not be parsed.
    #[error("Malformed configuration: {0}")]
    MalformedConfiguration(String),

    /// The requested target is not a declared state.
    #[error("No such state: {state:?}")]
    InvalidState { state: String },

    /// The current state has no transition for the event.
    #[error("No transition for event {event:?} from state {state:?}")]
    InvalidTransition { state: String, event: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_identifiers() {
        let err = FsmError::InvalidTransition {
            state: "off".to_string(),
            event: "turnOff".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No transition for event \"turnOff\" from state \"off\""
        );

        let err = FsmError::InvalidState {
            state: "nonexistent".to_string(),
        };
        assert_eq!(err.to_string(), "No such state: \"nonexistent\"");
    }

    #[test]
    fn missing_configuration_has_fixed_message() {
        assert_eq!(
            FsmError::MissingConfiguration.to_string(),
            "Configuration needed to construct a state machine"
        );
    }
}
