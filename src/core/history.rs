//! Undo/redo transition history.
//!
//! The history is a pair of stacks. Moving forward records the state being
//! left on the undo stack and forgets everything that could be redone.
//! Stepping back and forth only shuttles recorded states between the two
//! stacks; nothing here knows about the configuration.

use super::config::StateId;
use serde::{Deserialize, Serialize};

/// Undo and redo stacks of previously active states.
///
/// Both stacks are most-recent-last.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::TransitionHistory;
///
/// let mut history = TransitionHistory::new();
/// history.record("off".to_string());
///
/// // Currently "on": stepping back yields "off" and remembers "on" for redo
/// assert_eq!(history.step_back("on".to_string()), Some("off".to_string()));
/// assert_eq!(history.redo_stack(), ["on".to_string()]);
///
/// assert_eq!(history.step_forward("off".to_string()), Some("on".to_string()));
/// assert!(history.redo_stack().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionHistory {
    undo: Vec<StateId>,
    redo: Vec<StateId>,
}

impl TransitionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state being left by a forward move.
    ///
    /// Clears the redo stack: redo is only available directly after undo.
    pub fn record(&mut self, previous: StateId) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Step back from `current`.
    ///
    /// Returns the state to restore, or `None` (leaving the history
    /// untouched) when there is nothing to undo.
    pub fn step_back(&mut self, current: StateId) -> Option<StateId> {
        let restored = self.undo.pop()?;
        self.redo.push(current);
        Some(restored)
    }

    /// Step forward from `current`, replaying the most recently undone state.
    pub fn step_forward(&mut self, current: StateId) -> Option<StateId> {
        let restored = self.redo.pop()?;
        self.undo.push(current);
        Some(restored)
    }

    /// Forget the undo stack. The redo stack is kept.
    pub fn clear_undo(&mut self) {
        self.undo.clear();
    }

    /// States available to undo, most recent last.
    pub fn undo_stack(&self) -> &[StateId] {
        &self.undo
    }

    /// States available to redo, most recent last.
    pub fn redo_stack(&self) -> &[StateId] {
        &self.redo
    }

    /// Whether there is anything to step back to.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether there is anything to step forward to.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
