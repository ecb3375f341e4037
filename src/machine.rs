//! The state machine engine.
//!
//! `StateMachine` pairs an immutable [`Configuration`] with a [`History`].
//! Every operation reads or moves the history; the configuration is only
//! consulted to resolve `trigger`, `reset` and `states`.

use crate::core::{ConfigError, Configuration, History, StateName};
use tracing::{debug, trace, warn};

/// Finite state machine with linear undo/redo history.
///
/// The current state is the history entry under the pointer, which after an
/// `undo` is not the most recently appended one.
///
/// # Undefined states
///
/// Triggering an event the current state does not define is not rejected.
/// The machine moves onto an explicit "no defined state" slot and
/// [`state`](Self::state) returns `None` until the caller navigates away
/// with `undo`, `change_state` or `reset`.
///
/// # Example
///
/// ```rust
/// use waypoint::StateMachine;
///
/// let mut machine = StateMachine::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle":    { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle", "pause": "paused" } },
///         "paused":  { "transitions": { "resume": "running" } }
///     }
/// }"#).unwrap();
///
/// machine.trigger("start");
/// machine.trigger("pause");
/// assert_eq!(machine.state(), Some("paused"));
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), Some("running"));
/// assert!(machine.redo());
/// assert_eq!(machine.state(), Some("paused"));
///
/// machine.clear_history();
/// assert!(!machine.undo());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Configuration,
    history: History,
}

impl StateMachine {
    /// Create a machine in its initial state.
    ///
    /// The configuration is taken as-is: neither `initial` nor any
    /// transition target has to name a defined state.
    pub fn new(config: Configuration) -> Self {
        let history = History::new(Some(config.initial.clone()));
        debug!(initial = %config.initial, states = config.states.len(), "state machine created");
        Self { config, history }
    }

    /// Create a machine from JSON text of the form
    /// `{"initial": ..., "states": {name: {"transitions": {...}}}}`.
    ///
    /// Fails only when `initial` or `states` cannot be read off the input.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(Configuration::from_json(json)?))
    }

    /// Create a machine from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(Self::new(Configuration::from_value(value)?))
    }

    /// Current state, or `None` after triggering an undefined event.
    pub fn state(&self) -> Option<&str> {
        self.history.current()
    }

    /// Go to `state` without consulting the transition tables.
    ///
    /// Entries after the current one stay in history but can no longer be
    /// reached with `redo`.
    pub fn change_state(&mut self, state: impl Into<StateName>) {
        let state = state.into();
        debug!(from = ?self.state(), to = %state, "changing state");
        self.history.push(Some(state));
    }

    /// Fire `event` from the current state.
    ///
    /// The target is looked up in the current state's transition table and
    /// appended to history. When there is no target (the event is not in the
    /// table, the state has no definition, or the machine already sits on the
    /// undefined slot) the undefined slot is appended instead.
    pub fn trigger(&mut self, event: &str) {
        let target = self
            .state()
            .and_then(|state| self.config.transition(state, event))
            .map(str::to_owned);

        match &target {
            Some(to) => debug!(from = ?self.state(), event, to = %to, "transition"),
            None => warn!(from = ?self.state(), event, "no transition defined for event"),
        }

        self.history.push(target);
    }

    /// Go back to the initial state. Recorded as a new history entry.
    pub fn reset(&mut self) {
        debug!(from = ?self.state(), to = %self.config.initial, "reset");
        self.history.push(Some(self.config.initial.clone()));
    }

    /// Names of states, in configuration order.
    ///
    /// With `None`, every defined state. With `Some(event)`, only the states
    /// whose transition table defines `event`.
    ///
    /// ```rust
    /// use waypoint::StateMachine;
    ///
    /// let machine = StateMachine::from_json(r#"{
    ///     "initial": "A",
    ///     "states": {
    ///         "A": { "transitions": { "go": "B" } },
    ///         "B": { "transitions": { "back": "A" } }
    ///     }
    /// }"#).unwrap();
    ///
    /// assert_eq!(machine.states(None), vec!["A", "B"]);
    /// assert_eq!(machine.states(Some("go")), vec!["A"]);
    /// assert!(machine.states(Some("missing")).is_empty());
    /// ```
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        trace!(?event, "listing states");
        match event {
            None => self.config.state_names().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, def)| def.target(event).is_some())
                .map(|(name, _)| name.as_str())
                .collect(),
        }
    }

    /// Step back one history entry. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.back();
        debug!(moved, pointer = self.history.pointer(), "undo");
        moved
    }

    /// Step forward one history entry. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.forward();
        debug!(moved, pointer = self.history.pointer(), "redo");
        moved
    }

    /// Whether `undo` would move.
    pub fn can_undo(&self) -> bool {
        self.history.can_back()
    }

    /// Whether `redo` would move.
    pub fn can_redo(&self) -> bool {
        self.history.can_forward()
    }

    /// Forget all history except the current state.
    pub fn clear_history(&mut self) {
        debug!(dropped = self.history.len() - 1, "clearing history");
        self.history.collapse();
    }

    /// The initial state name.
    pub fn initial(&self) -> &str {
        &self.config.initial
    }

    /// The configuration the machine was built from.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Every visited slot and the active-entry pointer.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the current entry in history.
    pub fn pointer(&self) -> usize {
        self.history.pointer()
    }
}
