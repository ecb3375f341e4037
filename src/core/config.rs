//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the table
//! of events it reacts to. It is plain data: nothing here checks that the
//! initial state or any transition target is actually defined.

use super::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque name of a state.
pub type StateName = String;

/// Opaque name of an event.
pub type EventName = String;

/// Event to next-state mapping for a single state, in declaration order.
pub type TransitionTable = IndexMap<EventName, StateName>;

/// Every state of the machine keyed by name, in declaration order.
pub type StateConfig = IndexMap<StateName, StateDefinition>;

/// Definition of a single state.
///
/// Serialized as `{"transitions": {"event": "target", ...}}`. A missing
/// `transitions` key reads as an empty table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Events this state reacts to and where each one leads
    #[serde(default)]
    pub transitions: TransitionTable,
}

impl StateDefinition {
    /// Create a definition with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Target of `event` from this state, if defined.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }
}

/// Full machine configuration: the initial state plus the state graph.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Configuration;
///
/// let config = Configuration::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle":    { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.transition("idle", "start"), Some("running"));
/// assert_eq!(config.transition("idle", "stop"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// State the machine starts in and returns to on reset
    pub initial: StateName,
    /// Transition tables keyed by state name
    pub states: StateConfig,
}

impl Configuration {
    /// Create a configuration with no states defined.
    pub fn new(initial: impl Into<StateName>) -> Self {
        Self {
            initial: initial.into(),
            states: StateConfig::new(),
        }
    }

    /// Read a configuration from JSON text.
    ///
    /// Fails only when `initial` or `states` cannot be read off the input.
    /// The deserializer's error is returned as-is.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Target of `event` when fired in `state`.
    ///
    /// `None` when the state has no definition or the event is not in its
    /// table.
    pub fn transition(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state).and_then(|def| def.target(event))
    }

    /// Names of all defined states, in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Configuration {
        Configuration::from_value(json!({
            "initial": "A",
            "states": {
                "A": { "transitions": { "go": "B" } },
                "B": { "transitions": { "back": "A" } }
            }
        }))
        .unwrap()
    }

    #[test]
    fn reads_initial_and_states() {
        let config = sample();
        assert_eq!(config.initial, "A");
        assert_eq!(config.states.len(), 2);
    }

    #[test]
    fn preserves_declaration_order() {
        let config = Configuration::from_json(
            r#"{"initial": "z", "states": {"z": {}, "a": {}, "m": {}}}"#,
        )
        .unwrap();

        let names: Vec<&str> = config.state_names().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn missing_transitions_key_is_empty_table() {
        let config =
            Configuration::from_json(r#"{"initial": "only", "states": {"only": {}}}"#).unwrap();
        assert!(config.states["only"].transitions.is_empty());
    }

    #[test]
    fn transition_lookup() {
        let config = sample();
        assert_eq!(config.transition("A", "go"), Some("B"));
        assert_eq!(config.transition("B", "back"), Some("A"));
        assert_eq!(config.transition("A", "back"), None);
        assert_eq!(config.transition("nowhere", "go"), None);
    }

    #[test]
    fn initial_is_not_validated() {
        let config =
            Configuration::from_json(r#"{"initial": "ghost", "states": {}}"#).unwrap();
        assert_eq!(config.initial, "ghost");
        assert!(config.states.is_empty());
    }

    #[test]
    fn missing_initial_fails() {
        let result = Configuration::from_json(r#"{"states": {}}"#);
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn missing_states_fails() {
        let result = Configuration::from_value(json!({ "initial": "A" }));
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn error_message_is_passed_through() {
        let raw = serde_json::from_str::<Configuration>("null").unwrap_err();
        let wrapped = Configuration::from_json("null").unwrap_err();
        assert_eq!(wrapped.to_string(), raw.to_string());
    }

    #[test]
    fn configuration_serializes_in_order() {
        let config = sample();
        let states = serde_json::to_string(&config.states).unwrap();
        assert!(states.starts_with("{\"A\""));

        let json = serde_json::to_string(&config).unwrap();
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
