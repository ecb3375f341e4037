//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::core::{Configuration, EventName, StateConfig, StateName};

/// Builder for constructing configurations with a fluent API.
///
/// States are recorded in the order they are first mentioned, either by
/// `state` or as the source of a `transition`. Targets are not declared
/// implicitly, and nothing checks that they are defined.
#[derive(Clone, Debug, Default)]
pub struct ConfigurationBuilder {
    initial: Option<StateName>,
    states: StateConfig,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, with an empty table if it is new.
    pub fn state(mut self, state: impl Into<StateName>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add `from --event--> to`, declaring `from` if needed.
    /// A later transition for the same event replaces the earlier one.
    pub fn transition(
        mut self,
        from: impl Into<StateName>,
        event: impl Into<EventName>,
        to: impl Into<StateName>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(Configuration {
            initial,
            states: self.states,
        })
    }
}
