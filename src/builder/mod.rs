//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a declarative macro for writing
//! state graphs in code instead of JSON.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigurationBuilder;
pub use error::BuildError;

use crate::machine::StateMachine;

/// Build a configuration and wrap it in a machine in one step.
///
/// # Example
///
/// ```
/// use waypoint::builder::{machine, ConfigurationBuilder};
///
/// let machine = machine(
///     ConfigurationBuilder::new()
///         .initial("red")
///         .transition("red", "next", "green")
///         .transition("green", "next", "yellow")
///         .transition("yellow", "next", "red"),
/// )
/// .unwrap();
///
/// assert_eq!(machine.state(), Some("red"));
/// ```
pub fn machine(builder: ConfigurationBuilder) -> Result<StateMachine, BuildError> {
    Ok(StateMachine::new(builder.build()?))
}
