//! Core data types of the state machine.
//!
//! This module contains the plain data the engine works on:
//! - Declarative configuration of states and transitions
//! - The undo/redo history with its active-entry pointer
//! - The configuration error type
//!
//! Nothing in here logs or fails except configuration loading.

mod config;
mod error;
mod history;

pub use config::{
    Configuration, EventName, StateConfig, StateDefinition, StateName, TransitionTable,
};
pub use error::ConfigError;
pub use history::{History, HistoryEntry};
