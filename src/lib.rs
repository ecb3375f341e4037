//! Waypoint: a declarative finite state machine with undo/redo history
//!
//! A machine is described by plain data: an initial state and, for every
//! state, a table mapping event names to the next state. The engine tracks
//! the current state and records every state it is driven through, so the
//! caller can step back and forth through the visited states.
//!
//! # Core Concepts
//!
//! - **Configuration**: Initial state plus per-state transition tables
//! - **History**: Every visited state, in order, with a pointer to the active one
//! - **StateMachine**: Applies events, direct jumps and resets, and navigates history
//!
//! # Example
//!
//! ```rust
//! use waypoint::{fsm_config, StateMachine};
//!
//! let mut machine = StateMachine::new(fsm_config! {
//!     initial: draft,
//!     states: {
//!         draft => { submit => review },
//!         review => { approve => published, reject => draft },
//!         published => {},
//!     }
//! });
//!
//! machine.trigger("submit");
//! machine.trigger("approve");
//! assert_eq!(machine.state(), Some("published"));
//!
//! machine.undo();
//! assert_eq!(machine.state(), Some("review"));
//!
//! // Events a state does not define lead to the undefined slot.
//! machine.trigger("submit");
//! assert_eq!(machine.state(), None);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigurationBuilder};
pub use core::{ConfigError, Configuration, History, StateDefinition};
pub use machine::StateMachine;
