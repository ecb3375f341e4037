//! Macros for ergonomic configuration construction.

/// Build a [`Configuration`](crate::core::Configuration) from a literal state
/// graph.
///
/// State and event names are identifiers and become their own string form.
/// States appear in the configuration in the order written.
///
/// # Example
///
/// ```
/// use waypoint::{fsm_config, StateMachine};
///
/// let config = fsm_config! {
///     initial: idle,
///     states: {
///         idle => { start => running },
///         running => { stop => idle, pause => paused },
///         paused => { resume => running },
///         broken => {},
///     }
/// };
///
/// let machine = StateMachine::new(config);
/// assert_eq!(machine.states(None), vec!["idle", "running", "paused", "broken"]);
/// assert_eq!(machine.states(Some("stop")), vec!["running"]);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => { $($event:ident => $target:ident),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut config = $crate::core::Configuration::new(stringify!($initial));
        $(
            config
                .states
                .entry(stringify!($state).to_string())
                .or_default();
            $(
                config
                    .states
                    .entry(stringify!($state).to_string())
                    .or_default()
                    .transitions
                    .insert(stringify!($event).to_string(), stringify!($target).to_string());
            )*
        )*
        config
    }};
}
