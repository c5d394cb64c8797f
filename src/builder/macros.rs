//! Macros for ergonomic state machine construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a compact table.
///
/// States are declared in the order written. A state with an empty rule block
/// is declared with no transitions. Expands to a
/// `Result<MachineConfig, BuildError>`.
///
/// # Example
///
/// ```
/// use statewise::{machine_config, StateMachine};
///
/// let config = machine_config! {
///     initial: idle,
///     states: {
///         idle => { run => running },
///         running => { stop => idle, pause => paused },
///         paused => {},
///     }
/// }
/// .unwrap();
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("run").unwrap();
/// assert_eq!(machine.current_state(), "running");
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => { $( $event:ident => $target:ident ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let builder = $crate::builder::StateMachineBuilder::new().initial(stringify!($initial));
        $(
            let builder = builder.state(stringify!($state));
            $(
                let builder = builder.add_transition($crate::core::Transition::new(
                    stringify!($state),
                    stringify!($event),
                    stringify!($target),
                ));
            )*
        )*
        builder.build_config()
    }};
}
