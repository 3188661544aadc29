//! Macros for ergonomic configuration.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a state table literal.
///
/// States are declared in the order written. A state with an empty body has
/// no outgoing transitions.
///
/// # Example
///
/// ```
/// use fsm_engine::fsm_config;
///
/// let config = fsm_config! {
///     initial: "red",
///     "red" => { "next" => "green" },
///     "green" => { "next" => "yellow" },
///     "yellow" => { "next" => "red", "fault" => "flashing" },
///     "flashing" => {},
/// };
///
/// assert_eq!(config.initial, "red");
/// assert_eq!(config.target("yellow", "fault"), Some("flashing"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr
        $(,
            $state:expr => {
                $($event:expr => $target:expr),* $(,)?
            }
        )* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut config = $crate::core::MachineConfig::new($initial);
        $(
            config.states.insert(
                $state,
                $crate::core::StateDescriptor::new()
                    $(.with_transition($event, $target))*,
            );
        )*
        config
    }};
}
