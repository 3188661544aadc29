//! Light Switch
//!
//! This example demonstrates event-driven transitions with undo and redo.
//!
//! Key concepts:
//! - Declaring a configuration with the `fsm_config!` macro
//! - Firing events with `trigger`
//! - Stepping back and forth through history
//! - A fresh transition discarding pending redo
//!
//! Run with: RUST_LOG=fsm_engine=trace cargo run --example light_switch

use fsm_engine::{fsm_config, FsmError, StateMachine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), FsmError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fsm_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Light Switch ===\n");

    let mut switch = StateMachine::new(fsm_config! {
        initial: "off",
        "off" => { "turnOn" => "on" },
        "on" => { "turnOff" => "off" },
    });
    println!("Initial state: {}", switch.state());

    switch.trigger("turnOn")?;
    println!("After turnOn: {}", switch.state());

    println!("undo -> {} (state: {})", switch.undo(), switch.state());
    println!("redo -> {} (state: {})", switch.redo(), switch.state());

    switch.trigger("turnOff")?;
    println!("After turnOff: {}", switch.state());
    println!("redo -> {} (a new transition discards redo)", switch.redo());

    match switch.trigger("turnOff") {
        Ok(()) => println!("unexpected transition"),
        Err(err) => println!("Rejected: {err}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
