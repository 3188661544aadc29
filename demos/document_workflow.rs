//! Document Workflow
//!
//! This example loads a review workflow from JSON and explores it.
//!
//! Key concepts:
//! - Parsing a configuration document
//! - Querying which states react to an event
//! - Jumping directly with `change_state`
//! - `reset` and `clear_history` leaving the other stack alone
//!
//! Run with: cargo run --example document_workflow

use fsm_engine::{FsmError, StateMachine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft": { "transitions": { "submit": "review", "discard": "archived" } },
        "review": { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "discard": "archived" } },
        "archived": {}
    }
}"#;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fsm_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Document Workflow ===\n");

    let mut doc = StateMachine::from_json(WORKFLOW)?;
    println!("States: {:?}", doc.states(None));
    println!("Discardable from: {:?}", doc.states(Some("discard")));
    println!("Available now: {:?}\n", doc.events());

    doc.trigger("submit")?;
    doc.trigger("reject")?;
    doc.trigger("submit")?;
    doc.trigger("approve")?;
    println!("Published after a round of review: {}", doc.state());
    println!("Undo stack: {:?}", doc.history().undo_stack());

    doc.undo();
    doc.undo();
    println!("\nStepped back twice: {}", doc.state());
    println!("Redo stack: {:?}", doc.history().redo_stack());

    doc.reset();
    println!("\nAfter reset: {} (undo still available: {})", doc.state(), doc.can_undo());

    doc.clear_history();
    println!("After clear_history: undo {}, redo {}", doc.can_undo(), doc.can_redo());

    doc.change_state("archived")?;
    println!("\nJumped to: {}", doc.state());
    if let Err(err) = doc.change_state("deleted") {
        println!("Rejected: {err}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
