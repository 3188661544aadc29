//! End-to-end scenarios driving the engine through its public API.

use fsm_engine::{fsm_config, FsmError, MachineConfig, StateMachine};

const DOCUMENT_CONFIG: &str = r#"{
    "initial": "normal",
    "states": {
        "normal": {
            "transitions": { "study": "busy" }
        },
        "busy": {
            "transitions": { "get_tired": "sleeping", "get_hungry": "hungry" }
        },
        "hungry": {
            "transitions": { "eat": "normal" }
        },
        "sleeping": {
            "transitions": { "get_hungry": "hungry", "get_up": "normal" }
        }
    }
}"#;

fn light_switch() -> StateMachine {
    StateMachine::new(fsm_config! {
        initial: "off",
        "off" => { "turnOn" => "on" },
        "on" => { "turnOff" => "off" },
    })
}

#[test]
fn light_switch_undo_redo_sequence() {
    let mut fsm = light_switch();

    fsm.trigger("turnOn").unwrap();
    assert_eq!(fsm.state(), "on");

    assert!(fsm.undo());
    assert_eq!(fsm.state(), "off");

    assert!(fsm.redo());
    assert_eq!(fsm.state(), "on");

    fsm.trigger("turnOff").unwrap();
    assert_eq!(fsm.state(), "off");
    assert!(!fsm.redo());
}

#[test]
fn unknown_state_leaves_machine_unchanged() {
    let mut fsm = light_switch();
    fsm.trigger("turnOn").unwrap();

    let result = fsm.change_state("nonexistent");

    assert!(matches!(result, Err(FsmError::InvalidState { .. })));
    assert_eq!(fsm.state(), "on");
    assert!(fsm.undo());
    assert_eq!(fsm.state(), "off");
}

#[test]
fn json_configured_machine_walks_its_graph() {
    let mut fsm = StateMachine::from_json(DOCUMENT_CONFIG).unwrap();
    assert_eq!(fsm.state(), "normal");

    fsm.trigger("study").unwrap();
    fsm.trigger("get_tired").unwrap();
    fsm.trigger("get_hungry").unwrap();
    fsm.trigger("eat").unwrap();
    assert_eq!(fsm.state(), "normal");

    assert!(matches!(
        fsm.trigger("get_up"),
        Err(FsmError::InvalidTransition { .. })
    ));
    assert_eq!(fsm.state(), "normal");
}

#[test]
fn json_configured_machine_lists_states() {
    let fsm = StateMachine::from_json(DOCUMENT_CONFIG).unwrap();

    assert_eq!(
        fsm.states(None),
        vec!["normal", "busy", "hungry", "sleeping"]
    );
    assert_eq!(fsm.states(Some("get_hungry")), vec!["busy", "sleeping"]);
    assert_eq!(fsm.states(Some("eat")), vec!["hungry"]);
    assert!(fsm.states(Some("fly")).is_empty());
}

#[test]
fn multiple_undos_unwind_to_initial() {
    let mut fsm = StateMachine::from_json(DOCUMENT_CONFIG).unwrap();
    fsm.trigger("study").unwrap();
    fsm.trigger("get_hungry").unwrap();
    fsm.trigger("eat").unwrap();
    fsm.trigger("study").unwrap();

    let mut visited = vec![fsm.state().to_string()];
    while fsm.undo() {
        visited.push(fsm.state().to_string());
    }

    assert_eq!(visited, vec!["busy", "normal", "hungry", "busy", "normal"]);
    assert!(!fsm.undo());

    let mut redone = 0;
    while fsm.redo() {
        redone += 1;
    }
    assert_eq!(redone, 4);
    assert_eq!(fsm.state(), "busy");
}

#[test]
fn reset_does_not_clear_history() {
    let mut fsm = StateMachine::from_json(DOCUMENT_CONFIG).unwrap();
    fsm.trigger("study").unwrap();
    fsm.trigger("get_tired").unwrap();

    fsm.reset();
    assert_eq!(fsm.state(), "normal");

    // undo replays the recorded state, not the one before the reset
    assert!(fsm.undo());
    assert_eq!(fsm.state(), "busy");
}

#[test]
fn clear_history_disables_undo_only() {
    let mut fsm = StateMachine::from_json(DOCUMENT_CONFIG).unwrap();
    fsm.trigger("study").unwrap();
    fsm.trigger("get_tired").unwrap();
    fsm.undo();

    fsm.clear_history();

    assert!(!fsm.undo());
    assert!(fsm.redo());
    assert_eq!(fsm.state(), "sleeping");
    assert!(fsm.undo());
    assert_eq!(fsm.state(), "busy");
}

#[test]
fn missing_configuration_is_rejected() {
    assert_eq!(
        StateMachine::from_json("null").unwrap_err(),
        FsmError::MissingConfiguration
    );
    assert_eq!(
        StateMachine::try_from(None::<MachineConfig>).unwrap_err(),
        FsmError::MissingConfiguration
    );
}

#[test]
fn malformed_configuration_is_rejected() {
    let err = StateMachine::from_json(r#"{"initial": 5}"#).unwrap_err();
    assert!(matches!(err, FsmError::MalformedConfiguration(_)));
}

#[test]
fn separate_instances_are_independent() {
    let mut first = light_switch();
    let second = light_switch();

    first.trigger("turnOn").unwrap();

    assert_eq!(first.state(), "on");
    assert_eq!(second.state(), "off");
    assert!(!second.can_undo());
}
