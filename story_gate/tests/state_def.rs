use story_gate::{Comparison, NumericCondition, Predicate, StateDef, StateError, StoryState};

const INITIAL_STATE: &str = r#"
[flags]
met_ferryman = false
lantern_lit = true

[counters]
refusals = 0
coins = 12
"#;

#[test]
fn state_def_loads_from_toml() {
    let def: StateDef = toml::from_str(INITIAL_STATE).expect("parse toml");
    assert_eq!(def.flags.len(), 2);
    assert_eq!(def.counters["coins"], 12);

    let state = StoryState::from_def(&def);
    assert!(state.flag("lantern_lit").unwrap().get());
    assert_eq!(state.counter("coins").unwrap().get(), 12);
}

#[test]
fn missing_tables_default_to_empty() {
    let def: StateDef = toml::from_str("").expect("parse empty toml");
    assert_eq!(def, StateDef::default());

    let only_flags: StateDef = toml::from_str("[flags]\nawake = true\n").expect("parse flags only");
    assert!(only_flags.counters.is_empty());
    assert!(only_flags.flags["awake"]);
}

#[test]
fn snapshot_survives_json_and_restores_into_live_conditions() {
    let def: StateDef = toml::from_str(INITIAL_STATE).expect("parse toml");
    let state = StoryState::from_def(&def);
    let can_afford = NumericCondition::new(state.counter("coins").unwrap(), Comparison::GreaterThan, 10);
    assert!(can_afford.evaluate());

    state.set_flag("met_ferryman", true).unwrap();
    let saved = serde_json::to_string(&state.snapshot()).expect("serialize snapshot");

    can_afford.subtract(5);
    state.set_flag("met_ferryman", false).unwrap();
    assert!(!can_afford.evaluate());

    let loaded: StateDef = serde_json::from_str(&saved).expect("deserialize snapshot");
    state.restore(&loaded).unwrap();
    assert!(can_afford.evaluate());
    assert!(state.flag("met_ferryman").unwrap().get());
}

#[test]
fn restore_rejects_unknown_names() {
    let state = StoryState::from_def(&toml::from_str(INITIAL_STATE).expect("parse toml"));
    let stale: StateDef = serde_json::from_str(r#"{"flags": {"old_flag": true}}"#).expect("parse json");
    assert_eq!(state.restore(&stale), Err(StateError::UnknownFlag("old_flag".into())));
}
