use std::collections::BTreeMap;
use tvnav::config::InputConfig;
use tvnav::input::{Command, KeyMapper, RawKeyEvent};

#[test]
fn test_default_table() {
    let mapper = KeyMapper::new();
    let expected = [
        ("ArrowUp", Command::Up),
        ("ArrowDown", Command::Down),
        ("ArrowLeft", Command::Left),
        ("ArrowRight", Command::Right),
        ("Enter", Command::Select),
        ("Backspace", Command::Back),
    ];

    for (code, command) in expected {
        assert_eq!(mapper.map(&RawKeyEvent::from_code(code)), Some(command), "code {}", code);
    }
    assert_eq!(mapper.binding_count(), expected.len());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mapper = KeyMapper::new();
    for code in ["KeyA", "Tab", "arrowup", "", "F1"] {
        assert_eq!(mapper.map(&RawKeyEvent::from_code(code)), None, "code {:?}", code);
    }
}

#[test]
fn test_mapping_is_deterministic() {
    let mapper = KeyMapper::new();
    let event = RawKeyEvent::from_code("ArrowLeft");
    let first = mapper.map(&event);
    for _ in 0..10 {
        assert_eq!(mapper.map(&event), first);
    }
}

#[test]
fn test_vendor_back_key_wins_over_code() {
    let mapper = KeyMapper::new();

    // Magic Remote: unknown code, back reported through `key`
    assert_eq!(mapper.map(&RawKeyEvent::with_key("", "GoBack")), Some(Command::Back));
    // Even when the code itself would map to something else
    assert_eq!(mapper.map(&RawKeyEvent::with_key("ArrowUp", "GoBack")), Some(Command::Back));
    // A regular key value does not change the code lookup
    assert_eq!(mapper.map(&RawKeyEvent::with_key("ArrowUp", "ArrowUp")), Some(Command::Up));
}

#[test]
fn test_configured_bindings_extend_defaults() {
    let mut bindings = BTreeMap::new();
    bindings.insert("Escape".to_string(), Command::Back);
    bindings.insert("NumpadEnter".to_string(), Command::Select);
    let config = InputConfig {
        bindings,
        vendor_back_keys: vec!["XF86Back".to_string()],
    };

    let mapper = KeyMapper::from_config(&config);
    assert_eq!(mapper.map(&RawKeyEvent::from_code("Escape")), Some(Command::Back));
    assert_eq!(mapper.map(&RawKeyEvent::from_code("NumpadEnter")), Some(Command::Select));
    assert_eq!(mapper.map(&RawKeyEvent::with_key("", "XF86Back")), Some(Command::Back));

    // Defaults survive
    assert_eq!(mapper.map(&RawKeyEvent::from_code("ArrowDown")), Some(Command::Down));
    assert_eq!(mapper.map(&RawKeyEvent::with_key("", "GoBack")), Some(Command::Back));
}

#[test]
fn test_extra_binding_cannot_replace_default() {
    let mapper = KeyMapper::new().with_binding("Backspace", Command::Left);
    assert_eq!(mapper.map(&RawKeyEvent::from_code("Backspace")), Some(Command::Back));
    assert_eq!(mapper.binding_count(), 6);

    // Same through the config path
    let mut bindings = BTreeMap::new();
    bindings.insert("ArrowUp".to_string(), Command::Down);
    bindings.insert("PageUp".to_string(), Command::Up);
    let mapper = KeyMapper::from_config(&InputConfig {
        bindings,
        vendor_back_keys: Vec::new(),
    });
    assert_eq!(mapper.map(&RawKeyEvent::from_code("ArrowUp")), Some(Command::Up));
    assert_eq!(mapper.map(&RawKeyEvent::from_code("PageUp")), Some(Command::Up));
}

#[test]
fn test_first_extra_binding_wins() {
    let mapper = KeyMapper::new()
        .with_binding("Escape", Command::Back)
        .with_binding("Escape", Command::Select);
    assert_eq!(mapper.map(&RawKeyEvent::from_code("Escape")), Some(Command::Back));
}
