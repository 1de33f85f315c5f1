use std::sync::{Arc, Mutex};
use tvnav::command_bus::CommandBus;
use tvnav::input::{Command, KeyMapper, ManualInput, RawKeyEvent, RemoteControl};

fn recording_bus() -> (CommandBus, Arc<Mutex<Vec<Command>>>) {
    let bus = CommandBus::new();
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_in_listener = received.clone();
    bus.subscribe(move |command| {
        received_in_listener.lock().unwrap().push(command);
        Ok(())
    });
    (bus, received)
}

#[test]
fn test_recognized_keys_are_dispatched() {
    let (bus, received) = recording_bus();
    let remote = RemoteControl::new(KeyMapper::new(), bus);
    let input = ManualInput::new();
    remote.attach(&input);

    input.press_code("ArrowDown");
    input.press_code("Enter");
    input.press(RawKeyEvent::with_key("", "GoBack"));

    assert_eq!(*received.lock().unwrap(), vec![Command::Down, Command::Select, Command::Back]);
}

#[test]
fn test_unrecognized_keys_dispatch_nothing() {
    let (bus, received) = recording_bus();
    let remote = RemoteControl::new(KeyMapper::new(), bus);

    assert_eq!(remote.handle_key(&RawKeyEvent::from_code("KeyZ")), None);
    assert!(received.lock().unwrap().is_empty());
}

#[test]
fn test_emit_bypasses_mapper() {
    let (bus, received) = recording_bus();
    let remote = RemoteControl::new(KeyMapper::new(), bus);

    remote.emit(Command::Right);
    assert_eq!(*received.lock().unwrap(), vec![Command::Right]);
}

#[test]
fn test_handle_key_returns_dispatched_command() {
    let (bus, _) = recording_bus();
    let remote = RemoteControl::new(KeyMapper::new(), bus);
    assert_eq!(remote.handle_key(&RawKeyEvent::from_code("ArrowLeft")), Some(Command::Left));
    assert_eq!(remote.bus().len(), 1);
}
