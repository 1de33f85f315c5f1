use super::command::Command;
use super::key_mapper::KeyMapper;
use super::source::{InputSource, RawKeyEvent};
use crate::command_bus::CommandBus;

/// Connects an input source to the command bus through a key mapper.
///
/// Every recognized key press becomes one dispatch on the bus; unrecognized
/// keys are dropped silently.
#[derive(Clone)]
pub struct RemoteControl {
    mapper: KeyMapper,
    bus: CommandBus,
}

impl RemoteControl {
    pub fn new(mapper: KeyMapper, bus: CommandBus) -> Self {
        Self { mapper, bus }
    }

    /// Start listening to `source`
    pub fn attach<S: InputSource + ?Sized>(&self, source: &S) {
        let remote = self.clone();
        source.on_key_event(Box::new(move |event: &RawKeyEvent| {
            remote.handle_key(event);
        }));
        log::debug!("Remote control attached to input source");
    }

    /// Map and dispatch a single raw event, returning the command sent
    pub fn handle_key(&self, event: &RawKeyEvent) -> Option<Command> {
        log::trace!("Key {} ({:?})", event.code, event.key);
        let command = self.mapper.map(event)?;
        self.bus.dispatch(command);
        Some(command)
    }

    /// Inject a command without going through the key mapper
    pub fn emit(&self, command: Command) {
        self.bus.dispatch(command);
    }

    pub fn bus(&self) -> &CommandBus {
        &self.bus
    }

    pub fn mapper(&self) -> &KeyMapper {
        &self.mapper
    }
}
