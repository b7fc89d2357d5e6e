use std::collections::HashMap;

use crate::player::EngineError;

use super::command::{CommandError, CommandKind, RemoteCommand};

/// A registered command handler. Handlers run on the player's owning thread;
/// an `Err` becomes a rejected acknowledgment for the issuing surface.
pub type CommandHandler = Box<dyn FnMut(RemoteCommand) -> Result<(), EngineError>>;

/// The remote command surface: a handler table keyed by command kind.
///
/// One-way: commands flow in, acknowledgments flow back, nothing else. A
/// command whose kind has no registered handler is a delivery failure, not a
/// silent drop.
#[derive(Default)]
pub struct CommandSurface {
    handlers: HashMap<CommandKind, CommandHandler>,
}

impl CommandSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for one command kind, replacing any previous one.
    pub fn register<F>(&mut self, kind: CommandKind, handler: F)
    where
        F: FnMut(RemoteCommand) -> Result<(), EngineError> + 'static,
    {
        self.handlers.insert(kind, Box::new(handler));
    }

    /// Forward `command` to its handler synchronously and acknowledge.
    pub fn dispatch(&mut self, command: RemoteCommand) -> Result<(), CommandError> {
        let kind = command.kind();
        let handler = self
            .handlers
            .get_mut(&kind)
            .ok_or(CommandError::NotRegistered(kind))?;
        handler(command).map_err(|e| CommandError::Rejected {
            kind,
            reason: e.to_string(),
        })
    }
}
