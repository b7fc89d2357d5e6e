use std::time::Duration;

use thiserror::Error;

/// The fixed transport vocabulary external surfaces may issue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoteCommand {
    Play,
    Pause,
    Next,
    Previous,
    /// Seek to an absolute position in the current track.
    Seek(Duration),
}

/// Payload-free command discriminant, used to key the handler table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Play,
    Pause,
    Next,
    Previous,
    Seek,
}

impl RemoteCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            RemoteCommand::Play => CommandKind::Play,
            RemoteCommand::Pause => CommandKind::Pause,
            RemoteCommand::Next => CommandKind::Next,
            RemoteCommand::Previous => CommandKind::Previous,
            RemoteCommand::Seek(_) => CommandKind::Seek,
        }
    }
}

/// Acknowledgment returned to whichever surface issued a command.
///
/// There is no automatic retry on either variant; the issuer re-issues if it
/// wants to.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Nothing is registered for this command kind; the player is
    /// unreachable from this surface.
    #[error("no handler registered for {0:?}")]
    NotRegistered(CommandKind),

    /// The command reached the player and the player refused it.
    #[error("{kind:?} rejected: {reason}")]
    Rejected { kind: CommandKind, reason: String },
}
