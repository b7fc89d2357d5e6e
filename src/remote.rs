//! External command intake.
//!
//! All transport intents (OS media keys over MPRIS, widget key presses over
//! the relay file) funnel into one fixed command vocabulary and are
//! dispatched through a handler table. Delivery failures are acknowledged,
//! never silently dropped.

mod command;
mod mpris;
mod relay;
mod surface;

pub use command::{CommandError, CommandKind, RemoteCommand};
pub use mpris::{ControlMsg, MprisHandle, spawn_mpris};
pub use relay::CommandRelay;
pub use surface::{CommandHandler, CommandSurface};
