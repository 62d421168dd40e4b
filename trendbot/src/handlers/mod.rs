//! Handlers wired into the chain: activity logging and bot commands.

mod activity_handler;
mod command_handler;

pub use activity_handler::ActivityHandler;
pub use command_handler::CommandHandler;
