//! Core types: user, chat, message, destination, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod destination;
mod handler;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use destination::Destination;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Message, MessageDirection};
pub use response::HandlerResponse;
pub use user::User;
