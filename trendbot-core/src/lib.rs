//! # trendbot-core
//!
//! Core types and traits for TrendBot: [`Bot`], [`Handler`], message/user/chat types, command
//! parsing and tracing initialization. Transport-agnostic; used by handler-chain and the app crate.

pub mod bot;
pub mod command;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, SentMessage};
pub use command::Command;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Destination, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage,
    ToCoreUser, User,
};
