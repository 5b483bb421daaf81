//! CLI commands

pub mod ask;
pub mod chat;
pub mod config;
pub mod slash;
pub mod tools;
mod turn;
