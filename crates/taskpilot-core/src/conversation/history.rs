//! Projection of transcript messages into provider history turns

use crate::llm::{HistoryRole, HistoryTurn};
use crate::types::{ChatMessage, ChatRole};

/// The most recent `limit` messages as provider turns, oldest first.
///
/// Assistant messages become `model` turns; user and system messages become
/// `user` turns, since the provider only knows two roles.
pub fn history_window(messages: &[ChatMessage], limit: usize) -> Vec<HistoryTurn> {
    let start = messages.len().saturating_sub(limit);
    messages[start..]
        .iter()
        .map(|message| {
            let role = match message.role {
                ChatRole::Assistant => HistoryRole::Model,
                ChatRole::User | ChatRole::System => HistoryRole::User,
            };
            HistoryTurn::text(role, message.content.clone())
        })
        .collect()
}
