//! Conversion of turns and tool declarations into the Gemini wire format

use super::messages::{HistoryRole, HistoryTurn};
use crate::tools::ToolSchema;
use serde_json::{Value, json};

/// Message and tool format converter for Gemini `generateContent`
pub struct GoogleConverter;

impl GoogleConverter {
    /// Build `contents`: the history turns followed by the new user turn
    pub fn contents(history: &[HistoryTurn], message: &str) -> Vec<Value> {
        tracing::debug!("Converting {} history turns for Google", history.len());

        history
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    HistoryRole::User => "user",
                    HistoryRole::Model => "model",
                };
                let parts: Vec<Value> = turn.parts.iter().map(|p| json!({"text": p.text})).collect();
                json!({ "role": role, "parts": parts })
            })
            .chain(std::iter::once(json!({
                "role": "user",
                "parts": [{"text": message}]
            })))
            .collect()
    }

    /// Build the `systemInstruction` content block
    pub fn system_instruction(instruction: &str, task_context: Option<&str>) -> Value {
        let text = match task_context {
            Some(context) => format!("{}\n\nCurrent tasks:\n{}", instruction, context),
            None => instruction.to_string(),
        };
        json!({ "parts": [{"text": text}] })
    }

    /// Build `functionDeclarations`
    pub fn tools(tools: &[ToolSchema]) -> Vec<Value> {
        tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name,
                    "description": tool.description,
                    "parameters": tool.parameters
                })
            })
            .collect()
    }
}
