//! Parsing of Gemini `generateContent` responses

use super::messages::ProviderReply;
use crate::error::{PilotError, PilotResult};
use crate::tools::ToolInvocation;
use serde_json::Value;
use std::collections::HashMap;

/// Response parser for Gemini
pub struct ResponseParser;

impl ResponseParser {
    /// Concatenate text parts and collect function calls from the first candidate
    pub fn parse_google(response: &Value) -> PilotResult<ProviderReply> {
        if let Some(reason) = response["promptFeedback"]["blockReason"].as_str() {
            return Err(PilotError::provider_named(
                format!("Prompt blocked by Google: {}", reason),
                "google",
            ));
        }

        let candidates = response["candidates"]
            .as_array()
            .ok_or_else(|| PilotError::provider_named("No candidates in Google response", "google"))?;

        let candidate = candidates.first().ok_or_else(|| {
            PilotError::provider_named("Empty candidates array in Google response", "google")
        })?;

        let content_parts = candidate["content"]["parts"].as_array().ok_or_else(|| {
            let finish = candidate["finishReason"].as_str().unwrap_or("unknown");
            PilotError::provider_named(
                format!("No content parts in Google response (finish reason: {})", finish),
                "google",
            )
        })?;

        let mut text = String::new();
        let mut function_calls = Vec::new();

        for part in content_parts {
            if let Some(chunk) = part["text"].as_str() {
                text.push_str(chunk);
            } else if let Some(function_call) = part["functionCall"].as_object() {
                let name = function_call
                    .get("name")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                let arguments: HashMap<String, Value> = function_call
                    .get("args")
                    .and_then(|v| v.as_object())
                    .map(|args| args.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
                    .unwrap_or_default();
                function_calls.push(ToolInvocation::new(name, arguments));
            }
        }

        if let Some(usage) = response["usageMetadata"].as_object() {
            tracing::debug!(
                prompt_tokens = usage.get("promptTokenCount").and_then(|v| v.as_u64()).unwrap_or(0),
                completion_tokens = usage
                    .get("candidatesTokenCount")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(0),
                "google usage"
            );
        }

        Ok(ProviderReply {
            text,
            function_calls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_text_and_calls_in_order() {
        let response = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "Adding both. "},
                        {"functionCall": {"name": "add_task", "args": {"title": "Buy milk"}}},
                        {"functionCall": {"name": "complete_task", "args": {"task_id": "2"}}},
                        {"text": "Done."}
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 5}
        });

        let reply = ResponseParser::parse_google(&response).unwrap();

        assert_eq!(reply.text, "Adding both. Done.");
        assert_eq!(reply.function_calls.len(), 2);
        assert_eq!(reply.function_calls[0].name, "add_task");
        assert_eq!(reply.function_calls[0].get_string("title").as_deref(), Some("Buy milk"));
        assert_eq!(reply.function_calls[1].name, "complete_task");
    }

    #[test]
    fn test_parse_calls_without_text_leaves_text_empty() {
        let response = json!({
            "candidates": [{"content": {"parts": [
                {"functionCall": {"name": "delete_task", "args": {"task_id": "1"}}}
            ]}}]
        });
        let reply = ResponseParser::parse_google(&response).unwrap();
        assert!(reply.text.is_empty());
        assert_eq!(reply.function_calls.len(), 1);
    }

    #[test]
    fn test_missing_candidates_is_error() {
        let err = ResponseParser::parse_google(&json!({"error": "nope"})).unwrap_err();
        assert!(err.is_provider_failure());
    }

    #[test]
    fn test_blocked_prompt_is_error() {
        let response = json!({"promptFeedback": {"blockReason": "SAFETY"}});
        let err = ResponseParser::parse_google(&response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_candidate_without_parts_is_error() {
        let response = json!({"candidates": [{"finishReason": "MAX_TOKENS"}]});
        let err = ResponseParser::parse_google(&response).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }
}
