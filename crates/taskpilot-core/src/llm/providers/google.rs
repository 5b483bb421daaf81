//! Google (Gemini) provider implementation

use super::error_utils::{handle_http_error, handle_parse_error, handle_transport_error};
use crate::config::ProviderConfig;
use crate::error::{PilotError, PilotResult};
use crate::llm::converters::GoogleConverter;
use crate::llm::messages::{ProviderReply, ProviderRequest};
use crate::llm::parsers::ResponseParser;
use crate::llm::provider_trait::CapabilityProvider;
use crate::tools::ToolSchema;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::instrument;

const PROVIDER: &str = "Google";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` client, configured once with its persona and tools
pub struct GeminiProvider {
    config: ProviderConfig,
    system_instruction: String,
    tools: Vec<ToolSchema>,
    http_client: Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// A missing API key is not an error here; it surfaces on the first call.
    pub fn new(
        config: ProviderConfig,
        system_instruction: impl Into<String>,
        tools: Vec<ToolSchema>,
    ) -> PilotResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
            PilotError::config_with_context(
                format!("Failed to build HTTP client: {}", e),
                "Creating Gemini provider",
            )
        })?;

        Ok(Self {
            config,
            system_instruction: system_instruction.into(),
            tools,
            http_client,
        })
    }

    pub(crate) fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    pub(crate) fn build_request_body(&self, request: &ProviderRequest) -> Value {
        let mut body = json!({
            "contents": GoogleConverter::contents(&request.history, &request.message),
            "systemInstruction": GoogleConverter::system_instruction(
                &self.system_instruction,
                request.task_context.as_deref(),
            ),
        });

        if !self.tools.is_empty() {
            body["tools"] = json!([{
                "functionDeclarations": GoogleConverter::tools(&self.tools)
            }]);
        }

        let mut generation_config = json!({});
        if let Some(temperature) = self.config.temperature {
            generation_config["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = self.config.max_output_tokens {
            generation_config["maxOutputTokens"] = json!(max_tokens);
        }
        if generation_config
            .as_object()
            .is_some_and(|obj| !obj.is_empty())
        {
            body["generationConfig"] = generation_config;
        }

        body
    }
}

#[async_trait]
impl CapabilityProvider for GeminiProvider {
    #[instrument(skip(self, request), fields(model = %self.config.model, history = request.history.len()))]
    async fn generate(&self, request: &ProviderRequest) -> PilotResult<ProviderReply> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| PilotError::provider_named("Google API key not provided", "google"))?;

        let body = self.build_request_body(request);
        tracing::debug!("Google request body: {}", body);

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| handle_transport_error(e, PROVIDER))?;

        if !response.status().is_success() {
            return Err(handle_http_error(response, PROVIDER).await);
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| handle_parse_error(e, PROVIDER))?;

        tracing::debug!("Google response: {}", response_json);

        ResponseParser::parse_google(&response_json)
    }
}
