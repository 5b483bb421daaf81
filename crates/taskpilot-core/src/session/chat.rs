//! The conversational turn

use super::outcome::TurnOutcome;
use super::state::{TurnGuard, TurnState};
use super::types::Session;
use crate::conversation::history_window;
use crate::error::{PilotError, PilotResult};
use crate::llm::ProviderRequest;
use crate::prompts;
use crate::tools::ToolDispatcher;
use crate::types::ChatMessage;
use tracing::{info, instrument, warn};

impl Session {
    /// Send a user message and apply whatever the provider asks for.
    ///
    /// Returns `Err(Busy)` if a turn is already in flight and
    /// `Err(InvalidInput)` for a blank message; neither touches the
    /// transcript. Provider failures never surface as `Err`: they append the
    /// apology message and return [`TurnOutcome::ProviderFailed`].
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub async fn send_message(&self, text: &str) -> PilotResult<TurnOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PilotError::invalid_input("message is empty"));
        }

        let guard = TurnGuard::begin(&self.state)?;
        let request = self.build_request(text);

        let reply = match self.provider.generate(&request).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(error = %error, "provider call failed");
                let reply = ChatMessage::assistant(prompts::PROVIDER_ERROR_REPLY);
                self.transcript.lock().push(reply.clone());
                return Ok(TurnOutcome::ProviderFailed { reply, error });
            }
        };

        guard.advance(TurnState::ApplyingToolEffects);

        let report = {
            let mut store = self.store.lock();
            ToolDispatcher::apply(&mut store, &reply.function_calls)
        };

        let content = if reply.text.trim().is_empty() {
            prompts::FALLBACK_REPLY.to_string()
        } else {
            reply.text
        };
        let message = ChatMessage::assistant_with_tools(content, reply.function_calls);
        self.transcript.lock().push(message.clone());

        info!(
            invocations = report.outcomes.len(),
            mutations = report.mutation_count(),
            "turn completed"
        );

        Ok(TurnOutcome::Completed {
            reply: message,
            report,
        })
    }

    /// Reset the transcript to the greeting. Tasks are unaffected.
    pub fn clear_conversation(&self) {
        self.transcript.lock().reset();
        info!("conversation cleared");
    }

    /// Snapshot history and task context, then record the user message.
    /// History is taken before the new message is appended.
    fn build_request(&self, text: &str) -> ProviderRequest {
        let history = {
            let mut transcript = self.transcript.lock();
            let history = history_window(transcript.messages(), self.config.history_window);
            transcript.push(ChatMessage::user(text));
            history
        };

        let request = ProviderRequest::new(text, history);
        if self.config.share_task_snapshot {
            let snapshot = self.store.lock().snapshot_text();
            request.with_task_context(snapshot)
        } else {
            request
        }
    }
}
