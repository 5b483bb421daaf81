//! Result of one conversational turn

use crate::error::PilotError;
use crate::tools::DispatchReport;
use crate::types::ChatMessage;

/// How a turn ended. Provider failures are an outcome, not an error: the
/// transcript already holds the apology message when this is returned.
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    /// The provider answered and its invocations were applied
    Completed {
        reply: ChatMessage,
        report: DispatchReport,
    },
    /// The provider call failed; no task was touched
    ProviderFailed { reply: ChatMessage, error: PilotError },
}

impl TurnOutcome {
    /// The assistant message appended for this turn
    pub fn reply(&self) -> &ChatMessage {
        match self {
            Self::Completed { reply, .. } | Self::ProviderFailed { reply, .. } => reply,
        }
    }

    pub fn report(&self) -> Option<&DispatchReport> {
        match self {
            Self::Completed { report, .. } => Some(report),
            Self::ProviderFailed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
