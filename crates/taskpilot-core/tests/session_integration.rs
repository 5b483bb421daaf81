//! Integration tests for TaskPilot core
//!
//! Drives full conversational turns through a scripted provider and checks
//! the store, transcript and request shapes that result.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use taskpilot_core::{
    CapabilityProvider, ChatRole, Config, PilotError, PilotResult, Priority, ProviderReply,
    ProviderRequest, Session, SessionConfig, TaskStatus, ToolInvocation, TurnOutcome,
    llm::HistoryRole, prompts, tools::AI_GENERATED_CATEGORY,
};

/// Provider that replays canned replies and records every request
#[derive(Default)]
struct ScriptedProvider {
    replies: Mutex<VecDeque<PilotResult<ProviderReply>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<PilotResult<ProviderReply>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl CapabilityProvider for ScriptedProvider {
    async fn generate(&self, request: &ProviderRequest) -> PilotResult<ProviderReply> {
        self.requests.lock().push(request.clone());
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(ProviderReply::text("Nothing scripted.")))
    }
}

fn call(name: &str, args: &[(&str, &str)]) -> ToolInvocation {
    ToolInvocation::with_args(name, args.iter().copied())
}

#[tokio::test]
async fn test_full_conversation_flow() -> PilotResult<()> {
    let provider = ScriptedProvider::new(vec![
        Ok(ProviderReply::text("Added two tasks.").with_calls(vec![
            call("add_task", &[("title", "Buy milk")]),
            call(
                "add_task",
                &[
                    ("title", "Renew passport"),
                    ("priority", "High"),
                    ("description", "Expires in March"),
                ],
            ),
        ])),
        Ok(ProviderReply::text("Done.").with_calls(vec![call(
            "complete_task",
            &[("task_id", "3")],
        )])),
        Ok(ProviderReply::default().with_calls(vec![call("delete_task", &[("task_id", "1")])])),
    ]);
    let config = SessionConfig {
        share_task_snapshot: true,
        ..Default::default()
    };
    let session = Session::new(provider.clone(), config);

    session
        .send_message("add buy milk and renew passport, the passport is urgent")
        .await?;
    let tasks = session.tasks();
    assert_eq!(tasks.len(), 5);
    // newest first
    assert_eq!(tasks[0].title, "Renew passport");
    assert_eq!(tasks[0].priority, Priority::High);
    assert_eq!(tasks[0].description, "Expires in March");
    assert_eq!(tasks[1].title, "Buy milk");
    assert_eq!(tasks[1].priority, Priority::Medium);
    assert!(tasks[..2].iter().all(|t| t.category == AI_GENERATED_CATEGORY));
    assert!(tasks[..2].iter().all(|t| t.status == TaskStatus::Pending));

    session.send_message("I finished the auth work").await?;
    assert_eq!(session.task("3").map(|t| t.status), Some(TaskStatus::Completed));

    let outcome = session.send_message("remove the setup task").await?;
    assert!(session.task("1").is_none());
    assert_eq!(outcome.reply().content, prompts::FALLBACK_REPLY);

    let stats = session.stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 1);

    // greeting + three user/assistant pairs
    let messages = session.messages();
    assert_eq!(messages.len(), 7);
    assert_eq!(messages[0].role, ChatRole::Assistant);
    assert_eq!(messages[0].content, prompts::GREETING);

    let requests = provider.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].history.len(), 1);
    assert_eq!(requests[0].history[0].role, HistoryRole::Model);
    assert_eq!(requests[2].history.len(), 5);
    assert_eq!(requests[2].message, "remove the setup task");

    // the second turn sees the tasks added by the first
    let context = requests[1].task_context.as_deref().unwrap_or_default();
    assert!(context.contains("Renew passport"));
    assert!(context.contains("id=3"));

    Ok(())
}

#[tokio::test]
async fn test_malformed_invocations_leave_store_untouched() -> PilotResult<()> {
    let provider = ScriptedProvider::new(vec![Ok(ProviderReply::text("Hmm.").with_calls(vec![
        call("add_task", &[]),
        call("add_task", &[("title", "   ")]),
        call("complete_task", &[]),
        call("delete_task", &[("task_id", "does-not-exist")]),
        call("archive_task", &[("task_id", "1")]),
        call("list_tasks", &[("status", "Pending")]),
    ]))]);
    let session = Session::new(provider, SessionConfig::default());
    let before = session.tasks();

    let outcome = session.send_message("do odd things").await?;

    assert_eq!(session.tasks(), before);
    let report = outcome.report().expect("turn completed");
    assert_eq!(report.outcomes.len(), 6);
    assert_eq!(report.mutation_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_provider_failure_then_recovery() -> PilotResult<()> {
    let provider = ScriptedProvider::new(vec![
        Err(PilotError::provider_status("service unavailable", "google", 503)),
        Ok(ProviderReply::text("Back online.")
            .with_calls(vec![call("add_task", &[("title", "Retry later")])])),
    ]);
    let session = Session::new(provider, SessionConfig::default());

    let failed = session.send_message("add retry later").await?;
    assert!(matches!(failed, TurnOutcome::ProviderFailed { .. }));
    assert_eq!(failed.reply().content, prompts::PROVIDER_ERROR_REPLY);
    assert_eq!(session.tasks().len(), 3);
    assert!(!session.is_busy());

    let recovered = session.send_message("add retry later").await?;
    assert!(recovered.is_success());
    assert_eq!(session.tasks()[0].title, "Retry later");
    assert_eq!(session.messages().len(), 5);
    Ok(())
}

#[tokio::test]
async fn test_missing_api_key_reports_provider_failure() -> PilotResult<()> {
    let mut config = Config::default();
    config.provider.api_key = None;

    let session = Session::from_config(&config)?;
    let outcome = session.send_message("hello").await?;

    match outcome {
        TurnOutcome::ProviderFailed { error, .. } => assert!(error.is_provider_failure()),
        other => panic!("expected provider failure, got {:?}", other),
    }
    assert_eq!(session.tasks().len(), 3);
    Ok(())
}
