//! Tests for the session turn loop

use super::*;
use crate::config::SessionConfig;
use crate::error::{PilotError, PilotResult};
use crate::llm::{
    CapabilityProvider, HistoryRole, MockCapabilityProvider, ProviderReply, ProviderRequest,
};
use crate::prompts;
use crate::store::TaskStore;
use crate::tools::{AI_GENERATED_CATEGORY, ToolInvocation};
use crate::types::{ChatRole, Priority, TaskDraft, TaskPatch, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

fn session_with(mock: MockCapabilityProvider) -> Session {
    Session::with_store(
        Arc::new(mock),
        SessionConfig::default(),
        TaskStore::with_demo_tasks(),
    )
}

fn replying(reply: ProviderReply) -> MockCapabilityProvider {
    let mut mock = MockCapabilityProvider::new();
    mock.expect_generate()
        .times(1)
        .returning(move |_| Ok(reply.clone()));
    mock
}

#[tokio::test]
async fn test_add_task_invocation_creates_ai_task() {
    let reply = ProviderReply::text("Added it.")
        .with_calls(vec![ToolInvocation::with_args("add_task", [("title", "Buy milk")])]);
    let session = session_with(replying(reply));
    let before = session.tasks().len();

    let outcome = session.send_message("remind me to buy milk").await.unwrap();

    let tasks = session.tasks();
    assert_eq!(tasks.len(), before + 1);
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(tasks[0].priority, Priority::Medium);
    assert_eq!(tasks[0].category, AI_GENERATED_CATEGORY);
    assert!(outcome.is_success());
    assert_eq!(outcome.reply().content, "Added it.");
    assert!(outcome.reply().has_tool_calls());
}

#[tokio::test]
async fn test_complete_then_delete_in_one_turn() {
    let reply = ProviderReply::default().with_calls(vec![
        ToolInvocation::with_args("complete_task", [("task_id", "2")]),
        ToolInvocation::with_args("delete_task", [("task_id", "2")]),
    ]);
    let session = session_with(replying(reply));

    session.send_message("finish and drop task 2").await.unwrap();

    assert!(session.task("2").is_none());
    assert_eq!(session.tasks().len(), 2);
}

#[tokio::test]
async fn test_provider_failure_appends_apology_and_keeps_store() {
    let mut mock = MockCapabilityProvider::new();
    mock.expect_generate()
        .times(1)
        .returning(|_| Err(PilotError::provider("quota exceeded")));
    let session = session_with(mock);
    let tasks_before = session.tasks();
    let messages_before = session.messages().len();

    let outcome = session.send_message("add a task").await.unwrap();

    assert!(!outcome.is_success());
    assert_eq!(session.tasks(), tasks_before);
    let messages = session.messages();
    // user message plus exactly one apology
    assert_eq!(messages.len(), messages_before + 2);
    let last = messages.last().unwrap();
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.content, prompts::PROVIDER_ERROR_REPLY);
    assert!(!session.is_busy());
    assert_eq!(session.state(), TurnState::Idle);
}

#[tokio::test]
async fn test_empty_text_uses_fallback_reply() {
    let reply = ProviderReply::text("   ")
        .with_calls(vec![ToolInvocation::with_args("list_tasks", [("status", "All")])]);
    let session = session_with(replying(reply));

    let outcome = session.send_message("what's on my list?").await.unwrap();

    assert_eq!(outcome.reply().content, prompts::FALLBACK_REPLY);
    assert_eq!(outcome.report().unwrap().mutation_count(), 0);
}

#[tokio::test]
async fn test_unknown_tool_is_ignored() {
    let reply = ProviderReply::text("ok")
        .with_calls(vec![ToolInvocation::with_args("snooze_task", [("task_id", "3")])]);
    let session = session_with(replying(reply));
    let before = session.tasks();

    let outcome = session.send_message("snooze 3").await.unwrap();

    assert_eq!(session.tasks(), before);
    // still recorded for audit display
    assert_eq!(outcome.reply().tool_calls.as_ref().unwrap()[0].name, "snooze_task");
}

#[tokio::test]
async fn test_blank_message_rejected_without_turn() {
    let mut mock = MockCapabilityProvider::new();
    mock.expect_generate().never();
    let session = session_with(mock);

    let err = session.send_message("   ").await.unwrap_err();

    assert!(matches!(err, PilotError::InvalidInput(_)));
    assert_eq!(session.messages().len(), 1);
}

#[tokio::test]
async fn test_history_window_excludes_new_message_and_maps_roles() {
    let mut mock = MockCapabilityProvider::new();
    mock.expect_generate()
        .times(7)
        .returning(|request: &ProviderRequest| {
            assert!(request.history.len() <= 10);
            assert!(request.history.iter().all(|t| t.parts[0].text != request.message));
            if request.message == "last" {
                // 1 greeting + 12 messages precede it; only the newest 10 are sent
                assert_eq!(request.history.len(), 10);
                assert_eq!(request.history[0].role, HistoryRole::User);
                assert_eq!(request.history[0].parts[0].text, "message 1");
                assert_eq!(request.history[1].role, HistoryRole::Model);
                assert_eq!(request.history[9].role, HistoryRole::Model);
            }
            Ok(ProviderReply::text("ok"))
        });

    let session = session_with(mock);
    for i in 0..6 {
        session.send_message(&format!("message {i}")).await.unwrap();
    }
    session.send_message("last").await.unwrap();
}

#[tokio::test]
async fn test_task_snapshot_shared_when_enabled() {
    let mut mock = MockCapabilityProvider::new();
    mock.expect_generate()
        .withf(|request: &ProviderRequest| {
            request
                .task_context
                .as_deref()
                .is_some_and(|c| c.contains("Configure Neon Database"))
        })
        .times(1)
        .returning(|_| Ok(ProviderReply::text("You have 2 pending tasks.")));
    let config = SessionConfig {
        share_task_snapshot: true,
        ..Default::default()
    };
    let session = Session::with_store(Arc::new(mock), config, TaskStore::with_demo_tasks());

    session.send_message("list my tasks").await.unwrap();
}

#[tokio::test]
async fn test_task_snapshot_omitted_by_default() {
    let mut mock = MockCapabilityProvider::new();
    mock.expect_generate()
        .withf(|request: &ProviderRequest| request.task_context.is_none())
        .times(1)
        .returning(|_| Ok(ProviderReply::text("ok")));
    let session = session_with(mock);

    session.send_message("list my tasks").await.unwrap();
}

#[tokio::test]
async fn test_clear_conversation_leaves_greeting() {
    let mut mock = MockCapabilityProvider::new();
    mock.expect_generate()
        .returning(|_| Ok(ProviderReply::text("ok")));
    let session = session_with(mock);
    for i in 0..4 {
        session.send_message(&format!("hello {i}")).await.unwrap();
    }

    session.clear_conversation();

    let messages = session.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, prompts::GREETING);
    assert_eq!(session.tasks().len(), 3);
}

#[test]
fn test_direct_task_operations() {
    let session = session_with(MockCapabilityProvider::new());

    let tasks = session.add_task(TaskDraft::titled("Write docs"));
    assert_eq!(tasks[0].title, "Write docs");
    assert_eq!(tasks[0].category, "General");

    let id = tasks[0].id.clone();
    session.update_task(&id, TaskPatch::status(TaskStatus::Completed));
    assert!(session.task(&id).unwrap().is_completed());

    let tasks = session.delete_task(&id);
    assert_eq!(tasks.len(), 3);
    assert_eq!(session.stats().completed, 1);
}

#[test]
fn test_reopen_completed_task_keeps_order() {
    let session = session_with(MockCapabilityProvider::new());
    let order: Vec<String> = session.tasks().into_iter().map(|t| t.id).collect();
    assert_eq!(session.task("1").unwrap().status, TaskStatus::Completed);

    session.update_task("1", TaskPatch::status(TaskStatus::Pending));

    let tasks = session.tasks();
    assert_eq!(tasks.iter().map(|t| t.id.clone()).collect::<Vec<_>>(), order);
    assert_eq!(session.task("1").unwrap().status, TaskStatus::Pending);
    assert_eq!(session.stats().completed, 0);

    session.update_task("1", TaskPatch::status(TaskStatus::Completed));
    assert!(session.task("1").unwrap().is_completed());
}

#[test]
fn test_due_date_set_on_add_and_update() {
    let session = session_with(MockCapabilityProvider::new());

    let tasks = session.add_task(TaskDraft::titled("File taxes").with_due_date("2026-04-15"));
    assert_eq!(tasks[0].due_date.as_deref(), Some("2026-04-15"));

    session.update_task("2", TaskPatch::due_date("next friday"));
    let task = session.task("2").unwrap();
    assert_eq!(task.due_date.as_deref(), Some("next friday"));
    assert_eq!(task.title, "Configure Neon Database");
}

#[test]
fn test_new_respects_seed_flag() {
    let config = SessionConfig {
        seed_demo_tasks: false,
        ..Default::default()
    };
    let session = Session::new(Arc::new(MockCapabilityProvider::new()), config);
    assert!(session.tasks().is_empty());
}

/// Provider that parks until released, to hold a turn open
struct GatedProvider {
    release: Notify,
}

#[async_trait]
impl CapabilityProvider for GatedProvider {
    async fn generate(&self, _request: &ProviderRequest) -> PilotResult<ProviderReply> {
        self.release.notified().await;
        Ok(ProviderReply::text("finally"))
    }
}

#[tokio::test]
async fn test_send_while_busy_is_rejected() {
    let provider = Arc::new(GatedProvider {
        release: Notify::new(),
    });
    let session = Arc::new(Session::with_store(
        provider.clone(),
        SessionConfig::default(),
        TaskStore::new(),
    ));

    let first = {
        let session = session.clone();
        tokio::spawn(async move { session.send_message("first").await })
    };

    tokio::time::timeout(Duration::from_secs(5), async {
        while !session.is_busy() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("first turn never started");

    let err = session.send_message("second").await.unwrap_err();
    assert!(matches!(err, PilotError::Busy));
    assert_eq!(session.state(), TurnState::AwaitingProviderResponse);

    provider.release.notify_one();
    let outcome = first.await.unwrap().unwrap();
    assert_eq!(outcome.reply().content, "finally");
    assert!(!session.is_busy());

    // greeting, "first", reply; the rejected message was never recorded
    let contents: Vec<String> = session.messages().into_iter().map(|m| m.content).collect();
    assert_eq!(contents.len(), 3);
    assert!(!contents.iter().any(|c| c == "second"));
}
