use async_trait::async_trait;

use crate::api::models::{
    Assistant, ListMessagesQuery, Message, MessageList, MessageRequest, Run, RunRequest, Thread,
    ThreadDeleted, ThreadRequest,
};
use crate::error::Result;

/// Operation surface of the hosted assistants service.
///
/// [`AssistantsClient`](crate::AssistantsClient) implements it over HTTP;
/// the thread-resolution and submit flows are generic over this trait so
/// tests can script upstream behavior without a server.
#[async_trait]
pub trait AssistantsApi: Send + Sync {
    async fn retrieve_assistant(&self, assistant_id: &str) -> Result<Assistant>;

    async fn create_thread(&self, request: &ThreadRequest) -> Result<Thread>;

    async fn retrieve_thread(&self, thread_id: &str) -> Result<Thread>;

    async fn delete_thread(&self, thread_id: &str) -> Result<ThreadDeleted>;

    async fn create_message(&self, thread_id: &str, request: &MessageRequest) -> Result<Message>;

    async fn create_run(&self, thread_id: &str, request: &RunRequest) -> Result<Run>;

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run>;

    async fn list_messages(&self, thread_id: &str, query: &ListMessagesQuery) -> Result<MessageList>;
}
