pub mod api;
pub mod client_trait;
pub mod config;
pub mod error;
pub mod processing;
pub mod submit;
pub mod threads;

pub use api::client::AssistantsClient;
pub use api::models::{
    Assistant, ImageFile, ListMessagesQuery, Message, MessageContent, MessageList, MessageRequest,
    MessageRole, MessageText, Run, RunLastError, RunRequest, RunStatus, SortOrder, Thread,
    ThreadDeleted, ThreadRequest,
};
pub use client_trait::AssistantsApi;
pub use config::{Config, ConfigError};
pub use error::{ClientError, Result};
pub use processing::{process_messages, ProcessedMessage};
pub use submit::{submit_message, wait_for_run_completion, SubmitMessageResponse};
pub use threads::resolve_thread;
