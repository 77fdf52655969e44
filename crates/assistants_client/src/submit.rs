use std::time::{Duration, Instant};

use log::debug;
use serde::{Serialize, Serializer};
use tokio::time::{sleep, timeout};

use crate::api::models::{
    ListMessagesQuery, Message, MessageList, MessageRequest, MessageRole, Run, RunRequest,
    RunStatus,
};
use crate::client_trait::AssistantsApi;
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::processing::{process_messages, ProcessedMessage};

/// Everything one submit sequence produced. `execution_time` is the
/// wall-clock span from just before the message was created until the
/// message page came back, so it includes the whole run wait.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessageResponse {
    pub completed_run: Run,
    pub created_message: Message,
    #[serde(serialize_with = "duration_as_nanos")]
    pub execution_time: Duration,
    pub processed_messages: Vec<ProcessedMessage>,
    pub raw_messages: MessageList,
}

fn duration_as_nanos<S>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u128(duration.as_nanos())
}

/// Runs the full submit sequence against one thread: append the message,
/// start a run for `assistant_id`, wait for it to complete, then list the
/// thread's messages with `query` and flatten them.
///
/// The run wait uses `config.poll_interval` and `config.run_timeout`; see
/// [`wait_for_run_completion`]. Any step failing fails the whole call.
pub async fn submit_message<C>(
    api: &C,
    config: &Config,
    assistant_id: &str,
    thread_id: &str,
    role: MessageRole,
    content: &str,
    query: &ListMessagesQuery,
) -> Result<SubmitMessageResponse>
where
    C: AssistantsApi + ?Sized,
{
    let start = Instant::now();

    let created_message = api
        .create_message(
            thread_id,
            &MessageRequest {
                role,
                content: content.to_string(),
            },
        )
        .await?;
    debug!("created message {} on thread {thread_id}", created_message.id);

    let run = api
        .create_run(
            thread_id,
            &RunRequest {
                assistant_id: assistant_id.to_string(),
            },
        )
        .await?;
    debug!("created run {} on thread {thread_id}", run.id);

    let completed_run = wait_for_run_completion(
        api,
        thread_id,
        &run.id,
        config.poll_interval,
        config.run_timeout,
    )
    .await?;

    let raw_messages = api.list_messages(thread_id, query).await?;
    let execution_time = start.elapsed();

    Ok(SubmitMessageResponse {
        processed_messages: process_messages(&raw_messages),
        completed_run,
        created_message,
        execution_time,
        raw_messages,
    })
}

/// Polls the run until its status is `completed` and returns that final
/// snapshot.
///
/// The whole loop runs under `deadline`, counted from entry, so expiry
/// interrupts a poll in flight as well as the sleep between polls. A
/// retrieval error ends the wait immediately. Non-completed terminal
/// statuses keep polling until the deadline decides.
pub async fn wait_for_run_completion<C>(
    api: &C,
    thread_id: &str,
    run_id: &str,
    poll_interval: Duration,
    deadline: Duration,
) -> Result<Run>
where
    C: AssistantsApi + ?Sized,
{
    let wait = async {
        loop {
            let run = api.retrieve_run(thread_id, run_id).await?;
            if run.status == RunStatus::Completed {
                return Ok(run);
            }
            debug!("run {run_id} status {:?}, polling again in {poll_interval:?}", run.status);
            sleep(poll_interval).await;
        }
    };

    match timeout(deadline, wait).await {
        Ok(result) => result,
        Err(_) => Err(ClientError::RunTimeout {
            run_id: run_id.to_string(),
            timeout: deadline,
        }),
    }
}
