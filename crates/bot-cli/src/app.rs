use anyhow::Context;
use log::debug;

use assistants_client::{
    resolve_thread, submit_message, AssistantsApi, AssistantsClient, Config, ListMessagesQuery,
    MessageRole, SortOrder,
};

use crate::args::Args;

/// Runs one question through the assistant and returns the flattened
/// answer as indented JSON, ready for stdout.
///
/// The assistant is retrieved up front so a bad id aborts before the
/// thread or its message exist on the service.
pub async fn run(args: &Args, config: &Config) -> anyhow::Result<String> {
    let client = AssistantsClient::new(config).context("building the API client")?;

    let assistant = client
        .retrieve_assistant(&config.assistant_id)
        .await
        .context("retrieving the assistant")?;
    debug!("using assistant {}", assistant.id);

    let thread = resolve_thread(&client, args.thread_id.as_deref())
        .await
        .context("resolving the conversation thread")?;
    debug!("using thread {}", thread.id);

    let query = ListMessagesQuery {
        order: Some(SortOrder::Asc),
        after: args.message_id.clone(),
        ..ListMessagesQuery::default()
    };

    let response = submit_message(
        &client,
        config,
        &assistant.id,
        &thread.id,
        MessageRole::User,
        &args.question,
        &query,
    )
    .await
    .context("submitting the question")?;

    Ok(serde_json::to_string_pretty(&response.processed_messages)?)
}
