use log::warn;

use crate::api::models::{Thread, ThreadRequest};
use crate::client_trait::AssistantsApi;
use crate::error::Result;

/// Retrieves `existing_id` when one is given, otherwise creates a fresh
/// thread.
///
/// Every retrieval failure falls back to creation: an unknown, malformed
/// or otherwise unreadable id downgrades to a new conversation instead of
/// aborting. Only the creation call can fail the resolution.
pub async fn resolve_thread<C>(api: &C, existing_id: Option<&str>) -> Result<Thread>
where
    C: AssistantsApi + ?Sized,
{
    if let Some(thread_id) = existing_id.filter(|id| !id.is_empty()) {
        match api.retrieve_thread(thread_id).await {
            Ok(thread) => return Ok(thread),
            Err(err) => warn!("error retrieving thread {thread_id}: {err}; creating a new one"),
        }
    }

    api.create_thread(&ThreadRequest::default()).await
}
