use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::{Deserialize, Serialize};

use assistants_client::{
    resolve_thread, submit_message, ListMessagesQuery, MessageRole, ProcessedMessage, SortOrder,
};

use crate::state::AppState;

const MISSING_FIELDS: &str = "thread_id and question are required";

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub after_message_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub assistant_id: String,
    pub thread_id: String,
    pub message_id: String,
    pub run_id: String,
    /// Whole seconds between run creation and completion.
    pub execution_time: i64,
    pub messages: Vec<ProcessedMessage>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn handler(
    state: web::Data<AppState>,
    body: web::Json<MessageRequest>,
) -> impl Responder {
    let Some(question) = body.question.as_deref().filter(|q| !q.is_empty()) else {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: MISSING_FIELDS.to_string(),
        });
    };

    let thread = match resolve_thread(&state.client, body.thread_id.as_deref()).await {
        Ok(thread) => thread,
        Err(err) => {
            error!("thread resolution failed: {err}");
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: err.to_string(),
            });
        }
    };

    let query = ListMessagesQuery {
        order: Some(SortOrder::Asc),
        after: body.after_message_id.clone().filter(|id| !id.is_empty()),
        ..ListMessagesQuery::default()
    };

    let submitted = submit_message(
        &state.client,
        &state.config,
        &state.assistant.id,
        &thread.id,
        MessageRole::User,
        question,
        &query,
    )
    .await;

    match submitted {
        Ok(response) => {
            let run = &response.completed_run;
            let execution_time = run.completed_at.map(|done| done - run.created_at).unwrap_or(0);
            HttpResponse::Ok().json(MessageResponse {
                assistant_id: state.assistant.id.clone(),
                thread_id: thread.id,
                message_id: response.created_message.id.clone(),
                run_id: run.id.clone(),
                execution_time,
                messages: response.processed_messages,
            })
        }
        Err(err) => {
            error!("message submission failed: {err}");
            HttpResponse::BadGateway().json(ErrorResponse {
                error: err.to_string(),
            })
        }
    }
}
