use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::models::{
    Assistant, ErrorEnvelope, ListMessagesQuery, Message, MessageList, MessageRequest, Run,
    RunRequest, Thread, ThreadDeleted, ThreadRequest,
};
use crate::client_trait::AssistantsApi;
use crate::config::Config;
use crate::error::{ClientError, Result};

const BETA_HEADER: &str = "OpenAI-Beta";
const BETA_VALUE: &str = "assistants=v2";
const ORG_HEADER: &str = "OpenAI-Organization";

// HTTP implementation of the assistants surface
#[derive(Debug, Clone)]
pub struct AssistantsClient {
    client: Client,
    base_url: String,
}

impl AssistantsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .default_headers(Self::default_headers(config)?)
            .timeout(config.request_timeout)
            .build()?;

        Ok(AssistantsClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Credentials and the beta opt-in ride on every request as default
    /// headers. The bearer value is marked sensitive so it stays out of
    /// debug output.
    fn default_headers(config: &Config) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(BETA_HEADER, HeaderValue::from_static(BETA_VALUE));

        if let Some(org_id) = &config.org_id {
            headers.insert(ORG_HEADER, HeaderValue::from_str(org_id)?);
        }

        Ok(headers)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response.text().await?));
        }
        Ok(response.json::<T>().await?)
    }
}

/// Maps a non-success response to [`ClientError::Api`], pulling the
/// message out of the error envelope when the body parses as one and
/// falling back to the raw body when it does not.
fn api_error(status: StatusCode, body: String) -> ClientError {
    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body,
    };
    ClientError::Api { status, message }
}

#[async_trait]
impl AssistantsApi for AssistantsClient {
    async fn retrieve_assistant(&self, assistant_id: &str) -> Result<Assistant> {
        let url = self.url(&format!("/assistants/{assistant_id}"));
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn create_thread(&self, request: &ThreadRequest) -> Result<Thread> {
        let url = self.url("/threads");
        debug!("POST {url}");
        let response = self.client.post(&url).json(request).send().await?;
        Self::decode(response).await
    }

    async fn retrieve_thread(&self, thread_id: &str) -> Result<Thread> {
        let url = self.url(&format!("/threads/{thread_id}"));
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn delete_thread(&self, thread_id: &str) -> Result<ThreadDeleted> {
        let url = self.url(&format!("/threads/{thread_id}"));
        debug!("DELETE {url}");
        let response = self.client.delete(&url).send().await?;
        Self::decode(response).await
    }

    async fn create_message(&self, thread_id: &str, request: &MessageRequest) -> Result<Message> {
        let url = self.url(&format!("/threads/{thread_id}/messages"));
        debug!("POST {url}");
        let response = self.client.post(&url).json(request).send().await?;
        Self::decode(response).await
    }

    async fn create_run(&self, thread_id: &str, request: &RunRequest) -> Result<Run> {
        let url = self.url(&format!("/threads/{thread_id}/runs"));
        debug!("POST {url}");
        let response = self.client.post(&url).json(request).send().await?;
        Self::decode(response).await
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        let url = self.url(&format!("/threads/{thread_id}/runs/{run_id}"));
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn list_messages(&self, thread_id: &str, query: &ListMessagesQuery) -> Result<MessageList> {
        let url = self.url(&format!("/threads/{thread_id}/messages"));
        debug!("GET {url}");
        let response = self.client.get(&url).query(query).send().await?;
        Self::decode(response).await
    }
}
