use log::info;

use assistants_client::{Assistant, AssistantsApi, AssistantsClient, Config};

/// Shared application state, one copy behind `web::Data`.
pub struct AppState {
    pub client: AssistantsClient,
    pub config: Config,
    pub assistant: Assistant,
}

impl AppState {
    /// Builds the upstream client and retrieves the configured assistant
    /// once at startup.
    pub async fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = AssistantsClient::new(&config)?;
        let assistant = client.retrieve_assistant(&config.assistant_id).await?;
        info!(
            "serving assistant {} ({})",
            assistant.id,
            assistant.name.as_deref().unwrap_or("unnamed")
        );

        Ok(AppState {
            client,
            config,
            assistant,
        })
    }
}
