use anyhow::Context;
use clap::Parser;

use assistants_client::Config;
use bot_server::logging::init_logging;
use bot_server::server::run_server;
use bot_server::state::AppState;

#[derive(Parser, Debug, Clone)]
#[command(name = "bot-server")]
#[command(about = "HTTP facade for the assistant relay")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Server port
    #[arg(long, env = "PORT", default_value = "8080")]
    port: u16,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = Config::from_env().context("loading configuration from the environment")?;
    let state = AppState::from_config(config)
        .await
        .context("connecting to the assistants service")?;

    run_server(state, cli.port).await?;
    Ok(())
}
