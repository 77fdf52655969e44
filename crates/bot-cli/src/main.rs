use anyhow::Context;
use clap::Parser;

use assistants_client::Config;
use bot_cli::app;
use bot_cli::args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries nothing but the final JSON
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("loading configuration from the environment")?;
    println!("{}", app::run(&args, &config).await?);

    Ok(())
}
